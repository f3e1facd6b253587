//! Sugiyama layered graph layout algorithm.
//!
//! Phases:
//!   1. Ranking (longest path from sources, back-edges ignored)
//!   2. Crossing minimisation (median heuristic)
//!   3. Coordinate assignment
//!   4. Edge routing (smooth step)
//!
//! Nodes and edges are addressed by their input position throughout, so every
//! tie is broken by input order and the same graph always yields the same
//! layout.

use std::collections::{HashMap, VecDeque};

use tracing::{debug, warn};

use super::route::smooth_step_waypoints;
use super::types::{EdgeHints, LayoutEdge, LayoutNode, LayoutResult, Point, Size};
use crate::config::{Direction, LayoutConfig};
use crate::error::LayoutWarning;
use crate::model::GraphModel;

/// (edge position, source position, target position).
type EdgeTriple = (usize, usize, usize);

// ─── Cycle Breaking ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unvisited,
    OnStack,
    Done,
}

/// Find the edges that close a cycle, using an iterative depth-first search.
///
/// Sources are visited first, then any node not reached yet, both in input
/// order; successors are followed in edge input order. An edge into a node
/// that is still on the stack (including a self-loop) is a back-edge.
fn find_back_edges(node_count: usize, edges: &[EdgeTriple]) -> Vec<usize> {
    let mut outgoing: Vec<Vec<(usize, usize)>> = vec![Vec::new(); node_count];
    let mut in_degree = vec![0usize; node_count];
    for &(edge, src, tgt) in edges {
        outgoing[src].push((edge, tgt));
        if src != tgt {
            in_degree[tgt] += 1;
        }
    }

    let roots = (0..node_count)
        .filter(|&n| in_degree[n] == 0)
        .chain((0..node_count).filter(|&n| in_degree[n] > 0));

    let mut state = vec![Visit::Unvisited; node_count];
    let mut back_edges: Vec<usize> = Vec::new();
    // (node, index of the next outgoing edge to follow)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in roots {
        if state[root] != Visit::Unvisited {
            continue;
        }
        state[root] = Visit::OnStack;
        stack.push((root, 0));

        while let Some(&(node, cursor)) = stack.last() {
            match outgoing[node].get(cursor) {
                Some(&(edge, next)) => {
                    let top = stack.len() - 1;
                    stack[top].1 += 1;
                    match state[next] {
                        Visit::Unvisited => {
                            state[next] = Visit::OnStack;
                            stack.push((next, 0));
                        }
                        Visit::OnStack => back_edges.push(edge),
                        Visit::Done => {}
                    }
                }
                None => {
                    state[node] = Visit::Done;
                    stack.pop();
                }
            }
        }
    }

    back_edges.sort_unstable();
    back_edges
}

// ─── Rank Assignment ─────────────────────────────────────────────────────────

pub struct RankAssignment {
    /// Rank per node, indexed by input position.
    pub ranks: Vec<usize>,
    pub rank_count: usize,
    /// Edge positions ignored for ranking, ascending.
    pub back_edges: Vec<usize>,
}

impl RankAssignment {
    /// Longest-path ranking: sources get rank 0, every other node sits one
    /// rank after its furthest predecessor.
    pub fn assign(node_count: usize, edges: &[EdgeTriple]) -> Self {
        let back_edges = find_back_edges(node_count, edges);

        let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); node_count];
        let mut in_degree = vec![0usize; node_count];
        for &(edge, src, tgt) in edges {
            if back_edges.binary_search(&edge).is_ok() {
                continue;
            }
            outgoing[src].push(tgt);
            in_degree[tgt] += 1;
        }

        let mut queue: VecDeque<usize> = (0..node_count).filter(|&n| in_degree[n] == 0).collect();
        let mut ranks = vec![0usize; node_count];
        while let Some(node) = queue.pop_front() {
            for &next in &outgoing[node] {
                ranks[next] = ranks[next].max(ranks[node] + 1);
                in_degree[next] -= 1;
                if in_degree[next] == 0 {
                    queue.push_back(next);
                }
            }
        }

        let rank_count = ranks.iter().copied().max().map_or(0, |m| m + 1);

        Self {
            ranks,
            rank_count,
            back_edges,
        }
    }

    pub fn is_back_edge(&self, edge: usize) -> bool {
        self.back_edges.binary_search(&edge).is_ok()
    }
}

// ─── Crossing Minimisation ───────────────────────────────────────────────────

/// Median of the given positions; the mean of the two middle values when the
/// count is even.
fn median(positions: &mut [f64]) -> Option<f64> {
    if positions.is_empty() {
        return None;
    }
    positions.sort_by(|a, b| a.total_cmp(b));
    let mid = positions.len() / 2;
    if positions.len() % 2 == 1 {
        Some(positions[mid])
    } else {
        Some((positions[mid - 1] + positions[mid]) / 2.0)
    }
}

/// Reorder `ordering[rank]` by the median position of each node's neighbours
/// in `ordering[fixed]`. Nodes with no such neighbours keep their current
/// position as key; equal keys fall back to input order.
fn reorder_rank(ordering: &mut [Vec<usize>], rank: usize, fixed: usize, neighbors: &[Vec<usize>]) {
    let fixed_pos: HashMap<usize, usize> = ordering[fixed]
        .iter()
        .enumerate()
        .map(|(pos, &node)| (node, pos))
        .collect();

    let mut keyed: Vec<(f64, usize)> = ordering[rank]
        .iter()
        .enumerate()
        .map(|(pos, &node)| {
            let mut positions: Vec<f64> = neighbors[node]
                .iter()
                .filter_map(|nb| fixed_pos.get(nb))
                .map(|&p| p as f64)
                .collect();
            (median(&mut positions).unwrap_or(pos as f64), node)
        })
        .collect();

    keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
    ordering[rank] = keyed.into_iter().map(|(_, node)| node).collect();
}

/// Number of pairwise crossings between adjacent ranks.
fn count_crossings(ordering: &[Vec<usize>], down: &[Vec<usize>]) -> usize {
    let mut total = 0usize;
    for r in 0..ordering.len().saturating_sub(1) {
        let tgt_pos: HashMap<usize, usize> = ordering[r + 1]
            .iter()
            .enumerate()
            .map(|(i, &n)| (n, i))
            .collect();
        let mut segments: Vec<(usize, usize)> = Vec::new();
        for (sp, &src) in ordering[r].iter().enumerate() {
            for nb in &down[src] {
                if let Some(&tp) = tgt_pos.get(nb) {
                    segments.push((sp, tp));
                }
            }
        }
        for i in 0..segments.len() {
            for j in (i + 1)..segments.len() {
                let (a0, a1) = segments[i];
                let (b0, b1) = segments[j];
                if (a0 < b0 && a1 > b1) || (a0 > b0 && a1 < b1) {
                    total += 1;
                }
            }
        }
    }
    total
}

/// Order the nodes inside each rank.
///
/// Runs `passes` sweeps, alternating down (each rank against the one above it)
/// and up (against the one below). This is a heuristic: it returns the
/// ordering with the fewest crossings seen, not a global optimum.
///
/// Only edges between adjacent ranks count; a node whose neighbours are all
/// two or more ranks away keeps its slot.
pub fn minimise_crossings(
    ra: &RankAssignment,
    edges: &[EdgeTriple],
    passes: usize,
) -> Vec<Vec<usize>> {
    let node_count = ra.ranks.len();
    let mut ordering: Vec<Vec<usize>> = vec![Vec::new(); ra.rank_count];
    for node in 0..node_count {
        ordering[ra.ranks[node]].push(node);
    }

    let mut up: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    let mut down: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    for &(edge, src, tgt) in edges {
        if ra.is_back_edge(edge) {
            continue;
        }
        if ra.ranks[tgt] == ra.ranks[src] + 1 {
            down[src].push(tgt);
            up[tgt].push(src);
        }
    }

    let mut best = ordering.clone();
    let mut best_crossings = count_crossings(&ordering, &down);

    for pass in 0..passes {
        if best_crossings == 0 {
            break;
        }
        if pass % 2 == 0 {
            for rank in 1..ra.rank_count {
                reorder_rank(&mut ordering, rank, rank - 1, &up);
            }
        } else {
            for rank in (0..ra.rank_count.saturating_sub(1)).rev() {
                reorder_rank(&mut ordering, rank, rank + 1, &down);
            }
        }
        let crossings = count_crossings(&ordering, &down);
        if crossings < best_crossings {
            best = ordering.clone();
            best_crossings = crossings;
        }
    }

    debug!(crossings = best_crossings, "ordering settled");
    best
}

// ─── Coordinate Assignment ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Placement {
    pub rank: usize,
    pub order: usize,
    /// Top-left corner.
    pub position: Point,
}

/// Place every node. Ranks advance along the primary axis; inside a rank
/// nodes are packed along the cross axis and centred on the widest rank.
/// The result is shifted so the top-left-most node sits at (margin, margin).
pub fn assign_coordinates(
    ordering: &[Vec<usize>],
    node_count: usize,
    config: &LayoutConfig,
) -> Vec<Placement> {
    let (primary_extent, cross_extent) = config.node_extents();
    let span = |count: usize| -> f64 {
        if count == 0 {
            0.0
        } else {
            count as f64 * cross_extent + (count - 1) as f64 * config.node_sep
        }
    };
    let widest = ordering.iter().map(|r| span(r.len())).fold(0.0, f64::max);

    let mut placements = vec![Placement::default(); node_count];
    for (rank, nodes) in ordering.iter().enumerate() {
        let primary = rank as f64 * (primary_extent + config.rank_sep);
        let offset = (widest - span(nodes.len())) / 2.0;
        for (order, &node) in nodes.iter().enumerate() {
            let cross = offset + order as f64 * (cross_extent + config.node_sep);
            let position = match config.direction {
                Direction::LR => Point::new(primary, cross),
                Direction::TB => Point::new(cross, primary),
            };
            placements[node] = Placement {
                rank,
                order,
                position,
            };
        }
    }

    if !placements.is_empty() {
        let min_x = placements.iter().map(|p| p.position.x).fold(f64::INFINITY, f64::min);
        let min_y = placements.iter().map(|p| p.position.y).fold(f64::INFINITY, f64::min);
        for p in &mut placements {
            p.position.x += config.margin - min_x;
            p.position.y += config.margin - min_y;
        }
    }

    placements
}

/// Extent of all nodes plus `margin` on every side. Zero for no nodes.
pub fn bounding_box(nodes: &[LayoutNode], margin: f64) -> Size {
    if nodes.is_empty() {
        return Size::default();
    }
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_right = f64::NEG_INFINITY;
    let mut max_bottom = f64::NEG_INFINITY;
    for n in nodes {
        let r = n.rect();
        min_x = min_x.min(r.x);
        min_y = min_y.min(r.y);
        max_right = max_right.max(r.right());
        max_bottom = max_bottom.max(r.bottom());
    }
    Size::new(
        (max_right + margin) - (min_x - margin),
        (max_bottom + margin) - (min_y - margin),
    )
}

// ─── SugiyamaLayout Engine ───────────────────────────────────────────────────

/// Sugiyama layered layout engine.
pub struct SugiyamaLayout;

impl SugiyamaLayout {
    /// Run the full pipeline. Cycles never fail the layout: their back-edges
    /// are reported as a `DegradedLayoutCycle` warning on the result.
    pub fn layout(graph: &GraphModel, config: &LayoutConfig) -> LayoutResult {
        if graph.is_empty() {
            return LayoutResult::empty(config.direction);
        }

        let node_count = graph.node_count();
        let edges = graph.edge_endpoints();

        let ra = RankAssignment::assign(node_count, &edges);
        let mut warnings = Vec::new();
        if !ra.back_edges.is_empty() {
            let edge_ids: Vec<String> = ra
                .back_edges
                .iter()
                .map(|&e| graph.edge_at(e).id.clone())
                .collect();
            warn!(edges = ?edge_ids, "graph has cycles; ignoring back-edges for ranking");
            warnings.push(LayoutWarning::DegradedLayoutCycle { edge_ids });
        }

        let ordering = minimise_crossings(&ra, &edges, config.ordering_passes);
        let placements = assign_coordinates(&ordering, node_count, config);

        let size = Size::new(config.node_width, config.node_height);
        let nodes: Vec<LayoutNode> = placements
            .iter()
            .enumerate()
            .map(|(pos, p)| LayoutNode {
                node: graph.node_at(pos).clone(),
                rank: p.rank,
                order: p.order,
                position: p.position,
                size,
            })
            .collect();

        let routed: Vec<LayoutEdge> = edges
            .iter()
            .map(|&(edge, src, tgt)| {
                let edge = graph.edge_at(edge).clone();
                let waypoints =
                    smooth_step_waypoints(&nodes[src].rect(), &nodes[tgt].rect(), config.direction);
                LayoutEdge {
                    hints: EdgeHints::for_style(edge.style),
                    edge,
                    waypoints,
                }
            })
            .collect();

        let bounds = bounding_box(&nodes, config.margin);
        debug!(
            nodes = nodes.len(),
            edges = routed.len(),
            ranks = ra.rank_count,
            width = bounds.width,
            height = bounds.height,
            "layout complete"
        );

        LayoutResult {
            nodes,
            edges: routed,
            bounding_box: bounds,
            direction: config.direction,
            warnings,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_sugiyama.rs"]
mod tests;
