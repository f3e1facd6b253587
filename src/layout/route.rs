//! Smooth-step edge geometry.
//!
//! An edge leaves the rank-facing side of its source, bends once halfway along
//! the primary axis and enters the opposite side of its target. Corners are
//! rounded when the path is turned into SVG path data.

use super::types::{Point, Rect};
use crate::config::Direction;

/// Corner radius of a smooth-step elbow.
pub const BORDER_RADIUS: f64 = 5.0;

/// Orthogonal waypoints from `source` to `target`.
pub fn smooth_step_waypoints(source: &Rect, target: &Rect, direction: Direction) -> Vec<Point> {
    match direction {
        Direction::LR => {
            let start = Point::new(source.right(), source.center().y);
            let end = Point::new(target.x, target.center().y);
            if start.y == end.y {
                return vec![start, end];
            }
            let mid_x = (start.x + end.x) / 2.0;
            vec![
                start,
                Point::new(mid_x, start.y),
                Point::new(mid_x, end.y),
                end,
            ]
        }
        Direction::TB => {
            let start = Point::new(source.center().x, source.bottom());
            let end = Point::new(target.center().x, target.y);
            if start.x == end.x {
                return vec![start, end];
            }
            let mid_y = (start.y + end.y) / 2.0;
            vec![
                start,
                Point::new(start.x, mid_y),
                Point::new(end.x, mid_y),
                end,
            ]
        }
    }
}

/// SVG path data for a polyline with every inner corner rounded.
///
/// The radius shrinks on short segments so neighbouring arcs never overlap.
pub fn smooth_step_path(points: &[Point], radius: f64) -> String {
    if points.len() < 2 {
        return String::new();
    }
    let mut d = format!("M{} {}", points[0].x, points[0].y);
    for i in 1..points.len() - 1 {
        let (prev, corner, next) = (points[i - 1], points[i], points[i + 1]);
        let r = radius
            .min(distance(prev, corner) / 2.0)
            .min(distance(corner, next) / 2.0);
        let enter = toward(corner, prev, r);
        let leave = toward(corner, next, r);
        d.push_str(&format!(
            " L{} {} Q{} {} {} {}",
            enter.x, enter.y, corner.x, corner.y, leave.x, leave.y
        ));
    }
    let last = points[points.len() - 1];
    d.push_str(&format!(" L{} {}", last.x, last.y));
    d
}

fn distance(a: Point, b: Point) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// `from` moved `by` units in the direction of `to`.
fn toward(from: Point, to: Point, by: f64) -> Point {
    let len = distance(from, to);
    if len == 0.0 {
        return from;
    }
    Point::new(
        from.x + (to.x - from.x) * by / len,
        from.y + (to.y - from.y) * by / len,
    )
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_route.rs"]
mod tests;
