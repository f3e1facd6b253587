use super::*;
use crate::layout::types::Size;

fn rect(x: f64, y: f64) -> Rect {
    Rect::new(Point::new(x, y), Size::new(260.0, 90.0))
}

#[test]
fn test_lr_straight_edge_has_two_points() {
    let pts = smooth_step_waypoints(&rect(100.0, 100.0), &rect(440.0, 100.0), Direction::LR);
    assert_eq!(pts, vec![Point::new(360.0, 145.0), Point::new(440.0, 145.0)]);
}

#[test]
fn test_lr_elbow_bends_at_midpoint() {
    let pts = smooth_step_waypoints(&rect(100.0, 100.0), &rect(440.0, 230.0), Direction::LR);
    assert_eq!(
        pts,
        vec![
            Point::new(360.0, 145.0),
            Point::new(400.0, 145.0),
            Point::new(400.0, 275.0),
            Point::new(440.0, 275.0),
        ]
    );
}

#[test]
fn test_tb_elbow_bends_at_midpoint() {
    let pts = smooth_step_waypoints(&rect(100.0, 100.0), &rect(400.0, 270.0), Direction::TB);
    assert_eq!(
        pts,
        vec![
            Point::new(230.0, 190.0),
            Point::new(230.0, 230.0),
            Point::new(530.0, 230.0),
            Point::new(530.0, 270.0),
        ]
    );
}

#[test]
fn test_path_for_straight_line() {
    let d = smooth_step_path(&[Point::new(360.0, 145.0), Point::new(440.0, 145.0)], BORDER_RADIUS);
    assert_eq!(d, "M360 145 L440 145");
}

#[test]
fn test_path_rounds_corners() {
    let pts = [
        Point::new(360.0, 145.0),
        Point::new(400.0, 145.0),
        Point::new(400.0, 275.0),
        Point::new(440.0, 275.0),
    ];
    assert_eq!(
        smooth_step_path(&pts, BORDER_RADIUS),
        "M360 145 L395 145 Q400 145 400 150 L400 270 Q400 275 405 275 L440 275"
    );
}

#[test]
fn test_path_radius_clamped_on_short_segments() {
    let pts = [Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(4.0, 10.0)];
    assert_eq!(smooth_step_path(&pts, 5.0), "M0 0 L2 0 Q4 0 4 2 L4 10");
}

#[test]
fn test_path_needs_two_points() {
    assert_eq!(smooth_step_path(&[], BORDER_RADIUS), "");
    assert_eq!(smooth_step_path(&[Point::new(1.0, 1.0)], BORDER_RADIUS), "");
}
