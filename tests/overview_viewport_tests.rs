use approx::assert_relative_eq;
use ecodash_rs::api::{OverviewCanvas, OverviewFrame};

fn frame() -> OverviewFrame {
    OverviewFrame::default()
}

fn canvas() -> OverviewCanvas {
    OverviewCanvas::default()
}

#[test]
fn reference_view_at_zoom_one_covers_the_whole_canvas() {
    let rect = frame().view_rect(canvas(), 1.0, (126.5, 43.8));
    assert_relative_eq!(rect.x, 0.0);
    assert_relative_eq!(rect.y, 0.0);
    assert_relative_eq!(rect.width, 150.0);
    assert_relative_eq!(rect.height, 100.0);
}

#[test]
fn zooming_in_shrinks_and_centers_the_rect() {
    let rect = frame().view_rect(canvas(), 2.0, (126.5, 43.8));
    assert_relative_eq!(rect.width, 75.0);
    assert_relative_eq!(rect.height, 50.0);
    assert_relative_eq!(rect.x, 37.5);
    assert_relative_eq!(rect.y, 25.0);
}

#[test]
fn panning_east_moves_the_rect_right() {
    // +2.5° of longitude over the assumed 10° span is a quarter canvas.
    let rect = frame().view_rect(canvas(), 2.0, (129.0, 43.8));
    assert_relative_eq!(rect.x, 75.0);
    assert_relative_eq!(rect.y, 25.0);
}

#[test]
fn panning_north_moves_the_rect_up() {
    let rect = frame().view_rect(canvas(), 2.0, (126.5, 45.3));
    assert_relative_eq!(rect.x, 37.5);
    // +1.5° of latitude over the 6° span is a quarter canvas upward.
    assert_relative_eq!(rect.y, 0.0);
}

#[test]
fn the_rect_never_leaves_the_canvas() {
    let extreme = frame().view_rect(canvas(), 4.0, (200.0, -40.0));
    assert!(extreme.x >= 0.0);
    assert!(extreme.y >= 0.0);
    assert!(extreme.x + extreme.width <= 150.0 + 1e-9);
    assert!(extreme.y + extreme.height <= 100.0 + 1e-9);
}

#[test]
fn zooming_out_past_the_frame_clamps_to_the_canvas() {
    let rect = frame().view_rect(canvas(), 0.5, (126.5, 43.8));
    assert_relative_eq!(rect.width, 150.0);
    assert_relative_eq!(rect.height, 100.0);
    assert_relative_eq!(rect.x, 0.0);
    assert_relative_eq!(rect.y, 0.0);
}

#[test]
fn degenerate_zoom_falls_back_to_the_full_canvas() {
    for zoom in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let rect = frame().view_rect(canvas(), zoom, (126.5, 43.8));
        assert_relative_eq!(rect.x, 0.0);
        assert_relative_eq!(rect.y, 0.0);
        assert_relative_eq!(rect.width, 150.0);
        assert_relative_eq!(rect.height, 100.0);
    }
}
