use filmscope::ui::zoom::{clamp_axis, clamp_window, nice_extent, Window};

fn assert_close(a: f64, b: f64, label: &str) {
    assert!((a - b).abs() <= 1e-9, "{label} mismatch: {a} vs {b}");
}

#[test]
fn nice_extent_rounds_outward() {
    assert_eq!(nice_extent(3.0, 97.0), (0.0, 100.0));
    assert_eq!(nice_extent(62.0, 216.0), (60.0, 220.0));
    let (lo, hi) = nice_extent(0.13, 0.87);
    assert_close(lo, 0.1, "fractional lo");
    assert_close(hi, 0.9, "fractional hi");
}

#[test]
fn nice_extent_widens_degenerate_span() {
    assert_eq!(nice_extent(5.0, 5.0), (4.0, 6.0));
}

#[test]
fn scale_one_reproduces_base() {
    let base = (0.0, 100.0);
    assert_eq!(clamp_axis(base, base, 8.0), base);
}

#[test]
fn zoom_cannot_exceed_max_scale() {
    let base = (0.0, 80.0);
    // 40x zoom request: span gets floored at base_span / 8.
    let (lo, hi) = clamp_axis((10.0, 12.0), base, 8.0);
    assert_close(hi - lo, 10.0, "span");
    assert!(lo >= base.0 && hi <= base.1);
}

#[test]
fn window_cannot_grow_past_base() {
    let base = (0.0, 80.0);
    let (lo, hi) = clamp_axis((-50.0, 200.0), base, 8.0);
    assert_eq!((lo, hi), base);
}

#[test]
fn pan_is_clamped_to_base_extent() {
    let base = (0.0, 100.0);
    // Panned off the left edge at 4x zoom.
    assert_eq!(clamp_axis((-30.0, -5.0), base, 8.0), (0.0, 25.0));
    // Panned off the right edge.
    assert_eq!(clamp_axis((90.0, 115.0), base, 8.0), (75.0, 100.0));
}

#[test]
fn both_axes_clamp_independently() {
    let base = Window::new((0.0, 100.0), (0.0, 10.0));
    let clamped = clamp_window(Window::new((-10.0, 40.0), (8.0, 13.0)), base, 8.0);
    assert_eq!(clamped.x, (0.0, 50.0));
    assert_eq!(clamped.y, (5.0, 10.0));
}

#[test]
fn every_visible_point_stays_inside_base() {
    let base = Window::new((0.0, 200.0), (0.0, 10.0));
    // A handful of adversarial gestures: zoom-ins, pans, and mixtures.
    let gestures = [
        Window::new((150.0, 500.0), (9.0, 20.0)),
        Window::new((-100.0, -50.0), (-5.0, -1.0)),
        Window::new((0.0, 1.0), (0.0, 0.01)),
    ];
    for g in gestures {
        let w = clamp_window(g, base, 8.0);
        assert!(w.x.0 >= base.x.0 && w.x.1 <= base.x.1);
        assert!(w.y.0 >= base.y.0 && w.y.1 <= base.y.1);
        assert!(w.x.1 - w.x.0 >= (base.x.1 - base.x.0) / 8.0 - 1e-9);
        assert!(w.y.1 - w.y.0 >= (base.y.1 - base.y.0) / 8.0 - 1e-9);
    }
}
