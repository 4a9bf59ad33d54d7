use tui_memory::term::RenderThrottle;

#[test]
fn render_throttle_renders_first_frame() {
    let mut t = RenderThrottle::new(1000);
    assert!(t.should_render(0, 1));
}

#[test]
fn render_throttle_renders_on_change() {
    let mut t = RenderThrottle::new(1000);
    assert!(t.should_render(0, 1));
    assert!(t.should_render(1, 2));
}

#[test]
fn render_throttle_skips_unchanged_frames_until_heartbeat() {
    let mut t = RenderThrottle::new(1000);
    assert!(t.should_render(0, 1));
    assert!(!t.should_render(10, 1));
    assert!(!t.should_render(999, 1));
    assert!(t.should_render(1000, 1));
}

#[test]
fn render_throttle_force_redraws() {
    let mut t = RenderThrottle::new(1000);
    assert!(t.should_render(0, 1));
    t.force();
    assert!(t.should_render(5, 1));
}
