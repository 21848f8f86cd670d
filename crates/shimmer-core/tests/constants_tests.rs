// Host-side tests for tuning constants and their relationships.

use shimmer_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(PARTICLE_AREA_PER > 0.0);
    assert!(POINTER_RADIUS > 0.0);
    assert!(PUSH_STRENGTH > 0.0);

    // Size range must stay positive and small relative to the push radius.
    assert!(PARTICLE_SIZE_MIN > 0.0);
    assert!(PARTICLE_SIZE_SPAN > 0.0);
    assert!(PARTICLE_SIZE_MIN + PARTICLE_SIZE_SPAN < POINTER_RADIUS);

    assert!(DRIFT_SPEED_MAX > 0.0);

    // Hover effects enlarge, never shrink.
    assert!(CURSOR_HOVER_SCALE > 1.0);
    assert!(TILT_HOVER_SCALE > 1.0);

    assert!(TILT_MAX_DEG > 0.0 && TILT_MAX_DEG < 90.0);
    assert!(TILT_PERSPECTIVE_PX > 0.0);

    assert!(BLUR_TRAIL_MS > 0);
    assert!(SCROLL_ACTIVATE_OFFSET > 0.0);
}

#[test]
fn palette_is_translucent() {
    for color in PARTICLE_COLORS {
        assert!(color.a > 0.0 && color.a < 1.0);
    }
}

#[test]
fn rgba_css_formatting() {
    assert_eq!(PARTICLE_COLORS[0].css(), "rgba(255, 79, 216, 0.4)");
    assert_eq!(PARTICLE_COLORS[1].css(), "rgba(138, 43, 226, 0.4)");
    assert_eq!(Rgba::new(0, 0, 0, 1.0).css(), "rgba(0, 0, 0, 1)");
}

#[test]
fn cursor_accent_is_a_hex_color() {
    assert!(CURSOR_ACCENT.starts_with('#'));
    assert_eq!(CURSOR_ACCENT.len(), 7);
}
