use super::*;

#[test]
fn test_scale_is_uniform_and_recentred() {
    let scale = scale_factor(1600);
    assert_eq!(scale, 0.5);
    let rect = to_view_rect(
        NativeBox {
            x: 200.0,
            y: 100.0,
            width: 46.0,
            height: 17.0,
        },
        scale,
    );
    assert_eq!(rect.width, 23.0);
    assert_eq!(rect.height, 8.5);
    assert_eq!(rect.x, 100.0 - 11.5);
    assert_eq!(rect.y, 50.0 - 4.25);
}

#[test]
fn test_native_width_matching_display_is_identity_scale() {
    let rect = to_view_rect(
        NativeBox {
            x: 10.0,
            y: 10.0,
            width: 4.0,
            height: 2.0,
        },
        scale_factor(800),
    );
    assert_eq!(
        rect,
        ViewRect {
            x: 8.0,
            y: 9.0,
            width: 4.0,
            height: 2.0
        }
    );
}
