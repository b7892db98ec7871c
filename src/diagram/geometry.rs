use crate::model::annotation::ViewRect;

/// Width diagrams are displayed at in the report.
pub const DISPLAY_WIDTH: f64 = 800.0;

/// Native diagram box: `x`/`y` are the centre, not the corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NativeBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

pub fn scale_factor(image_width: u32) -> f64 {
    DISPLAY_WIDTH / f64::from(image_width)
}

/// Uniformly rescales a centre-anchored box and re-anchors it top-left.
pub fn to_view_rect(native: NativeBox, scale: f64) -> ViewRect {
    let x = native.x * scale;
    let y = native.y * scale;
    let width = native.width * scale;
    let height = native.height * scale;
    ViewRect {
        x: x - width / 2.0,
        y: y - height / 2.0,
        width,
        height,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/diagram/geometry.rs"]
mod tests;
