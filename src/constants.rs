// Page wiring and canvas sizing used by the web frontend.

// DOM element ids (must match index.html)
pub const CANVAS_ID: &str = "gridCanvas";
pub const ADD_BOX_BUTTON_ID: &str = "add-box";
pub const CONTROLS_CONTAINER_ID: &str = "box-controls";

// Class applied to each per-box control group
pub const CONTROL_GROUP_CLASS: &str = "box-controls";

// Canvas takes this share of the viewport width and the full height
pub const CANVAS_WIDTH_FRACTION: f64 = 0.8;
pub const CANVAS_HEIGHT_FRACTION: f64 = 1.0;

/// Canvas backing size for a given viewport, floored to whole pixels.
#[inline]
pub fn canvas_size_for_viewport(inner_width: f64, inner_height: f64) -> (u32, u32) {
    let w = (inner_width * CANVAS_WIDTH_FRACTION).max(0.0).floor();
    let h = (inner_height * CANVAS_HEIGHT_FRACTION).max(0.0).floor();
    (w as u32, h as u32)
}
