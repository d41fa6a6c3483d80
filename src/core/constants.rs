/// Grid and box geometry constants.
///
/// Lengths ending in `_PX` are canvas backing pixels, `_M` are meters and
/// `_MS` milliseconds. Keeping them here keeps magic numbers out of the
/// layout code.
// Grid scale: pixels per meter
pub const CELL_SIZE_PX: f64 = 50.0;
// Gridlines run from -HALF_EXTENT_M to +HALF_EXTENT_M
pub const HALF_EXTENT_M: f64 = 10.0;
pub const GRID_STEP_M: f64 = 0.5;

// Axis decorations
pub const GRIDLINE_WIDTH_PX: f64 = 1.0;
pub const BASELINE_WIDTH_PX: f64 = 2.0;
pub const TICK_HALF_PX: f64 = 5.0;
pub const AXIS_LABEL_DROP_PX: f64 = 20.0; // label sits below the baseline

// Box row
pub const BOX_HEIGHT_PX: f64 = 20.0;
pub const BOX_EDGE_WIDTH_PX: f64 = 3.0;
pub const NAME_PAD_X_PX: f64 = 5.0;
pub const NAME_RISE_PX: f64 = 5.0;
pub const CONNECTOR_RISE_PX: f64 = 10.0;

// Delay guide
pub const GUIDE_WIDTH_PX: f64 = 1.0;
pub const GUIDE_DASH_PX: [f64; 2] = [5.0, 5.0];

// Paints and fonts (CSS values)
pub const INK: &str = "black";
pub const GRIDLINE_COLOR: &str = "lightgray";
pub const GUIDE_COLOR: &str = "gray";
pub const LABEL_FONT: &str = "12px Arial";

// New box defaults
pub const DEFAULT_X_M: f64 = 0.0;
pub const DEFAULT_HORN_LENGTH_M: f64 = 2.0;
pub const DEFAULT_DELAY_MS: f64 = 0.0;
pub const DEFAULT_NAME_PREFIX: &str = "Speaker";

// Numeric input granularity in the control panel
pub const INPUT_STEP: f64 = 0.1;
