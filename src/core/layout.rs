use super::boxes::SpeakerBox;
use super::color::Rgb;
use super::constants::*;
use glam::DVec2;
use std::borrow::Cow;

// Absorbs float error in `half_extent / step` so exact multiples keep their last line
const STEP_COUNT_EPS: f64 = 1e-9;

/// Fixed grid configuration.
///
/// - `cell_size_px`: pixels per meter, the scale of the coordinate transform
/// - `half_extent_m`: gridlines span `-half_extent_m..=half_extent_m`
/// - `step_m`: spacing between gridlines
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    pub cell_size_px: f64,
    pub half_extent_m: f64,
    pub step_m: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size_px: CELL_SIZE_PX,
            half_extent_m: HALF_EXTENT_M,
            step_m: GRID_STEP_M,
        }
    }
}

impl GridConfig {
    /// Meter positions of every gridline, left to right.
    ///
    /// Positions are derived from an integer step index so no drift
    /// accumulates. Lines never fall outside the extent; an extent that is not
    /// a whole number of steps stops at the last full step.
    pub fn gridline_meters(&self) -> impl Iterator<Item = f64> {
        let step = self.step_m;
        let steps = if step > 0.0 && step.is_finite() && self.half_extent_m.is_finite() {
            (self.half_extent_m.max(0.0) / step + STEP_COUNT_EPS).floor() as i64
        } else {
            -1
        };
        (-steps..=steps).map(move |i| i as f64 * step)
    }
}

/// Canvas backing size in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// False for zero, negative or non-finite dimensions.
    pub fn is_drawable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    #[inline]
    pub fn as_vec2(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }
}

/// Meters-to-pixels transform for one canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub canvas: CanvasSize,
    pub grid: GridConfig,
}

impl Viewport {
    pub fn new(canvas: CanvasSize, grid: GridConfig) -> Self {
        Self { canvas, grid }
    }

    #[inline]
    pub fn center_x(&self) -> f64 {
        self.canvas.width / 2.0
    }

    #[inline]
    pub fn pixel_x(&self, meters: f64) -> f64 {
        self.center_x() + meters * self.grid.cell_size_px
    }

    /// Y of the zero row, one cell above the bottom edge.
    #[inline]
    pub fn baseline_y(&self) -> f64 {
        self.canvas.height - self.grid.cell_size_px
    }

    /// Bottom Y of the row occupied by the box at `index`.
    #[inline]
    pub fn row_y(&self, index: usize) -> f64 {
        self.baseline_y() - index as f64 * self.grid.cell_size_px
    }
}

/// Fill or stroke color of a draw operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    Named(&'static str),
    Rgb(Rgb),
}

impl Paint {
    pub fn css(&self) -> Cow<'static, str> {
        match self {
            Paint::Named(name) => Cow::Borrowed(*name),
            Paint::Rgb(rgb) => Cow::Owned(rgb.to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

impl TextAlign {
    pub fn as_css(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        }
    }
}

/// One primitive of a frame's display list.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear {
        size: DVec2,
    },
    Line {
        from: DVec2,
        to: DVec2,
        paint: Paint,
        width: f64,
        dash: Option<[f64; 2]>,
    },
    FillRect {
        origin: DVec2,
        size: DVec2,
        paint: Paint,
    },
    Text {
        text: String,
        at: DVec2,
        paint: Paint,
        font: &'static str,
        align: TextAlign,
    },
}

/// Resolved pixel geometry of a single box row.
///
/// - `row_y`: bottom of the row
/// - `right_x`: pixel position of the box's `x`
/// - `width`: rectangle width, clamped to be non-negative
/// - `delay_offset`: signed horizontal shift of the guide from the left edge
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxGeometry {
    pub row_y: f64,
    pub right_x: f64,
    pub width: f64,
    pub delay_offset: f64,
}

impl BoxGeometry {
    pub fn compute(view: &Viewport, index: usize, speaker: &SpeakerBox) -> Self {
        let cell = view.grid.cell_size_px;
        // Positive delay shifts the guide left
        let delay_offset = -(speaker.delay / cell) * cell;
        Self {
            row_y: view.row_y(index),
            right_x: view.pixel_x(speaker.x),
            width: speaker.horn_length.max(0.0) * cell,
            delay_offset,
        }
    }

    #[inline]
    pub fn left_x(&self) -> f64 {
        self.right_x - self.width
    }

    #[inline]
    pub fn top_y(&self) -> f64 {
        self.row_y - BOX_HEIGHT_PX
    }

    #[inline]
    pub fn guide_x(&self) -> f64 {
        self.left_x() + self.delay_offset
    }
}

/// Axis label text for a gridline, one decimal place.
pub fn format_meters(meters: f64) -> String {
    // Avoid "-0.0"
    let meters = if meters == 0.0 { 0.0 } else { meters };
    format!("{:.1}", meters)
}

/// Build the complete display list for one frame.
///
/// The list always starts with a full-canvas clear. A canvas with no drawable
/// area yields just that clear.
pub fn layout_frame(boxes: &[SpeakerBox], canvas: CanvasSize, grid: &GridConfig) -> Vec<DrawOp> {
    let mut ops = vec![DrawOp::Clear {
        size: canvas.as_vec2(),
    }];
    if !canvas.is_drawable() {
        return ops;
    }
    let view = Viewport::new(canvas, *grid);
    push_grid(&mut ops, &view);
    for (index, speaker) in boxes.iter().enumerate() {
        push_box(&mut ops, &view, index, speaker);
    }
    ops
}

fn push_grid(ops: &mut Vec<DrawOp>, view: &Viewport) {
    let height = view.canvas.height;
    let baseline = view.baseline_y();
    for meters in view.grid.gridline_meters() {
        let x = view.pixel_x(meters);
        let line_paint = if meters == 0.0 {
            Paint::Named(INK)
        } else {
            Paint::Named(GRIDLINE_COLOR)
        };
        ops.push(DrawOp::Line {
            from: DVec2::new(x, 0.0),
            to: DVec2::new(x, height),
            paint: line_paint,
            width: GRIDLINE_WIDTH_PX,
            dash: None,
        });
        ops.push(DrawOp::Line {
            from: DVec2::new(x, baseline - TICK_HALF_PX),
            to: DVec2::new(x, baseline + TICK_HALF_PX),
            paint: Paint::Named(INK),
            width: GRIDLINE_WIDTH_PX,
            dash: None,
        });
        ops.push(DrawOp::Text {
            text: format_meters(meters),
            at: DVec2::new(x, baseline + AXIS_LABEL_DROP_PX),
            paint: Paint::Named(INK),
            font: LABEL_FONT,
            align: TextAlign::Center,
        });
    }
    ops.push(DrawOp::Line {
        from: DVec2::new(0.0, baseline),
        to: DVec2::new(view.canvas.width, baseline),
        paint: Paint::Named(INK),
        width: BASELINE_WIDTH_PX,
        dash: None,
    });
}

fn push_box(ops: &mut Vec<DrawOp>, view: &Viewport, index: usize, speaker: &SpeakerBox) {
    let geo = BoxGeometry::compute(view, index, speaker);
    let left = geo.left_x();
    let guide_x = geo.guide_x();

    ops.push(DrawOp::FillRect {
        origin: DVec2::new(left, geo.top_y()),
        size: DVec2::new(geo.width, BOX_HEIGHT_PX),
        paint: Paint::Rgb(speaker.color),
    });
    ops.push(DrawOp::Line {
        from: DVec2::new(left, geo.top_y()),
        to: DVec2::new(left, geo.row_y),
        paint: Paint::Named(INK),
        width: BOX_EDGE_WIDTH_PX,
        dash: None,
    });
    ops.push(DrawOp::Text {
        text: speaker.name.clone(),
        at: DVec2::new(geo.right_x + NAME_PAD_X_PX, geo.row_y - NAME_RISE_PX),
        paint: Paint::Named(INK),
        font: LABEL_FONT,
        align: TextAlign::Left,
    });
    ops.push(DrawOp::Line {
        from: DVec2::new(guide_x, 0.0),
        to: DVec2::new(guide_x, view.canvas.height),
        paint: Paint::Named(GUIDE_COLOR),
        width: GUIDE_WIDTH_PX,
        dash: Some(GUIDE_DASH_PX),
    });
    let connector_y = geo.row_y - CONNECTOR_RISE_PX;
    ops.push(DrawOp::Line {
        from: DVec2::new(left, connector_y),
        to: DVec2::new(guide_x, connector_y),
        paint: Paint::Named(GUIDE_COLOR),
        width: GUIDE_WIDTH_PX,
        dash: None,
    });
}
