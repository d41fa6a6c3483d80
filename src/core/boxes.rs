use super::color::{ColorSource, Rgb};
use super::constants::{DEFAULT_DELAY_MS, DEFAULT_HORN_LENGTH_M, DEFAULT_NAME_PREFIX, DEFAULT_X_M};
use std::fmt;
use thiserror::Error;

/// A speaker unit placed on the grid.
///
/// Fields:
/// - `name`: free-form label drawn to the right of the box
/// - `x`: signed position of the horn mouth in meters (right edge of the box)
/// - `horn_length`: horizontal extent in meters, drawn leftwards from `x`
/// - `delay`: time offset in milliseconds, visualized as a dashed guide
/// - `color`: fill color of the box
#[derive(Clone, Debug, PartialEq)]
pub struct SpeakerBox {
    pub name: String,
    pub x: f64,
    pub horn_length: f64,
    pub delay: f64,
    pub color: Rgb,
}

impl SpeakerBox {
    /// Current value of `field` as shown in its input element.
    pub fn field_text(&self, field: BoxField) -> String {
        match field {
            BoxField::Name => self.name.clone(),
            BoxField::X => self.x.to_string(),
            BoxField::HornLength => self.horn_length.to_string(),
            BoxField::Delay => self.delay.to_string(),
        }
    }
}

/// Editable attribute of a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoxField {
    Name,
    X,
    HornLength,
    Delay,
}

impl BoxField {
    /// All fields in control panel order.
    pub const ALL: [BoxField; 4] = [
        BoxField::Name,
        BoxField::X,
        BoxField::HornLength,
        BoxField::Delay,
    ];

    /// Stable key used in DOM ids.
    pub fn key(self) -> &'static str {
        match self {
            BoxField::Name => "name",
            BoxField::X => "x",
            BoxField::HornLength => "horn-length",
            BoxField::Delay => "delay",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BoxField::Name => "Name: ",
            BoxField::X => "X Position (meters): ",
            BoxField::HornLength => "Horn Length (meters): ",
            BoxField::Delay => "Delay (ms): ",
        }
    }

    #[inline]
    pub fn is_numeric(self) -> bool {
        !matches!(self, BoxField::Name)
    }

    /// DOM id of the input bound to this field of box `index`.
    pub fn input_id(self, index: usize) -> String {
        format!("box-{}-{}", index, self.key())
    }
}

impl fmt::Display for BoxField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum EditError {
    #[error("no box at index {index} (store holds {len})")]
    NoSuchBox { index: usize, len: usize },
    #[error("invalid number {input:?} for field {field}")]
    InvalidNumber { field: BoxField, input: String },
}

/// Parse numeric input for `field`.
///
/// Surrounding whitespace is ignored. Empty, non-numeric and non-finite
/// input (`inf`, `NaN`) is rejected rather than coerced.
pub fn parse_numeric(field: BoxField, raw: &str) -> Result<f64, EditError> {
    let invalid = || EditError::InvalidNumber {
        field,
        input: raw.to_string(),
    };
    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}

/// Ordered, append-only sequence of boxes.
///
/// A box is identified by its index, which also fixes its stacking row in the
/// layout. Boxes are never removed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoxStore {
    boxes: Vec<SpeakerBox>,
}

impl BoxStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SpeakerBox> {
        self.boxes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SpeakerBox> {
        self.boxes.iter()
    }

    pub fn as_slice(&self) -> &[SpeakerBox] {
        &self.boxes
    }

    /// Append a box with default geometry and the next color from `colors`.
    /// Returns the index of the new box.
    pub fn add_box(&mut self, colors: &mut impl ColorSource) -> usize {
        let index = self.boxes.len();
        self.boxes.push(SpeakerBox {
            name: format!("{} {}", DEFAULT_NAME_PREFIX, index + 1),
            x: DEFAULT_X_M,
            horn_length: DEFAULT_HORN_LENGTH_M,
            delay: DEFAULT_DELAY_MS,
            color: colors.next_color(),
        });
        index
    }

    /// Apply raw input text to one field of box `index`.
    ///
    /// On error the store is left untouched.
    pub fn apply_edit(
        &mut self,
        index: usize,
        field: BoxField,
        raw: &str,
    ) -> Result<(), EditError> {
        let len = self.boxes.len();
        let target = self
            .boxes
            .get_mut(index)
            .ok_or(EditError::NoSuchBox { index, len })?;
        match field {
            BoxField::Name => target.name = raw.to_string(),
            BoxField::X => target.x = parse_numeric(field, raw)?,
            BoxField::HornLength => target.horn_length = parse_numeric(field, raw)?,
            BoxField::Delay => target.delay = parse_numeric(field, raw)?,
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a BoxStore {
    type Item = &'a SpeakerBox;
    type IntoIter = std::slice::Iter<'a, SpeakerBox>;

    fn into_iter(self) -> Self::IntoIter {
        self.boxes.iter()
    }
}
