//! Snap-point resolution for the drawer panel.
//!
//! Declared snap sizes come in three flavours: fractions of the viewport
//! height, raw pixel counts and CSS-like length strings (`"320px"`,
//! `"20rem"`). Resolution turns them into a table of pixel offsets measured
//! from the fully expanded panel position, most expanded first.

use std::fmt;
use std::str::FromStr;

use prismatia_ui_graphics::{Px, Rem, DEFAULT_ROOT_FONT_SIZE};
use smallvec::SmallVec;

/// Heights closer than this are treated as the same snap point.
const DEDUP_TOLERANCE: f32 = 1.0;

/// Resolved snap table. Most drawers declare a handful of points.
pub type SnapTable = SmallVec<[ResolvedSnapPoint; 4]>;

/// A user-declared snap size.
#[derive(Clone, Debug, PartialEq)]
pub enum SnapPointInput {
    /// `n <= 1` is a fraction of the viewport height, `n > 1` is pixels.
    Number(f32),
    /// A length string ending in `px` or `rem`. Kept verbatim so that snap
    /// notifications can report the declaration the user wrote.
    Length(String),
}

impl SnapPointInput {
    /// Converts the declaration to a pixel height, or `None` when the value
    /// cannot be interpreted.
    pub fn resolve_height(&self, viewport_height: f32, root_font_size: f32) -> Option<f32> {
        let height = match self {
            SnapPointInput::Number(n) => {
                if !n.is_finite() {
                    return None;
                }
                if *n <= 1.0 {
                    n.clamp(0.0, 1.0) * viewport_height
                } else {
                    *n
                }
            }
            SnapPointInput::Length(text) => match parse_length(text).ok()? {
                Length::Px(px) => px.0,
                Length::Rem(rem) => rem.to_px(root_font_size).0,
            },
        };
        height.is_finite().then_some(height)
    }
}

impl From<f32> for SnapPointInput {
    fn from(value: f32) -> Self {
        SnapPointInput::Number(value)
    }
}

impl From<&str> for SnapPointInput {
    /// Numeric text becomes a number; anything else is kept as a length and
    /// judged at resolution time.
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.parse::<f32>() {
            Ok(n) if n.is_finite() => SnapPointInput::Number(n),
            _ => SnapPointInput::Length(trimmed.to_string()),
        }
    }
}

impl From<String> for SnapPointInput {
    fn from(value: String) -> Self {
        SnapPointInput::from(value.as_str())
    }
}

impl fmt::Display for SnapPointInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapPointInput::Number(n) => write!(f, "{}", n),
            SnapPointInput::Length(text) => f.write_str(text),
        }
    }
}

/// Error produced when a single snap-point declaration cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SnapPointParseError {
    /// The entry was blank.
    Empty,
    /// The entry carries a unit other than `px` or `rem`.
    UnsupportedUnit(String),
    /// The numeric part is missing or not finite.
    InvalidNumber(String),
}

impl fmt::Display for SnapPointParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapPointParseError::Empty => f.write_str("empty snap point"),
            SnapPointParseError::UnsupportedUnit(entry) => {
                write!(f, "unsupported snap point unit in {:?}", entry)
            }
            SnapPointParseError::InvalidNumber(entry) => {
                write!(f, "invalid snap point number in {:?}", entry)
            }
        }
    }
}

impl std::error::Error for SnapPointParseError {}

impl FromStr for SnapPointInput {
    type Err = SnapPointParseError;

    /// Parses one entry of a `snap-points` list. Plain numbers become
    /// [`SnapPointInput::Number`]; `px`/`rem` lengths are validated and kept
    /// as [`SnapPointInput::Length`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(SnapPointParseError::Empty);
        }
        if let Ok(n) = trimmed.parse::<f32>() {
            return if n.is_finite() {
                Ok(SnapPointInput::Number(n))
            } else {
                Err(SnapPointParseError::InvalidNumber(trimmed.to_string()))
            };
        }
        parse_length(trimmed)?;
        Ok(SnapPointInput::Length(trimmed.to_string()))
    }
}

enum Length {
    Px(Px),
    Rem(Rem),
}

fn parse_length(text: &str) -> Result<Length, SnapPointParseError> {
    let trimmed = text.trim();
    let (number, ctor): (&str, fn(f32) -> Length) = if let Some(n) = trimmed.strip_suffix("px")
    {
        (n, |value| Length::Px(Px(value)))
    } else if let Some(n) = trimmed.strip_suffix("rem") {
        (n, |value| Length::Rem(Rem(value)))
    } else {
        return Err(SnapPointParseError::UnsupportedUnit(trimmed.to_string()));
    };
    match number.trim().parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(ctor(value)),
        _ => Err(SnapPointParseError::InvalidNumber(trimmed.to_string())),
    }
}

/// A snap point converted to concrete pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedSnapPoint {
    /// Original declaration.
    pub value: SnapPointInput,
    /// Visible panel height at this snap point.
    pub height: f32,
    /// Translation from the fully expanded position: `panel_height - height`.
    pub offset: f32,
}

impl ResolvedSnapPoint {
    /// The implicit snap point used when nothing was declared: the whole
    /// panel visible.
    pub fn full_height(panel_height: f32) -> Self {
        Self {
            value: SnapPointInput::Number(1.0),
            height: panel_height,
            offset: 0.0,
        }
    }
}

/// Resolves declared snap points into a table sorted by decreasing height.
///
/// Returns an empty table when there is nothing to resolve or either height
/// is non-positive; callers fall back to a single full-height snap. Entries
/// that cannot be interpreted are dropped individually.
pub fn resolve_snap_points(
    inputs: &[SnapPointInput],
    panel_height: f32,
    viewport_height: f32,
    root_font_size: f32,
) -> SnapTable {
    // Written as negated comparisons so NaN heights also bail out.
    if inputs.is_empty() || !(panel_height > 0.0) || !(viewport_height > 0.0) {
        return SnapTable::new();
    }

    let root_font_size = if root_font_size > 0.0 {
        root_font_size
    } else {
        DEFAULT_ROOT_FONT_SIZE
    };
    let max_height = panel_height.min(viewport_height);

    let mut resolved: SnapTable = inputs
        .iter()
        .filter_map(|value| {
            let Some(height) = value.resolve_height(viewport_height, root_font_size) else {
                log::debug!("dropping unresolvable snap point {}", value);
                return None;
            };
            let clamped = height.clamp(0.0, max_height);
            Some(ResolvedSnapPoint {
                value: value.clone(),
                height: clamped,
                offset: (panel_height - clamped).max(0.0),
            })
        })
        .collect();

    resolved.sort_by(|a, b| b.height.total_cmp(&a.height));

    let mut deduped = SnapTable::new();
    for point in resolved {
        if deduped
            .iter()
            .any(|kept| (kept.height - point.height).abs() <= DEDUP_TOLERANCE)
        {
            continue;
        }
        deduped.push(point);
    }
    deduped
}

/// Index of the snap point whose offset is nearest to `offset`.
///
/// Ties go to the earliest entry in scan order.
pub fn find_closest_snap_point(offset: f32, points: &[ResolvedSnapPoint]) -> Option<usize> {
    let mut closest = None;
    let mut closest_distance = f32::INFINITY;
    for (index, point) in points.iter().enumerate() {
        let distance = (point.offset - offset).abs();
        if distance < closest_distance {
            closest_distance = distance;
            closest = Some(index);
        }
    }
    closest
}

/// Direction of a one-step snap transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapDirection {
    /// Towards smaller offsets (more of the panel visible).
    Expand,
    /// Towards larger offsets (less of the panel visible).
    Collapse,
}

/// Index of the snap point one step away from the entry nearest to
/// `current_offset`, clamped to the ends of the table.
pub fn find_adjacent_snap_point(
    current_offset: f32,
    direction: SnapDirection,
    points: &[ResolvedSnapPoint],
) -> Option<usize> {
    let mut order: SmallVec<[usize; 8]> = (0..points.len()).collect();
    order.sort_by(|&a, &b| points[a].offset.total_cmp(&points[b].offset));

    let mut current = 0;
    let mut min_distance = f32::INFINITY;
    for (position, &index) in order.iter().enumerate() {
        let distance = (points[index].offset - current_offset).abs();
        if distance < min_distance {
            min_distance = distance;
            current = position;
        }
    }

    let target = match direction {
        SnapDirection::Collapse => (current + 1).min(order.len().saturating_sub(1)),
        SnapDirection::Expand => current.saturating_sub(1),
    };
    order.get(target).copied()
}

#[cfg(test)]
#[path = "tests/snap_points_tests.rs"]
mod tests;
