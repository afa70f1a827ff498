//! Host element attributes.

use prismatia_ui_layout::{SnapPointInput, SnapPointParseError};

/// Boolean attribute mirroring the open state.
pub const OPEN_ATTRIBUTE: &str = "open";

/// Comma-separated snap point declarations, e.g. `"1, 0.5, 20rem"`.
pub const SNAP_POINTS_ATTRIBUTE: &str = "snap-points";

pub const OBSERVED_ATTRIBUTES: [&str; 2] = [OPEN_ATTRIBUTE, SNAP_POINTS_ATTRIBUTE];

/// Parses every entry of a `snap-points` value, reporting each failure.
pub fn try_parse_snap_points(
    value: &str,
) -> impl Iterator<Item = Result<SnapPointInput, SnapPointParseError>> + '_ {
    value.split(',').map(str::parse::<SnapPointInput>)
}

/// Parses a `snap-points` value, dropping malformed entries.
pub fn parse_snap_points_attribute(value: &str) -> Vec<SnapPointInput> {
    try_parse_snap_points(value)
        .filter_map(|entry| match entry {
            Ok(point) => Some(point),
            Err(err) => {
                log::warn!("ignoring snap point in {:?}: {}", value, err);
                None
            }
        })
        .collect()
}
