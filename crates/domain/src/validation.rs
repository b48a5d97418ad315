//! Query window validation.
//!
//! Checks run in a fixed order and the first failure wins:
//! start parses, end parses, start is not before the series, end is not
//! after the series, end is not before start. Bounds are always those of the
//! whole series, so a window that falls into a gap passes here and fails
//! later as an empty range.

use crate::entities::Series;
use crate::error::TradeError;
use crate::time::parse_instant;
use crate::value_objects::Window;

/// Validates raw `start`/`end` text against the bounds of `series`.
///
/// # Errors
/// Returns the first failing [`TradeError`] check.
pub fn validate_window(
    series: &Series,
    start_text: &str,
    end_text: &str,
) -> Result<Window, TradeError> {
    let start = parse_instant(start_text).ok_or_else(|| TradeError::InvalidStart {
        input: start_text.to_string(),
    })?;
    let end = parse_instant(end_text).ok_or_else(|| TradeError::InvalidEnd {
        input: end_text.to_string(),
    })?;

    let first = series.first().timestamp;
    if start < first {
        return Err(TradeError::StartBeforeData { start, first });
    }

    let last = series.last().timestamp;
    if end > last {
        return Err(TradeError::EndAfterData { end, last });
    }

    if end < start {
        return Err(TradeError::EndBeforeStart { start, end });
    }

    Ok(Window::new(start, end))
}
