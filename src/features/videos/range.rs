//! `Range` request header parsing for video streaming.
//!
//! Supports the single-range forms `bytes=start-end`, `bytes=start-` and
//! `bytes=-suffix`. Malformed headers fall back to a full-body response;
//! a syntactically valid range that starts past EOF is a 416.

use crate::core::error::{AppError, Result};

/// How to serve the body for a given `Range` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOutcome {
    /// Serve the whole file with a 200
    Full,
    /// Serve `start..=end` with a 206, both bounds inclusive
    Partial { start: u64, end: u64 },
}

/// Resolve a `Range` header value against a resource of `total` bytes
pub fn parse_range(header: &str, total: u64) -> Result<RangeOutcome> {
    let Some(spec) = header.strip_prefix("bytes=") else {
        return Ok(RangeOutcome::Full);
    };

    // Multi-range requests are served as a full response
    if spec.contains(',') {
        return Ok(RangeOutcome::Full);
    }

    let Some((start_str, end_str)) = spec.trim().split_once('-') else {
        return Ok(RangeOutcome::Full);
    };

    if total == 0 {
        return Err(AppError::RangeNotSatisfiable(total));
    }

    if start_str.is_empty() {
        // Suffix form: last N bytes
        let Ok(suffix) = end_str.parse::<u64>() else {
            return Ok(RangeOutcome::Full);
        };
        if suffix == 0 {
            return Err(AppError::RangeNotSatisfiable(total));
        }
        let start = total.saturating_sub(suffix);
        return Ok(RangeOutcome::Partial {
            start,
            end: total - 1,
        });
    }

    let Ok(start) = start_str.parse::<u64>() else {
        return Ok(RangeOutcome::Full);
    };
    if start >= total {
        return Err(AppError::RangeNotSatisfiable(total));
    }

    let end = if end_str.is_empty() {
        total - 1
    } else {
        let Ok(end) = end_str.parse::<u64>() else {
            return Ok(RangeOutcome::Full);
        };
        end.min(total - 1)
    };

    if end < start {
        return Err(AppError::RangeNotSatisfiable(total));
    }

    Ok(RangeOutcome::Partial { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_range() {
        assert_eq!(
            parse_range("bytes=0-99", 1000).unwrap(),
            RangeOutcome::Partial { start: 0, end: 99 }
        );
    }

    #[test]
    fn test_open_ended_range() {
        assert_eq!(
            parse_range("bytes=900-", 1000).unwrap(),
            RangeOutcome::Partial {
                start: 900,
                end: 999
            }
        );
    }

    #[test]
    fn test_suffix_range() {
        assert_eq!(
            parse_range("bytes=-100", 1000).unwrap(),
            RangeOutcome::Partial {
                start: 900,
                end: 999
            }
        );
    }

    #[test]
    fn test_end_is_clamped_to_eof() {
        assert_eq!(
            parse_range("bytes=500-9999", 1000).unwrap(),
            RangeOutcome::Partial {
                start: 500,
                end: 999
            }
        );
    }

    #[test]
    fn test_start_past_eof_is_unsatisfiable() {
        let err = parse_range("bytes=1000-", 1000).unwrap_err();
        assert!(matches!(err, AppError::RangeNotSatisfiable(1000)));
    }

    #[test]
    fn test_inverted_range_is_unsatisfiable() {
        let err = parse_range("bytes=500-100", 1000).unwrap_err();
        assert!(matches!(err, AppError::RangeNotSatisfiable(1000)));
    }

    #[test]
    fn test_malformed_header_falls_back_to_full() {
        assert_eq!(parse_range("bytes=abc", 1000).unwrap(), RangeOutcome::Full);
        assert_eq!(parse_range("items=0-99", 1000).unwrap(), RangeOutcome::Full);
        assert_eq!(
            parse_range("bytes=0-99,200-299", 1000).unwrap(),
            RangeOutcome::Full
        );
    }
}
