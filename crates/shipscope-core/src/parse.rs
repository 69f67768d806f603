//! Parsers for the textual fields of upstream vessel snapshots.
//!
//! Upstream feeds render coordinates with degree marks and hemisphere letters
//! (`"52.5200° N"`) and sizes as `"200 x 32 m"`, with `"---"` or `"0 m"`
//! standing in for unknown sizes. The `parse_*` functions return the failure;
//! the `*_or_default` wrappers implement the recovery policy ingestion relies
//! on: log a warning and substitute zero, never abort a whole snapshot over
//! one bad field.

use crate::error::{Result, ShipscopeError};
use tracing::warn;

/// Parse a textual coordinate into signed decimal degrees.
///
/// Degree marks and `N`/`E` markers are stripped; `S`/`W` negate the value.
/// Fails with [`ShipscopeError::MalformedCoordinate`] when the remaining text
/// is not numeric.
pub fn parse_coordinate(text: &str) -> Result<f64> {
    let mut southern_or_western = false;
    let mut cleaned = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '°' | 'N' | 'E' => {}
            'S' | 'W' => southern_or_western = true,
            c if c.is_whitespace() => {}
            c => cleaned.push(c),
        }
    }

    let value: f64 = cleaned
        .parse()
        .map_err(|_| ShipscopeError::MalformedCoordinate { text: text.to_string() })?;

    Ok(if southern_or_western { -value } else { value })
}

/// Parse a textual vessel size into `(length_m, width_m)`.
///
/// Accepts `"L x W m"`, a bare `"L m"` (width defaults to 0), and the
/// placeholder tokens `"---"` and `"0 m"` which map to a zero footprint.
/// Anything else fails with [`ShipscopeError::MalformedSize`].
pub fn parse_size(text: &str) -> Result<(f64, f64)> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "---" || trimmed == "0 m" {
        return Ok((0.0, 0.0));
    }

    let body = trimmed.strip_suffix(" m").unwrap_or(trimmed).trim();
    let malformed = || ShipscopeError::MalformedSize { text: text.to_string() };

    let parts: Vec<&str> = body.split(" x ").map(str::trim).collect();
    match parts.as_slice() {
        [length] => {
            let length: f64 = length.parse().map_err(|_| malformed())?;
            Ok((length, 0.0))
        }
        [length, width] => {
            let length: f64 = length.parse().map_err(|_| malformed())?;
            let width: f64 = width.parse().map_err(|_| malformed())?;
            Ok((length, width))
        }
        _ => Err(malformed()),
    }
}

/// Parse a textual speed (`"0.3 kn"`) into knots. Unparseable input yields 0.
pub fn parse_speed(text: &str) -> f64 {
    text.split_whitespace()
        .next()
        .and_then(|token| token.parse().ok())
        .unwrap_or(0.0)
}

/// [`parse_coordinate`] with the documented recovery: 0.0 on failure, logged.
pub fn coordinate_or_default(text: &str) -> f64 {
    match parse_coordinate(text) {
        Ok(value) => value,
        Err(_) => {
            warn!(text, "coordinate failed to parse, defaulting to 0.0");
            0.0
        }
    }
}

/// [`parse_size`] with the documented recovery: 0 × 0 on failure, logged.
pub fn size_or_default(text: &str) -> (f64, f64) {
    match parse_size(text) {
        Ok(size) => size,
        Err(_) => {
            warn!(text, "size failed to parse, defaulting to 0 x 0");
            (0.0, 0.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_northern_hemisphere() {
        assert_eq!(parse_coordinate("52.5200° N").unwrap(), 52.52);
    }

    #[test]
    fn test_coordinate_western_hemisphere() {
        assert_eq!(parse_coordinate("13.4050° W").unwrap(), -13.405);
    }

    #[test]
    fn test_coordinate_southern_hemisphere() {
        assert_eq!(parse_coordinate("8.5069° S").unwrap(), -8.5069);
    }

    #[test]
    fn test_coordinate_plain_decimal() {
        assert_eq!(parse_coordinate("4.9041").unwrap(), 4.9041);
        assert_eq!(parse_coordinate("-4.9041").unwrap(), -4.9041);
    }

    #[test]
    fn test_coordinate_malformed() {
        let err = parse_coordinate("Nicht verfügbar").unwrap_err();
        assert!(matches!(err, ShipscopeError::MalformedCoordinate { .. }));

        assert!(parse_coordinate("").is_err());
    }

    #[test]
    fn test_coordinate_or_default_recovers() {
        assert_eq!(coordinate_or_default("garbage"), 0.0);
        assert_eq!(coordinate_or_default("52.52° N"), 52.52);
    }

    #[test]
    fn test_size_length_and_width() {
        assert_eq!(parse_size("200 x 32 m").unwrap(), (200.0, 32.0));
    }

    #[test]
    fn test_size_length_only() {
        assert_eq!(parse_size("120 m").unwrap(), (120.0, 0.0));
    }

    #[test]
    fn test_size_placeholders() {
        assert_eq!(parse_size("---").unwrap(), (0.0, 0.0));
        assert_eq!(parse_size("0 m").unwrap(), (0.0, 0.0));
        assert_eq!(parse_size("").unwrap(), (0.0, 0.0));
    }

    #[test]
    fn test_size_malformed() {
        let err = parse_size("big x small m").unwrap_err();
        assert!(matches!(err, ShipscopeError::MalformedSize { .. }));

        assert!(parse_size("1 x 2 x 3 m").is_err());
    }

    #[test]
    fn test_size_or_default_recovers() {
        assert_eq!(size_or_default("unknown"), (0.0, 0.0));
        assert_eq!(size_or_default("300 x 50 m"), (300.0, 50.0));
    }

    #[test]
    fn test_speed_parsing() {
        assert_eq!(parse_speed("12.5 kn"), 12.5);
        assert_eq!(parse_speed("0 kn"), 0.0);
        assert_eq!(parse_speed("---"), 0.0);
        assert_eq!(parse_speed(""), 0.0);
    }
}
