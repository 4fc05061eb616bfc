//! SPICE-style numeric values with SI suffixes.

use crate::error::{Error, Result};

/// Parse a value such as `1000`, `1k`, `4.7MEG` or `1e-12`.
///
/// Suffixes are case-insensitive: T, G, MEG, K, M (milli), MIL, U, N, P, F.
/// Trailing unit letters after a suffix are not accepted.
pub fn parse_value(s: &str) -> Result<f64> {
    let upper = s.trim().to_uppercase();

    if let Ok(v) = upper.parse::<f64>() {
        return finite(v, s);
    }

    let num_end = upper
        .find(|c: char| !c.is_ascii_digit() && c != '.' && c != '-' && c != '+' && c != 'E')
        .unwrap_or(upper.len());

    if num_end == 0 {
        return Err(Error::InvalidValue(s.to_string()));
    }

    let (num_str, suffix) = upper.split_at(num_end);
    let value: f64 = num_str
        .parse()
        .map_err(|_| Error::InvalidValue(s.to_string()))?;

    let multiplier = match suffix {
        "T" => 1e12,
        "G" => 1e9,
        "MEG" => 1e6,
        "K" => 1e3,
        "M" => 1e-3,
        "MIL" => 25.4e-6,
        "U" => 1e-6,
        "N" => 1e-9,
        "P" => 1e-12,
        "F" => 1e-15,
        _ => return Err(Error::InvalidValue(s.to_string())),
    };

    finite(value * multiplier, s)
}

fn finite(v: f64, input: &str) -> Result<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(Error::InvalidValue(input.to_string()))
    }
}

/// Format a value with an engineering SI prefix, e.g. `38.6817p`.
pub fn format_value(value: f64) -> String {
    const PREFIXES: [(f64, &str); 10] = [
        (1e12, "T"),
        (1e9, "G"),
        (1e6, "M"),
        (1e3, "k"),
        (1.0, ""),
        (1e-3, "m"),
        (1e-6, "u"),
        (1e-9, "n"),
        (1e-12, "p"),
        (1e-15, "f"),
    ];

    if value == 0.0 || !value.is_finite() {
        return format!("{:.4}", value);
    }

    let abs_value = value.abs();
    match PREFIXES.iter().find(|(scale, _)| abs_value >= *scale) {
        Some((scale, suffix)) => format!("{:.4}{}", value / scale, suffix),
        None => format!("{:.4e}", value),
    }
}
