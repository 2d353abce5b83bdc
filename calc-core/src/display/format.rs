//! Number formatting in the style of C's `%.15g`.

/// Significant digits kept when a result is written to the display.
pub const SIGNIFICANT_DIGITS: usize = 15;

/// Format a result for the display.
///
/// Rules follow `%.15g`:
/// - Round to 15 significant digits
/// - Fixed notation when the decimal exponent is in `-4..15`, scientific otherwise
/// - Trailing zeros and a dangling decimal point are removed
/// - Exponents carry a sign and at least two digits (`1e+20`, `1.5e-07`)
///
/// Non-finite values render as `inf`, `-inf` and `nan`. Negative zero renders
/// as `0`.
///
/// # Examples
/// ```
/// use calc_core::format_number;
/// assert_eq!(format_number(12.0), "12");
/// assert_eq!(format_number(0.1 + 0.2), "0.3");
/// assert_eq!(format_number(1e20), "1e+20");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "inf" } else { "-inf" });
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // The exponent after rounding decides the notation, so round first.
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_fraction_zeros(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
        strip_fraction_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Parse display text as a number. Anything unparsable reads as zero.
pub fn parse_number(text: &str) -> f64 {
    text.trim().parse().unwrap_or(0.0)
}

fn strip_fraction_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
