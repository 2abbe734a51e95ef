/// Display widths past this get re-rendered in exponential or
/// fixed-precision form.
const MAX_DISPLAY_CHARS: usize = 12;
const EXPONENTIAL_THRESHOLD: f64 = 999_999_999_999.0;
const TINY_THRESHOLD: f64 = 1e-6;
const SIGNIFICANT_DIGITS: i32 = 12;

/// Renders a value for the calculator display.
///
/// The shortest decimal rendering is used when it fits. Values too wide for
/// the display fall back to exponential notation (very large or very small
/// magnitudes) or to 12 significant digits.
pub fn format_value(value: f64) -> String {
    let rendered = value.to_string();
    if rendered.len() <= MAX_DISPLAY_CHARS {
        return rendered;
    }

    if value.abs() > EXPONENTIAL_THRESHOLD || (value.abs() < TINY_THRESHOLD && value != 0.0) {
        return format!("{value:.6e}");
    }

    to_significant_digits(value)
}

fn to_significant_digits(value: f64) -> String {
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (SIGNIFICANT_DIGITS - 1 - magnitude).max(0) as usize;
    let fixed = format!("{value:.decimals$}");
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}
