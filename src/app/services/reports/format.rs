//! Number formatting for report cells

/// Format `value` with two decimals and comma thousands separators
///
/// `22374.15` becomes `22,374.15`; `-1234567.5` becomes `-1,234,567.50`.
pub fn format_thousands(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let digits = integer.len();
    let mut grouped = String::with_capacity(digits + digits / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}{}.{}", sign, grouped, fraction)
}
