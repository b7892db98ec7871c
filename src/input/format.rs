/// Renders `value` with `precision` significant digits in general format:
/// fixed notation for decimal exponents in `-4..precision - 1`, scientific
/// otherwise. Matches the number rendering of the enrichment script's
/// host tooling so report values read identically.
pub fn format_general(value: f64, precision: usize) -> String {
    let precision = precision.max(1);
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    // Exponent after rounding to `precision` digits decides the notation.
    let sci = format!("{:.*e}", precision - 1, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= precision as i32 - 1 {
        let mantissa = trim_fraction(mantissa, false);
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exp.unsigned_abs())
    } else {
        let decimals = (precision as i32 - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value), true)
    }
}

/// Formats a raw table cell; non-numeric cells such as `NA` pass through.
pub fn format_cell(raw: &str, precision: usize) -> String {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(v) => format_general(v, precision),
        Err(_) => trimmed.to_string(),
    }
}

fn trim_fraction(s: &str, keep_one_digit: bool) -> String {
    let mut out = s.to_string();
    if out.contains('.') {
        while out.ends_with('0') {
            out.pop();
        }
        if out.ends_with('.') {
            if keep_one_digit {
                out.push('0');
            } else {
                out.pop();
            }
        }
    } else if keep_one_digit {
        out.push_str(".0");
    }
    out
}

pub const P_VALUE_DIGITS: usize = 3;
pub const FOLD_CHANGE_DIGITS: usize = 4;
pub const SCORE_DIGITS: usize = 6;

#[cfg(test)]
#[path = "../../tests/src_inline/input/format.rs"]
mod tests;
