/// Number formatting for the counter animation.
///
/// Float-to-decimal formatting through `format!` has hit wasm-facing panics in
/// some toolchain/browser combinations, so these helpers never format floats
/// directly. Finite values are scaled and rounded into an `i64`, then the
/// integer parts are formatted.

/// Fixed-point rendering with `decimals` fractional digits.
pub fn fmt_fixed(v: f64, decimals: usize) -> String {
    if !v.is_finite() {
        return non_finite(v);
    }

    // Clamp decimals to something reasonable to avoid huge powers.
    let decimals = decimals.min(9);
    let scale_i64 = 10_i64.checked_pow(decimals as u32).unwrap_or(1);
    let scaled = (v * scale_i64 as f64).round();
    if !scaled.is_finite() || scaled.abs() > (i64::MAX as f64) {
        return non_finite(if v.is_sign_negative() {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let scaled_i = scaled as i64;
    let abs_i = scaled_i.abs();
    let int_part = abs_i / scale_i64;
    let frac_part = abs_i % scale_i64;

    let mut out = String::new();
    if scaled_i < 0 {
        out.push('-');
    }
    out.push_str(&int_part.to_string());

    if decimals > 0 {
        out.push('.');
        let frac_str = frac_part.to_string();
        for _ in 0..decimals.saturating_sub(frac_str.len()) {
            out.push('0');
        }
        out.push_str(&frac_str);
    }
    out
}

/// Floors `v` and inserts `separator` between groups of three digits.
///
/// An empty separator yields the plain integer.
pub fn fmt_grouped(v: f64, separator: &str) -> String {
    if !v.is_finite() {
        return non_finite(v);
    }
    let floored = v.floor();
    if floored.abs() > (i64::MAX as f64) {
        return non_finite(if v.is_sign_negative() {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let n = floored as i64;
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len() + 1);
    if n < 0 {
        out.push('-');
    }
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

/// Floors `v` and prints it as a plain integer.
pub fn fmt_floor(v: f64) -> String {
    fmt_grouped(v, "")
}

fn non_finite(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_sign_positive() {
        "Inf".to_string()
    } else {
        "-Inf".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_pads_fraction() {
        assert_eq!(fmt_fixed(99.99, 2), "99.99");
        assert_eq!(fmt_fixed(0.5, 2), "0.50");
        assert_eq!(fmt_fixed(3.04, 2), "3.04");
        assert_eq!(fmt_fixed(-1.25, 1), "-1.3");
        assert_eq!(fmt_fixed(12.0, 0), "12");
    }

    #[test]
    fn grouped_inserts_separators() {
        assert_eq!(fmt_grouped(0.0, ","), "0");
        assert_eq!(fmt_grouped(999.9, ","), "999");
        assert_eq!(fmt_grouped(1000.0, ","), "1,000");
        assert_eq!(fmt_grouped(1234567.8, "."), "1.234.567");
        assert_eq!(fmt_grouped(-25000.0, " "), "-25 000");
        assert_eq!(fmt_grouped(150000.0, ""), "150000");
    }

    #[test]
    fn non_finite_values_are_labelled() {
        assert_eq!(fmt_fixed(f64::NAN, 2), "NaN");
        assert_eq!(fmt_grouped(f64::INFINITY, ","), "Inf");
        assert_eq!(fmt_floor(f64::NEG_INFINITY), "-Inf");
    }
}
