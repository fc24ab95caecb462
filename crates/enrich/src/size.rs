use std::sync::OnceLock;

use regex::Regex;

// ── Compiled regex cache ─────────────────────────────────────────────────────

macro_rules! re {
    ($name:ident, $pat:expr) => {
        fn $name() -> &'static Regex {
            static R: OnceLock<Regex> = OnceLock::new();
            R.get_or_init(|| Regex::new($pat).expect("invalid regex"))
        }
    };
}

re!(re_paren_inches, r#"\((\d+(?:\.\d+)?)\s*"?\)"#);
re!(re_millimetres, r"(?i)(\d+(?:\.\d+)?)\s*mm");
re!(re_bare_inches, r#"(\d+(?:\.\d+)?)\s*""#);

const MM_PER_INCH: f64 = 25.4;

/// Inclusive diameter buckets in inches, checked in order. Anything above the
/// last upper bound falls into `>90"`.
const SIZE_RANGES: &[(f64, f64, &str)] = &[
    (2.5, 6.0, "2.5\"-6\""),
    (8.0, 12.0, "8\"-12\""),
    (14.0, 24.0, "14\"-24\""),
    (26.0, 40.0, "26\"-40\""),
    (42.0, 54.0, "42\"-54\""),
    (60.0, 72.0, "60\"-72\""),
    (74.0, 90.0, "74\"-90\""),
];
const OVERSIZE_RANGE: &str = ">90\"";

// ── Size text ────────────────────────────────────────────────────────────────

/// Parses a nominal size in inches: decimals ("2.5"), fractions ("3/4") and
/// mixed numbers ("2 1/2"). Inch quotes are ignored. Returns `None` for
/// anything else.
pub fn parse_size(value: &str) -> Option<f64> {
    let value = value.replace('"', "");
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if value.contains(' ') {
        let mut parts = value.split_whitespace();
        let whole = parts.next().and_then(|p| p.parse::<f64>().ok());
        let frac = parts.next().and_then(parse_fraction);
        if let (Some(whole), Some(frac)) = (whole, frac) {
            return Some(whole + frac);
        }
    }

    if value.contains('/') {
        if let Some(v) = parse_fraction(value) {
            return Some(v);
        }
    }

    value.parse::<f64>().ok()
}

/// "n/d" with integer terms, or a plain decimal.
fn parse_fraction(s: &str) -> Option<f64> {
    match s.split_once('/') {
        Some((n, d)) => {
            let n: i64 = n.trim().parse().ok()?;
            let d: i64 = d.trim().parse().ok()?;
            if d == 0 {
                return None;
            }
            Some(n as f64 / d as f64)
        }
        None => s.trim().parse().ok(),
    }
}

/// The diameter bucket for a large bore size, or `None` when the size falls
/// between buckets (for example 7") or below 2.5".
pub fn size_range(size: f64) -> Option<&'static str> {
    if let Some((_, _, label)) = SIZE_RANGES
        .iter()
        .find(|(lo, hi, _)| *lo <= size && size <= *hi)
    {
        return Some(label);
    }
    let (_, max, _) = SIZE_RANGES[SIZE_RANGES.len() - 1];
    (size > max).then_some(OVERSIZE_RANGE)
}

// ── Civil3D text ─────────────────────────────────────────────────────────────

/// Pulls a nominal size out of Civil3D description text.
///
/// In priority order: an inch value in parentheses (`(4")`), the first
/// millimetre value (`315mmØ`, `300 mm`) converted to inches and rounded to
/// the nearest half inch, then any bare inch value (`6"`). Returns an empty
/// string when none is present.
pub fn size_from_civil3d(info: Option<&str>) -> String {
    let Some(text) = info.map(str::trim).filter(|t| !t.is_empty()) else {
        return String::new();
    };

    if let Some(v) = first_number(re_paren_inches(), text) {
        return format!("{}\"", format_general(v));
    }

    let normalized = text.replace("mmØ", "mm").replace('Ø', "");
    if let Some(mm) = first_number(re_millimetres(), &normalized) {
        // Halves round to even, so 2.25" becomes 2" and 2.75" becomes 3".
        let rounded = (mm / MM_PER_INCH * 2.0).round_ties_even() / 2.0;
        if (rounded - rounded.round()).abs() < 1e-9 {
            return format!("{}\"", rounded.round() as i64);
        }
        return format!("{rounded:.1}\"");
    }

    if let Some(v) = first_number(re_bare_inches(), text) {
        return format!("{}\"", format_general(v));
    }

    String::new()
}

fn first_number(re: &Regex, text: &str) -> Option<f64> {
    re.captures(text)?.get(1)?.as_str().parse().ok()
}

/// Shortest form with up to six significant digits: 4.0 -> "4", 2.50 -> "2.5".
fn format_general(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        return format!("{}", v as i64);
    }
    let decimals = (5 - v.abs().log10().floor() as i32).max(0) as usize;
    let s = format!("{v:.decimals$}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── parse_size ────────────────────────────────────────────────────────────

    #[test]
    fn parse_size_decimal() {
        assert_eq!(parse_size("2.5"), Some(2.5));
        assert_eq!(parse_size("4\""), Some(4.0));
    }

    #[test]
    fn parse_size_fraction() {
        assert_eq!(parse_size("3/4"), Some(0.75));
        assert_eq!(parse_size("1/2\""), Some(0.5));
    }

    #[test]
    fn parse_size_mixed_number() {
        assert_eq!(parse_size("2 1/2"), Some(2.5));
        assert_eq!(parse_size("1 1/2\""), Some(1.5));
    }

    #[test]
    fn parse_size_rejects_garbage() {
        assert_eq!(parse_size("garbage"), None);
        assert_eq!(parse_size(""), None);
        assert_eq!(parse_size("\""), None);
        assert_eq!(parse_size("1/0"), None);
        assert_eq!(parse_size("2 x/4"), None);
    }

    // ── size_range ────────────────────────────────────────────────────────────

    #[test]
    fn size_range_bounds_are_inclusive() {
        assert_eq!(size_range(2.5), Some("2.5\"-6\""));
        assert_eq!(size_range(6.0), Some("2.5\"-6\""));
        assert_eq!(size_range(8.0), Some("8\"-12\""));
        assert_eq!(size_range(24.0), Some("14\"-24\""));
        assert_eq!(size_range(90.0), Some("74\"-90\""));
    }

    #[test]
    fn size_range_gaps_have_no_bucket() {
        assert_eq!(size_range(7.0), None);
        assert_eq!(size_range(13.0), None);
        assert_eq!(size_range(56.0), None);
        assert_eq!(size_range(2.4), None);
    }

    #[test]
    fn size_range_oversize() {
        assert_eq!(size_range(90.01), Some(">90\""));
        assert_eq!(size_range(120.0), Some(">90\""));
    }

    // ── size_from_civil3d ─────────────────────────────────────────────────────

    #[test]
    fn civil3d_parenthesised_inches_win() {
        assert_eq!(size_from_civil3d(Some("100mm Ductile Iron (4\")")), "4\"");
        assert_eq!(size_from_civil3d(Some("Pipe (2.5)")), "2.5\"");
    }

    #[test]
    fn civil3d_millimetres_round_to_half_inch() {
        assert_eq!(size_from_civil3d(Some("315mmØ PVC")), "12.5\"");
        assert_eq!(size_from_civil3d(Some("HDPE 110 mm DR11")), "4.5\"");
        assert_eq!(size_from_civil3d(Some("50.8MM")), "2\"");
        assert_eq!(size_from_civil3d(Some("Ø150mm")), "6\"");
    }

    #[test]
    fn civil3d_quarter_inch_ties_round_to_even() {
        // 57.15mm is exactly 2.25", 69.85mm exactly 2.75".
        assert_eq!(size_from_civil3d(Some("57.15mm")), "2\"");
        assert_eq!(size_from_civil3d(Some("69.85mm")), "3\"");
        // 82.55mm is exactly 3.25": the tie goes to 3", not 3.5".
        assert_eq!(size_from_civil3d(Some("82.55mm")), "3\"");
    }

    #[test]
    fn civil3d_bare_inches_fallback() {
        assert_eq!(size_from_civil3d(Some("Water line 6\" C900")), "6\"");
    }

    #[test]
    fn civil3d_nothing_found_is_empty() {
        assert_eq!(size_from_civil3d(Some("Pressure pipe")), "");
        assert_eq!(size_from_civil3d(Some("  ")), "");
        assert_eq!(size_from_civil3d(None), "");
    }

    #[test]
    fn format_general_drops_trailing_zeros() {
        assert_eq!(format_general(4.0), "4");
        assert_eq!(format_general(2.5), "2.5");
        assert_eq!(format_general(12.75), "12.75");
    }
}
