//! Formatting helpers for presenting report values.

use time::{macros::format_description, OffsetDateTime};

/// One decimal place, dropped when the rounded value is integral.
fn one_decimal(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let rounded = (value * 10.0).round() / 10.0;
    Some(if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    })
}

/// Scores are shown without a trailing `.0` when integral.
pub fn format_score(value: f64) -> String {
    one_decimal(value).unwrap_or_else(|| "—".to_string())
}

pub fn format_share(value: f64) -> String {
    one_decimal(value)
        .map(|v| format!("{v}%"))
        .unwrap_or_else(|| "—".to_string())
}

pub fn format_issued_at(ts: OffsetDateTime) -> String {
    ts.format(&format_description!(
        "[year]-[month]-[day] [hour]:[minute] UTC"
    ))
    .unwrap_or_else(|_| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn integral_score_has_no_decimals() {
        assert_eq!(format_score(82.0), "82");
        assert_eq!(format_score(82.26), "82.3");
        assert_eq!(format_score(f64::NAN), "—");
    }

    #[test]
    fn shares_carry_percent_sign() {
        assert_eq!(format_share(33.0), "33%");
        assert_eq!(format_share(33.36), "33.4%");
        assert_eq!(format_share(f64::INFINITY), "—");
    }

    #[test]
    fn values_rounding_to_integers_drop_the_decimal() {
        assert_eq!(format_score(82.96), "83");
        assert_eq!(format_score(99.99), "100");
        assert_eq!(format_share(33.97), "34%");
        assert_eq!(format_share(19.04), "19%");
    }

    #[test]
    fn issued_at_is_compact_utc() {
        let ts = datetime!(2026-03-04 9:05 UTC);
        assert_eq!(format_issued_at(ts), "2026-03-04 09:05 UTC");
    }
}
