// src/core/date.rs
//! `"D Mon YYYY"` → `"YYYY-MM-DD"`.
//!
//! Output is always fixed-width and zero-padded, so comparing two results as
//! strings gives chronological order. The sequencer relies on that.

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Month number (1-based) for an exact, case-sensitive abbreviation.
pub fn month_number(abbr: &str) -> Option<u32> {
    MONTHS.iter().position(|m| *m == abbr).map(|i| i as u32 + 1)
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Normalize a life-list date. `None` means unparseable; callers drop the row.
pub fn normalize_date(text: &str) -> Option<String> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    let [day, mon, year] = parts.as_slice() else {
        return None;
    };

    let month = month_number(mon)?;
    if !all_digits(day) || day.len() > 2 || !all_digits(year) || year.len() != 4 {
        return None;
    }

    // shape only: "31 Apr" passes through as 04-31
    Some(format!("{year}-{month:02}-{day:0>2}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_day_and_month() {
        assert_eq!(normalize_date("5 Jan 2024").as_deref(), Some("2024-01-05"));
        assert_eq!(normalize_date("15 Dec 2023").as_deref(), Some("2023-12-15"));
        assert_eq!(normalize_date("09 Sep 1999").as_deref(), Some("1999-09-09"));
    }

    #[test]
    fn tolerates_extra_whitespace() {
        assert_eq!(normalize_date("  2   Mar\t2024 ").as_deref(), Some("2024-03-02"));
    }

    #[test]
    fn wrong_token_count_fails() {
        assert_eq!(normalize_date("2024"), None);
        assert_eq!(normalize_date(""), None);
        assert_eq!(normalize_date("5 Jan"), None);
        assert_eq!(normalize_date("5 Jan 2024 10:00"), None);
    }

    #[test]
    fn unknown_month_fails() {
        assert_eq!(normalize_date("5 Foo 2024"), None);
        assert_eq!(normalize_date("5 jan 2024"), None);
        assert_eq!(normalize_date("5 January 2024"), None);
    }

    #[test]
    fn shape_checked_not_calendar() {
        assert_eq!(normalize_date("31 Apr 2024").as_deref(), Some("2024-04-31"));
        assert_eq!(normalize_date("29 Feb 2023").as_deref(), Some("2023-02-29"));
        assert_eq!(normalize_date("x Jan 2024"), None);
        assert_eq!(normalize_date("123 Jan 2024"), None);
        assert_eq!(normalize_date("5 Jan 24"), None);
        assert_eq!(normalize_date("5 Jan 20245"), None);
    }

    #[test]
    fn every_month_maps() {
        for (i, m) in MONTHS.iter().enumerate() {
            assert_eq!(month_number(m), Some(i as u32 + 1));
        }
    }
}
