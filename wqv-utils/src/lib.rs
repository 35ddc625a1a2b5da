//! Shared utility functions for WQV crates.

/// Date utility functions
pub mod dates {
    use chrono::{Datelike, NaiveDate};

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
    }

    /// Format a NaiveDate as "YYYYMMDD" (compact format used in map filenames)
    pub fn format_compact(date: &NaiveDate) -> String {
        date.format("%Y%m%d").to_string()
    }

    /// Parse a date string in "YYYYMMDD" compact format
    pub fn parse_date_compact(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y%m%d")?)
    }

    /// Month key "YYYY_MM" used to prefix monthly map products.
    pub fn month_key(date: &NaiveDate) -> String {
        date.format("%Y_%m").to_string()
    }

    /// Calendar quarter of a date: months 1-3 -> 1, 4-6 -> 2, 7-9 -> 3, 10-12 -> 4.
    pub fn quarter_of(date: &NaiveDate) -> u32 {
        (date.month() - 1) / 3 + 1
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_quarter_of() {
            let cases = [
                (1, 1),
                (2, 1),
                (3, 1),
                (4, 2),
                (6, 2),
                (7, 3),
                (9, 3),
                (10, 4),
                (12, 4),
            ];
            for (month, quarter) in cases {
                let date = NaiveDate::from_ymd_opt(2021, month, 15).unwrap();
                assert_eq!(quarter_of(&date), quarter, "month {}", month);
            }
        }

        #[test]
        fn test_month_key() {
            let date = NaiveDate::from_ymd_opt(2020, 6, 15).unwrap();
            assert_eq!(month_key(&date), "2020_06");
        }

        #[test]
        fn test_format_compact() {
            let date = NaiveDate::from_ymd_opt(2020, 6, 5).unwrap();
            assert_eq!(format_compact(&date), "20200605");
            let parsed = parse_date_compact("20200605").unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2023-06-15");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }
    }
}
