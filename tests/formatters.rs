#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use kaglo::libs::formatter::{format_date, format_due_date, format_tags, format_timestamp};

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        assert_eq!(format_date(date), "Jan 15, 2026");

        // Single digit day has no leading zero
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(format_date(date), "Mar 5, 2026");
    }

    #[test]
    fn test_format_due_date_absent() {
        assert_eq!(format_due_date(None), "");
    }

    #[test]
    fn test_format_timestamp() {
        let ts = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap().and_hms_opt(14, 30, 0).unwrap();
        assert_eq!(format_timestamp(Some(ts)), "Jan 15, 2026 14:30");
        assert_eq!(format_timestamp(None), "");
    }

    #[test]
    fn test_format_tags() {
        assert_eq!(format_tags(&[]), "");
        assert_eq!(format_tags(&["home".to_string(), "errands".to_string()]), "#home #errands");
    }
}
