// Cell-level helpers shared across the engine and any front-end.
//
// Statement exports format money as "$1,234.56"; the numeric value is recovered
// by dropping everything that is not a digit, '.' or '-'.

pub mod currency_format {
    /// Parses a currency-formatted cell into a number.
    ///
    /// All characters except ASCII digits, `.` and `-` are removed, then the
    /// longest leading `-?digits[.digits]` prefix is parsed. A cell with no
    /// usable prefix yields `NaN`, which callers let flow into their arithmetic.
    /// Parentheses are not read as a negative sign.
    pub fn parse_cell(s: &str) -> f64 {
        let stripped: String = s
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
            .collect();
        leading_decimal(&stripped)
            .and_then(|prefix| prefix.parse::<f64>().ok())
            .unwrap_or(f64::NAN)
    }

    /// Parses every cell of a row, keeping the row's length.
    pub fn parse_cells<S: AsRef<str>>(cells: &[S]) -> Vec<f64> {
        cells.iter().map(|c| parse_cell(c.as_ref())).collect()
    }

    fn leading_decimal(s: &str) -> Option<&str> {
        let bytes = s.as_bytes();
        let mut end = 0;
        if bytes.first() == Some(&b'-') {
            end = 1;
        }
        let int_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        let mut digits = end - int_start;
        if end < bytes.len() && bytes[end] == b'.' {
            let frac_start = end + 1;
            let mut frac_end = frac_start;
            while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
                frac_end += 1;
            }
            if frac_end > frac_start {
                digits += frac_end - frac_start;
                end = frac_end;
            }
        }
        if digits == 0 {
            None
        } else {
            Some(&s[..end])
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_cell_plain() {
            assert_eq!(parse_cell("123.45"), 123.45);
        }

        #[test]
        fn test_parse_cell_currency() {
            assert_eq!(parse_cell("$1,234.50"), 1234.5);
            assert_eq!(parse_cell(" $12.00 "), 12.0);
        }

        #[test]
        fn test_parse_cell_negative() {
            assert_eq!(parse_cell("-$3,000"), -3000.0);
        }

        #[test]
        fn test_parse_cell_parentheses_are_not_negative() {
            assert_eq!(parse_cell("(12)"), 12.0);
        }

        #[test]
        fn test_parse_cell_unparseable_is_nan() {
            assert!(parse_cell("n/a").is_nan());
            assert!(parse_cell("").is_nan());
            assert!(parse_cell("-").is_nan());
            assert!(parse_cell("--").is_nan());
        }

        #[test]
        fn test_parse_cell_takes_leading_number() {
            assert_eq!(parse_cell("1.2.3"), 1.2);
            assert_eq!(parse_cell("5-3"), 5.0);
            assert_eq!(parse_cell(".5"), 0.5);
            assert_eq!(parse_cell("7."), 7.0);
        }

        #[test]
        fn test_parse_cells_keeps_length() {
            let parsed = parse_cells(&["$1.00", "bad", "3"]);
            assert_eq!(parsed.len(), 3);
            assert_eq!(parsed[0], 1.0);
            assert!(parsed[1].is_nan());
            assert_eq!(parsed[2], 3.0);
        }
    }
}

pub mod period_format {
    use chrono::NaiveDate;

    const DATE_FORMATS: [&str; 3] = ["%m/%d/%Y", "%Y-%m-%d", "%d-%b-%Y"];

    /// Resolves a period header such as "12/31/2023" or "2023" to a date.
    ///
    /// A bare year maps to December 31st of that year. Labels like "TTM"
    /// resolve to `None`.
    pub fn parse_period_label(label: &str) -> Option<NaiveDate> {
        let label = label.trim();
        for fmt in DATE_FORMATS {
            if let Ok(d) = NaiveDate::parse_from_str(label, fmt) {
                return Some(d);
            }
        }
        if label.len() == 4 && label.chars().all(|c| c.is_ascii_digit()) {
            let year: i32 = label.parse().ok()?;
            return NaiveDate::from_ymd_opt(year, 12, 31);
        }
        None
    }

}
