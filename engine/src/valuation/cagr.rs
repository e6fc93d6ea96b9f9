// Compound annual growth rate over a trailing window
use super::SeriesIndicator;
use serde_json::Value;
use shared::utils::currency_format;

/// CAGR in percent over the trailing `periods` elements of `series`.
///
/// `series` must be oldest-first. When fewer than `periods` elements exist the
/// window holds all of them, but the exponent still uses `periods`.
/// Returns `None` when the window has fewer than two elements or either end
/// parses to NaN or a non-positive number.
pub fn cagr<S: AsRef<str>>(series: &[S], periods: usize) -> Option<f64> {
    if periods == 0 {
        return None;
    }
    let window = &series[series.len().saturating_sub(periods)..];
    if window.len() < 2 {
        return None;
    }

    let start = currency_format::parse_cell(window[0].as_ref());
    let end = currency_format::parse_cell(window[window.len() - 1].as_ref());

    // NaN fails both comparisons.
    if !(start > 0.0 && end > 0.0) {
        return None;
    }

    Some(((end / start).powf(1.0 / periods as f64) - 1.0) * 100.0)
}

pub struct Cagr {
    name: String,
    periods: usize,
}

impl Cagr {
    pub fn new(periods: usize) -> Self {
        Self {
            name: format!("CAGR({})", periods),
            periods,
        }
    }

    pub fn periods(&self) -> usize {
        self.periods
    }
}

impl SeriesIndicator for Cagr {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "periods": self.periods })
    }

    fn calculate(&self, series: &[String]) -> Option<f64> {
        cagr(series, self.periods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-4, "{} != {}", actual, expected);
    }

    #[test]
    fn test_cagr_trailing_window() {
        let series = ["$10.00", "$12.00", "$14.40"];
        // window = [12, 14.4], ((14.4/12)^(1/2) - 1) * 100
        assert_close(cagr(&series, 2).unwrap(), 9.5445);
    }

    #[test]
    fn test_cagr_full_window() {
        let series = ["100", "110", "121"];
        // exponent uses requested periods (3), not elapsed periods (2)
        let expected = ((121.0f64 / 100.0).powf(1.0 / 3.0) - 1.0) * 100.0;
        assert_close(cagr(&series, 3).unwrap(), expected);
    }

    #[test]
    fn test_cagr_window_clamped_but_exponent_kept() {
        let series = ["100", "121"];
        let expected = ((121.0f64 / 100.0).powf(1.0 / 5.0) - 1.0) * 100.0;
        assert_close(cagr(&series, 5).unwrap(), expected);
    }

    #[test]
    fn test_cagr_single_element_undefined() {
        assert_eq!(cagr(&["$5.00"], 1), None);
        assert_eq!(cagr(&["$5.00"], 5), None);
    }

    #[test]
    fn test_cagr_period_one_window_has_one_element() {
        assert_eq!(cagr(&["1.00", "2.00"], 1), None);
    }

    #[test]
    fn test_cagr_non_positive_start_undefined() {
        assert_eq!(cagr(&["-1.00", "2.00"], 2), None);
        assert_eq!(cagr(&["0", "2.00"], 2), None);
    }

    #[test]
    fn test_cagr_negative_start_single_period() {
        assert_eq!(cagr(&["-1.00", "2.00"], 1), None);
    }

    #[test]
    fn test_cagr_non_positive_end_undefined() {
        assert_eq!(cagr(&["1.00", "-2.00"], 2), None);
    }

    #[test]
    fn test_cagr_unparseable_boundary_undefined() {
        assert_eq!(cagr(&["n/a", "2.00"], 2), None);
        assert_eq!(cagr(&["1.00", "--"], 2), None);
    }

    #[test]
    fn test_cagr_interior_nan_ignored() {
        let series = ["100", "junk", "121"];
        assert!(cagr(&series, 3).is_some());
    }

    #[test]
    fn test_cagr_zero_periods_undefined() {
        assert_eq!(cagr(&["1", "2", "3"], 0), None);
    }

    #[test]
    fn test_cagr_empty_series() {
        let series: [&str; 0] = [];
        assert_eq!(cagr(&series, 5), None);
    }

    #[test]
    fn test_cagr_indicator() {
        let indicator = Cagr::new(5);
        assert_eq!(indicator.name(), "CAGR(5)");
        assert_eq!(indicator.parameters(), serde_json::json!({ "periods": 5 }));
        let series: Vec<String> = vec!["100".into(), "200".into()];
        let expected = (2.0f64.powf(0.2) - 1.0) * 100.0;
        assert_close(indicator.calculate(&series).unwrap(), expected);
    }
}
