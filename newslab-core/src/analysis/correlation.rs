//! Pearson correlation between daily returns and aggregated sentiment.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::stats::two_sided_p;
use crate::domain::TimeSeries;

/// Correlation preconditions violated; no partial result is returned.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("insufficient data: {rows} joined rows (need at least 2)")]
    InsufficientData { rows: usize },

    #[error("degenerate input: {series} series has zero variance")]
    DegenerateInput { series: &'static str },
}

/// Result of the Pearson correlation test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationTest {
    /// Pearson product-moment coefficient in [-1, 1].
    pub coefficient: f64,
    /// Two-sided p-value under H0: no linear association, t-test with
    /// n - 2 degrees of freedom.
    pub p_value: f64,
    /// Number of joined rows that entered the test.
    pub n: usize,
}

/// Pearson correlation with significance test over two paired slices.
///
/// Fails with `InsufficientData` when fewer than 2 pairs remain and with
/// `DegenerateInput` when either side has zero variance (the coefficient
/// would be 0/0; never reported as a silent NaN).
pub fn pearson_test(x: &[f64], y: &[f64]) -> Result<CorrelationTest, AnalysisError> {
    debug_assert_eq!(x.len(), y.len());
    let n = x.len();
    if n < 2 {
        return Err(AnalysisError::InsufficientData { rows: n });
    }

    let n_f = n as f64;
    let mean_x = x.iter().sum::<f64>() / n_f;
    let mean_y = y.iter().sum::<f64>() / n_f;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 {
        return Err(AnalysisError::DegenerateInput { series: "first" });
    }
    if var_y == 0.0 {
        return Err(AnalysisError::DegenerateInput { series: "second" });
    }

    let r = (cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0);

    let df = n_f - 2.0;
    let denom = 1.0 - r * r;
    let p_value = if df <= 0.0 {
        // n == 2: the line through two points fits exactly, no test possible
        1.0
    } else if denom <= f64::EPSILON {
        0.0
    } else {
        two_sided_p(r * (df / denom).sqrt(), df)
    };

    Ok(CorrelationTest {
        coefficient: r,
        p_value,
        n,
    })
}

/// Inner-join two series on date, drop rows undefined on either side, and
/// run the Pearson test on what remains.
pub fn correlate(
    returns: &TimeSeries,
    sentiment: &TimeSeries,
) -> Result<CorrelationTest, AnalysisError> {
    let joined = returns.inner_join(sentiment);

    let mut x = Vec::with_capacity(joined.len());
    let mut y = Vec::with_capacity(joined.len());
    for (_, ret, sent) in joined {
        if ret.is_finite() && sent.is_finite() {
            x.push(ret);
            y.push(sent);
        }
    }

    pearson_test(&x, &y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn series(values: &[f64]) -> TimeSeries {
        TimeSeries::new(
            values
                .iter()
                .enumerate()
                .map(|(i, &v)| (day(i as u32 + 1), v))
                .collect(),
        )
    }

    #[test]
    fn perfect_positive_correlation() {
        let result = pearson_test(&[1.0, 2.0, 3.0, 4.0], &[2.0, 4.0, 6.0, 8.0]).unwrap();
        assert!((result.coefficient - 1.0).abs() < 1e-12);
        assert!(result.p_value < 1e-9);
    }

    #[test]
    fn perfect_negative_correlation() {
        let result = pearson_test(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]).unwrap();
        assert!((result.coefficient + 1.0).abs() < 1e-12);
    }

    #[test]
    fn coefficient_is_symmetric() {
        let x = [0.01, -0.02, 0.005, 0.03, -0.01];
        let y = [0.2, -0.1, 0.0, 0.4, -0.3];
        let ab = pearson_test(&x, &y).unwrap();
        let ba = pearson_test(&y, &x).unwrap();
        assert!((ab.coefficient - ba.coefficient).abs() < 1e-12);
        assert!((ab.p_value - ba.p_value).abs() < 1e-12);
    }

    #[test]
    fn coefficient_is_bounded() {
        let x = [0.5, 1.5, -0.5, 2.0, 0.0];
        let y = [10.0, 3.0, 7.0, -2.0, 5.0];
        let result = pearson_test(&x, &y).unwrap();
        assert!((-1.0..=1.0).contains(&result.coefficient));
        assert!((0.0..=1.0).contains(&result.p_value));
    }

    #[test]
    fn known_p_value_magnitude() {
        // Weakly correlated noise should not be significant
        let x = [0.1, -0.2, 0.15, 0.05, -0.1, 0.2, -0.05, 0.0];
        let y = [0.3, 0.1, -0.2, 0.4, 0.0, -0.1, 0.2, 0.1];
        let result = pearson_test(&x, &y).unwrap();
        assert!(result.p_value > 0.05);
    }

    #[test]
    fn fewer_than_two_rows_fails() {
        let err = pearson_test(&[1.0], &[2.0]).unwrap_err();
        assert!(matches!(err, AnalysisError::InsufficientData { rows: 1 }));
    }

    #[test]
    fn zero_variance_fails() {
        let err = pearson_test(&[1.0, 1.0, 1.0], &[2.0, 3.0, 4.0]).unwrap_err();
        assert!(matches!(err, AnalysisError::DegenerateInput { series: "first" }));

        let err = pearson_test(&[2.0, 3.0, 4.0], &[1.0, 1.0, 1.0]).unwrap_err();
        assert!(matches!(err, AnalysisError::DegenerateInput { series: "second" }));
    }

    #[test]
    fn correlate_joins_on_date_and_drops_nan() {
        let returns = TimeSeries::new(vec![
            (day(1), f64::NAN),
            (day(2), 0.10),
            (day(3), -0.05),
            (day(4), 0.02),
            (day(5), 0.07),
        ]);
        let sentiment = TimeSeries::new(vec![
            (day(2), 0.4),
            (day(3), -0.2),
            (day(4), 0.1),
            (day(5), 0.3),
            (day(6), 0.9),
        ]);
        let result = correlate(&returns, &sentiment).unwrap();
        // day(1) has NaN return, day(6) is unmatched: 4 rows remain
        assert_eq!(result.n, 4);
        assert!(result.coefficient > 0.9);
    }

    #[test]
    fn correlate_disjoint_dates_is_insufficient() {
        let a = series(&[0.1, 0.2]);
        let b = TimeSeries::new(vec![(day(20), 0.5), (day(21), 0.6)]);
        let err = correlate(&a, &b).unwrap_err();
        assert!(matches!(err, AnalysisError::InsufficientData { rows: 0 }));
    }
}
