//! Simple Moving Average (SMA).
//!
//! Rolling mean over a trailing window. First valid value at index
//! window - 1.

/// Compute the simple moving average of `values` over `window`.
///
/// `out[i]` is the mean of `values[i-window+1 ..= i]`; NaN for
/// `i < window - 1` and for any window containing a NaN.
pub fn sma(values: &[f64], window: usize) -> Vec<f64> {
    assert!(window >= 1, "SMA window must be >= 1");
    let n = values.len();
    let mut result = vec![f64::NAN; n];

    if n < window {
        return result;
    }

    // Initial window sum
    let mut sum = 0.0;
    let mut nan_in_window = false;
    for &v in values.iter().take(window) {
        if v.is_nan() {
            nan_in_window = true;
        }
        sum += v;
    }

    if !nan_in_window {
        result[window - 1] = sum / window as f64;
    }

    // Roll the window forward
    for i in window..n {
        let leaving = values[i - window];
        let entering = values[i];
        sum = sum - leaving + entering;

        if entering.is_nan() || leaving.is_nan() || nan_in_window {
            // Rescan the window: the running sum is tainted once a NaN
            // enters or leaves it.
            nan_in_window = false;
            sum = 0.0;
            for &v in &values[(i + 1 - window)..=i] {
                if v.is_nan() {
                    nan_in_window = true;
                }
                sum += v;
            }
            if nan_in_window {
                result[i] = f64::NAN;
                continue;
            }
        }

        result[i] = sum / window as f64;
    }

    result
}
