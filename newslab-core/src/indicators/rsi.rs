//! Relative Strength Index (RSI), rolling-mean variant.
//!
//! Gains and losses are simple rolling means of the close-to-close deltas
//! over the trailing window (Cutler's RSI, not Wilder smoothing).
//! RSI = 100 - 100 / (1 + avg_gain / avg_loss).
//! First valid value at index `window` (one delta is consumed).
//! Edge cases: avg_loss == 0 and avg_gain > 0 → 100; avg_gain == 0 and
//! avg_loss > 0 → 0; both zero (flat window) → neutral 50.

/// Compute the RSI of `values` over the given delta window.
pub fn rsi(values: &[f64], window: usize) -> Vec<f64> {
    assert!(window >= 1, "RSI window must be >= 1");
    let n = values.len();
    let mut result = vec![f64::NAN; n];

    if n < window + 1 {
        return result;
    }

    // Close-to-close deltas, split into gain/loss magnitudes.
    // gains[0]/losses[0] stay NaN: there is no delta for the first row.
    let mut gains = vec![f64::NAN; n];
    let mut losses = vec![f64::NAN; n];
    for i in 1..n {
        let delta = values[i] - values[i - 1];
        if delta.is_nan() {
            continue;
        }
        gains[i] = if delta > 0.0 { delta } else { 0.0 };
        losses[i] = if delta < 0.0 { -delta } else { 0.0 };
    }

    for i in window..n {
        let lo = i + 1 - window;
        let mut gain_sum = 0.0;
        let mut loss_sum = 0.0;
        let mut tainted = false;
        for j in lo..=i {
            if gains[j].is_nan() {
                tainted = true;
                break;
            }
            gain_sum += gains[j];
            loss_sum += losses[j];
        }
        if tainted {
            continue;
        }
        result[i] = rsi_value(gain_sum / window as f64, loss_sum / window as f64);
    }

    result
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 && avg_gain == 0.0 {
        50.0 // flat window, no movement
    } else if avg_loss == 0.0 {
        100.0
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}
