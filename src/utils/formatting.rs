//! Formatting utilities used for CLI output.

use crate::core::calculator::weighted::Estimate;

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// `12.40 min (± 3.10)`, or `no estimate` when there was no history.
pub fn describe_estimate(est: &Estimate) -> String {
    if est.is_available() {
        format!("{:.2} min (± {:.2})", est.mean, est.variance)
    } else {
        "no estimate".to_string()
    }
}
