//! Presentation rules for a prediction: label tone and percentage text.
//!
//! The tone heuristic is a plain case-insensitive substring match against a
//! fixed keyword list. Keep the list exact; labels from every detector model
//! are matched against it.

#[cfg(test)]
#[path = "verdict_test.rs"]
mod verdict_test;

/// Label fragments that switch the headline to the warning treatment.
pub const CONCERNING_KEYWORDS: [&str; 5] = ["malignant", "tumor", "cancer", "abnormal", "stone"];

/// Delay before the confidence bar animates to its final width.
pub const CONFIDENCE_FILL_DELAY_MS: u64 = 100;

/// Color treatment for the top-line prediction label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PredictionTone {
    Warning,
    Neutral,
}

impl PredictionTone {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Warning => "prediction-result prediction-result--warning",
            Self::Neutral => "prediction-result prediction-result--neutral",
        }
    }
}

#[must_use]
pub fn tone_for_label(label: &str) -> PredictionTone {
    let lower = label.to_lowercase();
    if CONCERNING_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        PredictionTone::Warning
    } else {
        PredictionTone::Neutral
    }
}

/// `87.5` -> `"87.5%"`, `100.0` -> `"100%"`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value}%")
}

/// Fill-bar width, clamped so malformed confidences cannot overflow the track.
#[must_use]
pub fn bar_width(confidence: f64) -> String {
    let clamped = if confidence.is_finite() { confidence.clamp(0.0, 100.0) } else { 0.0 };
    format_percent(clamped)
}
