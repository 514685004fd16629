//! Sentiment banding for presentation layers.
//!
//! A pure mapping from the [0, 1] score domain to descriptive text; the
//! reporting frontend consumes these labels verbatim.

use serde::Serialize;

/// Descriptive band for a sentiment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentimentBand {
    #[serde(rename = "Very Positive")]
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    #[serde(rename = "Very Negative")]
    VeryNegative,
}

impl SentimentBand {
    /// Band thresholds: >= 0.8 Very Positive, >= 0.6 Positive, >= 0.4
    /// Neutral, >= 0.2 Negative, below that Very Negative.
    pub fn from_score(score: f32) -> Self {
        if score >= 0.8 {
            SentimentBand::VeryPositive
        } else if score >= 0.6 {
            SentimentBand::Positive
        } else if score >= 0.4 {
            SentimentBand::Neutral
        } else if score >= 0.2 {
            SentimentBand::Negative
        } else {
            SentimentBand::VeryNegative
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentBand::VeryPositive => "Very Positive",
            SentimentBand::Positive => "Positive",
            SentimentBand::Neutral => "Neutral",
            SentimentBand::Negative => "Negative",
            SentimentBand::VeryNegative => "Very Negative",
        }
    }
}

impl std::fmt::Display for SentimentBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_are_inclusive_below() {
        assert_eq!(SentimentBand::from_score(0.8), SentimentBand::VeryPositive);
        assert_eq!(SentimentBand::from_score(0.79), SentimentBand::Positive);
        assert_eq!(SentimentBand::from_score(0.6), SentimentBand::Positive);
        assert_eq!(SentimentBand::from_score(0.5), SentimentBand::Neutral);
        assert_eq!(SentimentBand::from_score(0.2), SentimentBand::Negative);
        assert_eq!(SentimentBand::from_score(0.1), SentimentBand::VeryNegative);
    }
}
