//! The sentiment scoring contract and the learned-model scorer wrapper.
//!
//! [`SentimentScorer`] is the capability the pipeline is generic over: one
//! contract, two interchangeable implementations (lexicon and learned
//! model), selected at construction. Scoring is total: every string maps
//! to a value in [0, 1] and nothing here returns an error to the caller.

use tracing::warn;

use crate::models::{InferenceBackend, LexiconScorer};

/// The defined neutral point of the score domain, returned for empty text
/// without invoking any scoring machinery.
pub const NEUTRAL_SCORE: f32 = 0.5;

/// Maps text to a sentiment score in [0, 1]; 0.5 is neutral.
///
/// Implementations must be total over all string inputs, including the
/// empty string. `Send + Sync` so batches of comments can be scored from
/// independent worker threads.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> f32;
}

/// How a [`ModelScorer`] resolves scores for its lifetime.
///
/// Set once at construction and never reassigned: a backend that failed to
/// load is not retried.
enum Mode<B> {
    /// The backend loaded; each call is a best-effort inference.
    Inference(B),
    /// Loading failed; every call delegates to the lexicon scorer.
    LexiconOnly,
}

/// Learned-model scorer with a mandatory lexicon fallback.
///
/// Construction never fails: if the backend cannot be built the scorer is
/// permanently pinned to lexicon mode. In inference mode a single failing
/// call falls back to the lexicon score for that text only; one bad
/// inference does not disable the model for later calls.
pub struct ModelScorer<B: InferenceBackend> {
    mode: Mode<B>,
    lexicon: LexiconScorer,
}

impl<B: InferenceBackend> ModelScorer<B> {
    /// Wrap a backend construction result.
    ///
    /// An `Err` is logged and degrades the scorer to lexicon-only for its
    /// entire lifetime; it is not surfaced to the caller.
    pub fn new(backend: anyhow::Result<B>) -> Self {
        let mode = match backend {
            Ok(backend) => Mode::Inference(backend),
            Err(e) => {
                warn!("sentiment model unavailable, falling back to lexicon scorer: {e:#}");
                Mode::LexiconOnly
            }
        };
        Self {
            mode,
            lexicon: LexiconScorer::new(),
        }
    }

    /// Whether this scorer is permanently running on the lexicon fallback.
    pub fn is_fallback(&self) -> bool {
        matches!(self.mode, Mode::LexiconOnly)
    }
}

impl<B: InferenceBackend> SentimentScorer for ModelScorer<B> {
    fn score(&self, text: &str) -> f32 {
        if text.trim().is_empty() {
            return NEUTRAL_SCORE;
        }
        match &self.mode {
            Mode::Inference(backend) => match backend.positive_probability(text) {
                Ok(p) => p,
                Err(e) => {
                    warn!("sentiment inference failed, using lexicon score for this text: {e:#}");
                    self.lexicon.score(text)
                }
            },
            Mode::LexiconOnly => self.lexicon.score(text),
        }
    }
}
