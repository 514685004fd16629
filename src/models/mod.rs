pub mod lexicon;
pub mod modernbert;

pub use lexicon::LexiconScorer;
pub use modernbert::{ModernBertSize, SentimentModernBert};

/// A learned inference backend: text in, positive-class probability out.
///
/// Any failure here is recoverable: the scorer wrapping the backend falls
/// back to the lexicon path rather than surfacing the error. The single
/// fallible call is also the hook point for hosts that need a timeout or
/// cancellation around inference: wrap it before handing the result to the
/// scorer, the crate imposes no deadline of its own.
pub trait InferenceBackend: Send + Sync {
    fn positive_probability(&self, text: &str) -> anyhow::Result<f32>;
}
