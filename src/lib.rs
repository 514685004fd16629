pub mod aggregate;
pub mod categories;
pub mod core;
pub mod display;
pub mod models;
pub mod pipelines;
pub mod store;

// Re-export core types
pub use crate::core::{Annotation, Comment, NewSurvey, StoreError, SurveyRecord};

pub use categories::Category;
pub use display::SentimentBand;

// Re-export model types for easier access
pub use models::{InferenceBackend, LexiconScorer, ModernBertSize, SentimentModernBert};

pub use pipelines::{
    AnnotationPipeline, AnnotationPipelineBuilder, CategoryExtractor, ModelScorer,
    SentimentScorer, NEUTRAL_SCORE,
};

pub use aggregate::{
    category_breakdown, sentiment_over_time, CategoryExample, CategoryRollup, CategorySummary,
    DailyRollup, DailySummary,
};
