// Pipeline modules organized by functionality
pub mod annotation_pipeline;

pub use annotation_pipeline::{
    AnnotationPipeline, AnnotationPipelineBuilder, CategoryExtractor, ModelScorer,
    SentimentScorer, NEUTRAL_SCORE,
};
