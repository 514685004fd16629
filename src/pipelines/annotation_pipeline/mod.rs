//! Annotation pipeline: per-comment sentiment plus category extraction.
//!
//! The pipeline combines a pluggable sentiment scorer with sentence-level
//! category extraction, producing one immutable [`Annotation`] per comment.
//!
//! ## Main Types
//!
//! - [`AnnotationPipeline`] - the annotator
//! - [`AnnotationPipelineBuilder`] - construction-time scorer and device choice
//! - [`SentimentScorer`] - the scoring contract both scorers implement
//! - [`CategoryExtractor`] - keyword-driven sentence extraction
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use survey_insights::pipelines::annotation_pipeline::*;
//! use survey_insights::{Comment, ModernBertSize};
//!
//! let pipeline = AnnotationPipelineBuilder::modernbert(ModernBertSize::Base).build()?;
//!
//! let comment = Comment::new(
//!     "The food was delicious. Parking was a nightmare.",
//!     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
//!     4.0,
//! );
//! let annotation = pipeline.annotate(&comment);
//! println!("sentiment {:.2}, {} categories", annotation.sentiment, annotation.categories.len());
//! # anyhow::Ok(())
//! ```

pub mod builder;
pub mod extractor;
pub mod pipeline;
pub mod scorer;

pub use builder::AnnotationPipelineBuilder;
pub use extractor::CategoryExtractor;
pub use pipeline::AnnotationPipeline;
pub use scorer::{ModelScorer, SentimentScorer, NEUTRAL_SCORE};

pub use crate::core::{Annotation, Comment};
pub use crate::models::ModernBertSize;
