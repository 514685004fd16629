use std::collections::BTreeMap;

use super::extractor::CategoryExtractor;
use super::scorer::SentimentScorer;
use crate::categories::Category;
use crate::core::{Annotation, Comment};

/// The annotator: combines a sentiment scorer with category extraction.
///
/// `annotate` is a pure function of its input: no hidden state, no I/O.
/// Callers own persistence and caching of the results; annotating the same
/// comment twice yields the same annotation. Comments are independent of
/// one another, so batches may be annotated from parallel workers.
pub struct AnnotationPipeline {
    pub(crate) scorer: Box<dyn SentimentScorer>,
    pub(crate) extractor: CategoryExtractor,
}

impl AnnotationPipeline {
    /// Annotate one comment: overall sentiment over the whole text plus
    /// the per-category relevant text spans.
    pub fn annotate(&self, comment: &Comment) -> Annotation {
        Annotation {
            comment: comment.clone(),
            sentiment: self.scorer.score(&comment.text),
            categories: self.extractor.extract(&comment.text),
        }
    }

    /// Annotate a batch in order.
    pub fn annotate_all<'a>(
        &self,
        comments: impl IntoIterator<Item = &'a Comment>,
    ) -> Vec<Annotation> {
        comments.into_iter().map(|c| self.annotate(c)).collect()
    }

    /// Score a bare text with the pipeline's scorer.
    pub fn score(&self, text: &str) -> f32 {
        self.scorer.score(text)
    }

    /// Extract categories from a bare text.
    pub fn extract(&self, text: &str) -> BTreeMap<Category, String> {
        self.extractor.extract(text)
    }

    /// The scorer, for folds that re-score category text.
    pub fn scorer(&self) -> &dyn SentimentScorer {
        self.scorer.as_ref()
    }
}
