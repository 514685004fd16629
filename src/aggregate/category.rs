//! Per-category sentiment aggregation with retained examples.

use std::collections::HashMap;

use serde::Serialize;

use crate::categories::Category;
use crate::core::Annotation;
use crate::pipelines::annotation_pipeline::SentimentScorer;

/// Examples retained per category: the first three seen, in encounter
/// order, never re-sorted by score.
pub const MAX_EXAMPLES: usize = 3;

/// Incremental per-category accumulator.
///
/// Categories that never appear are absent from the output, not
/// zero-filled. Output order is first-seen. Shards combine with
/// [`merge`](CategoryRollup::merge): sums and counts add, example lists
/// concatenate in shard order and truncate back to the first three.
#[derive(Debug, Default)]
pub struct CategoryRollup {
    slots: Vec<CategorySlot>,
    index: HashMap<Category, usize>,
}

#[derive(Debug)]
struct CategorySlot {
    category: Category,
    sentiment_sum: f64,
    count: u32,
    examples: Vec<CategoryExample>,
}

impl CategoryRollup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one (category, text, sentiment) observation.
    pub fn observe(&mut self, category: Category, text: &str, sentiment: f32) {
        let idx = *self.index.entry(category).or_insert_with(|| {
            self.slots.push(CategorySlot {
                category,
                sentiment_sum: 0.0,
                count: 0,
                examples: Vec::with_capacity(MAX_EXAMPLES),
            });
            self.slots.len() - 1
        });
        let slot = &mut self.slots[idx];
        slot.sentiment_sum += f64::from(sentiment);
        slot.count += 1;
        if slot.examples.len() < MAX_EXAMPLES {
            slot.examples.push(CategoryExample {
                text: text.to_string(),
                sentiment,
            });
        }
    }

    /// Combine a shard into this rollup.
    pub fn merge(&mut self, other: CategoryRollup) {
        for slot in other.slots {
            let idx = *self.index.entry(slot.category).or_insert_with(|| {
                self.slots.push(CategorySlot {
                    category: slot.category,
                    sentiment_sum: 0.0,
                    count: 0,
                    examples: Vec::with_capacity(MAX_EXAMPLES),
                });
                self.slots.len() - 1
            });
            let target = &mut self.slots[idx];
            target.sentiment_sum += slot.sentiment_sum;
            target.count += slot.count;
            target.examples.extend(slot.examples);
            target.examples.truncate(MAX_EXAMPLES);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn into_summaries(self) -> Vec<CategorySummary> {
        self.slots
            .into_iter()
            .map(|slot| CategorySummary {
                category: slot.category,
                avg_sentiment: (slot.sentiment_sum / f64::from(slot.count)) as f32,
                count: slot.count,
                example_comments: slot.examples,
            })
            .collect()
    }
}

/// A retained (text, sentiment) example for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryExample {
    pub text: String,
    pub sentiment: f32,
}

/// Aggregated sentiment for one category across many comments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: Category,
    pub avg_sentiment: f32,
    pub count: u32,
    pub example_comments: Vec<CategoryExample>,
}

/// One-shot fold over annotated comments.
///
/// Sentiment is recomputed on each category's extracted text via the given
/// scorer; it is not the comment's overall score, and the two legitimately
/// differ. That re-scoring is the contract here, observable through the
/// summaries; reusing the cached overall score would change behavior.
pub fn category_breakdown<'a>(
    annotations: impl IntoIterator<Item = &'a Annotation>,
    scorer: &dyn SentimentScorer,
) -> Vec<CategorySummary> {
    let mut rollup = CategoryRollup::new();
    for annotation in annotations {
        for (category, text) in &annotation.categories {
            let sentiment = scorer.score(text);
            rollup.observe(*category, text, sentiment);
        }
    }
    rollup.into_summaries()
}
