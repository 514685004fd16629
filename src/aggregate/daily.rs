//! Per-date sentiment and rating aggregation.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::Annotation;

/// Incremental per-date accumulator.
///
/// One slot per distinct date, keyed by exact date equality; no range
/// bucketing, no timezone normalization. Output preserves first-seen date
/// order. Independent shards can be folded separately and combined with
/// [`merge`](DailyRollup::merge).
#[derive(Debug, Default)]
pub struct DailyRollup {
    slots: Vec<DailySlot>,
    index: HashMap<NaiveDate, usize>,
}

#[derive(Debug)]
struct DailySlot {
    date: NaiveDate,
    sentiment_sum: f64,
    rating_sum: f64,
    count: u32,
}

impl DailyRollup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one annotated comment's date, sentiment and rating.
    pub fn observe(&mut self, date: NaiveDate, sentiment: f32, rating: f32) {
        let idx = *self.index.entry(date).or_insert_with(|| {
            self.slots.push(DailySlot {
                date,
                sentiment_sum: 0.0,
                rating_sum: 0.0,
                count: 0,
            });
            self.slots.len() - 1
        });
        let slot = &mut self.slots[idx];
        slot.sentiment_sum += f64::from(sentiment);
        slot.rating_sum += f64::from(rating);
        slot.count += 1;
    }

    /// Combine a shard into this rollup: sums and counts add; dates first
    /// seen by `self` keep their position, new dates append in the shard's
    /// order.
    pub fn merge(&mut self, other: DailyRollup) {
        for slot in other.slots {
            let idx = *self.index.entry(slot.date).or_insert_with(|| {
                self.slots.push(DailySlot {
                    date: slot.date,
                    sentiment_sum: 0.0,
                    rating_sum: 0.0,
                    count: 0,
                });
                self.slots.len() - 1
            });
            let target = &mut self.slots[idx];
            target.sentiment_sum += slot.sentiment_sum;
            target.rating_sum += slot.rating_sum;
            target.count += slot.count;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Finish the fold. Every slot has seen at least one comment, so the
    /// means are always defined.
    pub fn into_summaries(self) -> Vec<DailySummary> {
        self.slots
            .into_iter()
            .map(|slot| DailySummary {
                date: slot.date,
                avg_sentiment: (slot.sentiment_sum / f64::from(slot.count)) as f32,
                avg_rating: (slot.rating_sum / f64::from(slot.count)) as f32,
                count: slot.count,
            })
            .collect()
    }
}

/// Mean sentiment and rating for one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub avg_sentiment: f32,
    pub avg_rating: f32,
    pub count: u32,
}

/// One-shot fold: one [`DailySummary`] per distinct date across the given
/// annotations, in first-seen order. Empty input yields an empty vec.
pub fn sentiment_over_time<'a>(
    annotations: impl IntoIterator<Item = &'a Annotation>,
) -> Vec<DailySummary> {
    let mut rollup = DailyRollup::new();
    for annotation in annotations {
        rollup.observe(
            annotation.comment.date,
            annotation.sentiment,
            annotation.comment.rating,
        );
    }
    rollup.into_summaries()
}
