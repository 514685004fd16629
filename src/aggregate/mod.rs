//! Folds from per-comment annotations to time-series and per-category
//! summaries.
//!
//! Both rollups are append-only accumulators: independent shards can fold
//! their own slice of the input and be combined with `merge`, preserving
//! the deterministic first-seen ordering and first-3 example retention of
//! a sequential fold over the same input order.

pub mod category;
pub mod daily;

pub use category::{
    category_breakdown, CategoryExample, CategoryRollup, CategorySummary, MAX_EXAMPLES,
};
pub use daily::{sentiment_over_time, DailyRollup, DailySummary};
