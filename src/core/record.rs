//! Shared value types for comments, annotations and stored survey records.
//!
//! Everything here is a plain value: computed from input, folded into
//! aggregates, never shared mutably. An [`Annotation`] is produced once per
//! comment and treated as immutable afterwards; recomputing one from the
//! same comment yields the same result.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::categories::Category;

/// A raw survey comment: the free text plus the date and rating it was
/// submitted with. The rating correlates with sentiment downstream but is
/// never validated against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
    pub date: NaiveDate,
    pub rating: f32,
}

impl Comment {
    pub fn new(text: impl Into<String>, date: NaiveDate, rating: f32) -> Self {
        Self {
            text: text.into(),
            date,
            rating,
        }
    }
}

/// The derived signals for one comment: overall sentiment over the whole
/// text, and the per-category relevant text spans.
///
/// A category absent from `categories` had zero matching sentences; an
/// empty string never appears as a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub comment: Comment,
    pub sentiment: f32,
    pub categories: BTreeMap<Category, String>,
}

/// One record of the persisted survey set, as exchanged with the
/// persistence collaborator.
///
/// `id` and `member_id` pass through this crate untouched. The two derived
/// fields are `None` until an explicit annotation pass fills them; see
/// [`annotate_missing`](crate::store::annotate_missing).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyRecord {
    pub id: u64,
    pub date: NaiveDate,
    pub overall_rating: f32,
    pub comment: String,
    pub member_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment_score: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<BTreeMap<Category, String>>,
}

impl SurveyRecord {
    /// The comment fields of this record as a standalone value.
    pub fn to_comment(&self) -> Comment {
        Comment::new(self.comment.clone(), self.date, self.overall_rating)
    }

    /// Rebuild the [`Annotation`] from the stored derived fields, if both
    /// are present. Records that have not been through an annotation pass
    /// yield `None`; run [`annotate_missing`](crate::store::annotate_missing)
    /// first rather than recomputing inside a read path.
    pub fn annotation(&self) -> Option<Annotation> {
        let sentiment = self.sentiment_score?;
        let categories = self.categories.clone()?;
        Some(Annotation {
            comment: self.to_comment(),
            sentiment,
            categories,
        })
    }

    /// Whether both derived fields are present.
    pub fn is_annotated(&self) -> bool {
        self.sentiment_score.is_some() && self.categories.is_some()
    }
}

/// Input shape for a survey submitted at the boundary.
///
/// `overall_rating` and `comment` are required; a payload missing either
/// fails deserialization at the boundary, which is where that validation
/// belongs.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSurvey {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub overall_rating: f32,
    pub comment: String,
    #[serde(default)]
    pub member_id: Option<String>,
}
