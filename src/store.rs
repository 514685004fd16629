//! JSON persistence collaborator for the annotated survey set.
//!
//! The store reads and writes the full record array; it dictates nothing
//! about the records beyond the serde shape of [`SurveyRecord`]. Reading
//! never mutates: filling in missing derived fields is the explicit
//! [`annotate_missing`] operation, run separately from retrieval so the
//! read path stays side-effect free and idempotent.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::{Comment, NewSurvey, StoreError, SurveyRecord};
use crate::pipelines::annotation_pipeline::AnnotationPipeline;

/// File-backed store holding a JSON array of [`SurveyRecord`]s.
#[derive(Debug, Clone)]
pub struct SurveyStore {
    path: PathBuf,
}

impl SurveyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full record set. A missing file is an empty set, not an
    /// error; a present-but-malformed file is.
    pub fn load(&self) -> Result<Vec<SurveyRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write the full record set, pretty-printed, creating parent
    /// directories as needed.
    pub fn save(&self, records: &[SurveyRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// Fill derived fields on records that lack them. Returns how many records
/// were annotated; already-annotated records are left untouched, so running
/// this twice is a no-op the second time.
pub fn annotate_missing(records: &mut [SurveyRecord], pipeline: &AnnotationPipeline) -> usize {
    let mut filled = 0;
    for record in records.iter_mut() {
        if record.is_annotated() {
            continue;
        }
        let annotation = pipeline.annotate(&record.to_comment());
        if record.sentiment_score.is_none() {
            record.sentiment_score = Some(annotation.sentiment);
        }
        if record.categories.is_none() {
            record.categories = Some(annotation.categories);
        }
        filled += 1;
    }
    if filled > 0 {
        debug!(filled, "annotated records lacking derived fields");
    }
    filled
}

/// Append a newly submitted survey, annotated at insert.
///
/// Ids are one past the current maximum; a missing member id defaults to
/// `M{1000 + id}` and a missing date to today.
pub fn append_survey<'a>(
    records: &'a mut Vec<SurveyRecord>,
    new: NewSurvey,
    pipeline: &AnnotationPipeline,
) -> &'a SurveyRecord {
    let id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
    let date = new.date.unwrap_or_else(|| chrono::Local::now().date_naive());
    let member_id = new.member_id.unwrap_or_else(|| format!("M{}", 1000 + id));

    let annotation = pipeline.annotate(&Comment::new(new.comment.clone(), date, new.overall_rating));

    records.push(SurveyRecord {
        id,
        date,
        overall_rating: new.overall_rating,
        comment: new.comment,
        member_id,
        sentiment_score: Some(annotation.sentiment),
        categories: Some(annotation.categories),
    });
    &records[records.len() - 1]
}
