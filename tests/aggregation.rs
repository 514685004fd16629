// Integration tests for the aggregation folds.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use survey_insights::aggregate::{
    category_breakdown, sentiment_over_time, CategoryRollup, DailyRollup,
};
use survey_insights::{
    Annotation, AnnotationPipelineBuilder, Category, Comment, LexiconScorer, SentimentScorer,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn annotation(text: &str, on: NaiveDate, rating: f32, sentiment: f32) -> Annotation {
    Annotation {
        comment: Comment::new(text, on, rating),
        sentiment,
        categories: BTreeMap::new(),
    }
}

fn with_category(mut annotation: Annotation, category: Category, text: &str) -> Annotation {
    annotation.categories.insert(category, text.to_string());
    annotation
}

#[test]
fn daily_fold_means_and_counts() {
    let d1 = date(2024, 6, 1);
    let d2 = date(2024, 6, 2);
    let annotations = vec![
        annotation("a", d1, 4.0, 0.8),
        annotation("b", d1, 2.0, 0.4),
        annotation("c", d2, 5.0, 0.6),
    ];

    let summaries = sentiment_over_time(&annotations);
    assert_eq!(summaries.len(), 2);

    let first = &summaries[0];
    assert_eq!(first.date, d1);
    assert_eq!(first.count, 2);
    assert!((first.avg_rating - 3.0).abs() < 1e-6);
    assert!((first.avg_sentiment - 0.6).abs() < 1e-6);

    let second = &summaries[1];
    assert_eq!(second.date, d2);
    assert_eq!(second.count, 1);
    assert!((second.avg_rating - 5.0).abs() < 1e-6);
    assert!((second.avg_sentiment - 0.6).abs() < 1e-6);
}

#[test]
fn daily_fold_preserves_first_seen_date_order() {
    let d1 = date(2024, 6, 1);
    let d2 = date(2024, 6, 2);
    let annotations = vec![
        annotation("a", d2, 3.0, 0.5),
        annotation("b", d1, 3.0, 0.5),
        annotation("c", d2, 3.0, 0.5),
    ];

    let summaries = sentiment_over_time(&annotations);
    let dates: Vec<_> = summaries.iter().map(|s| s.date).collect();
    assert_eq!(dates, vec![d2, d1]);
}

#[test]
fn empty_input_yields_empty_aggregates() {
    let none: Vec<Annotation> = Vec::new();
    assert!(sentiment_over_time(&none).is_empty());
    assert!(category_breakdown(&none, &LexiconScorer::new()).is_empty());
    assert!(DailyRollup::new().is_empty());
    assert!(CategoryRollup::new().is_empty());
}

#[test]
fn category_sentiment_is_recomputed_on_extracted_text() {
    let pipeline = AnnotationPipelineBuilder::lexicon().build().unwrap();
    // One positive food sentence buried in an otherwise negative comment:
    // the food aggregate must reflect only its own text.
    let comment = Comment::new(
        "The food was delicious and wonderful. The parking was awful and the staff were rude.",
        date(2024, 6, 1),
        3.0,
    );
    let annotation = pipeline.annotate(&comment);
    assert!(annotation.categories.contains_key(&Category::Food));

    let annotations = vec![annotation.clone()];
    let summaries = category_breakdown(&annotations, pipeline.scorer());
    let food = summaries
        .iter()
        .find(|s| s.category == Category::Food)
        .expect("food category present");

    assert!(food.avg_sentiment > 0.5, "food text alone is positive");
    assert!(
        food.avg_sentiment > annotation.sentiment,
        "category score must not reuse the overall comment score"
    );
}

#[test]
fn examples_retain_first_three_in_encounter_order() {
    let d = date(2024, 6, 1);
    let texts = [
        "Great value for money.",
        "Ticket cost was reasonable.",
        "A bit expensive but worth it.",
        "Overpriced drinks.",
        "Good value overall.",
    ];
    let annotations: Vec<Annotation> = texts
        .iter()
        .map(|t| with_category(annotation(t, d, 3.0, 0.5), Category::Value, t))
        .collect();

    let summaries = category_breakdown(&annotations, &LexiconScorer::new());
    assert_eq!(summaries.len(), 1);

    let value = &summaries[0];
    assert_eq!(value.category, Category::Value);
    assert_eq!(value.count, 5);

    let retained: Vec<&str> = value
        .example_comments
        .iter()
        .map(|e| e.text.as_str())
        .collect();
    assert_eq!(retained, &texts[..3]);

    // Examples carry the recomputed sentiment for their own text.
    let scorer = LexiconScorer::new();
    for example in &value.example_comments {
        assert_eq!(example.sentiment, scorer.score(&example.text));
    }
}

#[test]
fn absent_categories_are_omitted_not_zero_filled() {
    let d = date(2024, 6, 1);
    let annotations = vec![with_category(
        annotation("x", d, 3.0, 0.5),
        Category::Racing,
        "The racing was thrilling.",
    )];
    let summaries = category_breakdown(&annotations, &LexiconScorer::new());
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].category, Category::Racing);
}

#[test]
fn daily_shard_merge_matches_sequential_fold() {
    let d1 = date(2024, 6, 1);
    let d2 = date(2024, 6, 2);
    let all = vec![
        (d1, 0.8, 4.0),
        (d2, 0.6, 5.0),
        (d1, 0.4, 2.0),
        (d2, 0.2, 1.0),
    ];

    let mut sequential = DailyRollup::new();
    for &(date, sentiment, rating) in &all {
        sequential.observe(date, sentiment, rating);
    }

    let mut left = DailyRollup::new();
    for &(date, sentiment, rating) in &all[..2] {
        left.observe(date, sentiment, rating);
    }
    let mut right = DailyRollup::new();
    for &(date, sentiment, rating) in &all[2..] {
        right.observe(date, sentiment, rating);
    }
    left.merge(right);

    assert_eq!(sequential.into_summaries(), left.into_summaries());
}

#[test]
fn category_shard_merge_truncates_examples_to_global_first_three() {
    let observations = [
        "first impression",
        "second impression",
        "third impression",
        "fourth impression",
        "fifth impression",
    ];

    let mut sequential = CategoryRollup::new();
    for text in &observations {
        sequential.observe(Category::Atmosphere, text, 0.5);
    }

    let mut left = CategoryRollup::new();
    for text in &observations[..2] {
        left.observe(Category::Atmosphere, text, 0.5);
    }
    let mut right = CategoryRollup::new();
    for text in &observations[2..] {
        right.observe(Category::Atmosphere, text, 0.5);
    }
    left.merge(right);

    let merged = left.into_summaries();
    assert_eq!(merged, sequential.into_summaries());
    assert_eq!(merged[0].example_comments.len(), 3);
    assert_eq!(merged[0].example_comments[2].text, "third impression");
}
