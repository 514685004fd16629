// Integration tests for the annotation pipeline public API.

use chrono::NaiveDate;
use survey_insights::pipelines::annotation_pipeline::*;
use survey_insights::Category;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn lexicon_pipeline() -> AnnotationPipeline {
    AnnotationPipelineBuilder::lexicon()
        .build()
        .expect("lexicon pipeline always builds")
}

#[test]
fn scorer_is_total_over_all_strings() {
    let pipeline = lexicon_pipeline();
    let inputs = [
        "",
        " ",
        "plain text with no polarity",
        "I absolutely loved the races!",
        "Terrible service, never again.",
        "日本語のコメント",
        "!!!???...",
    ];
    for input in inputs {
        let score = pipeline.score(input);
        assert!(
            (0.0..=1.0).contains(&score),
            "score {score} out of range for {input:?}"
        );
    }
}

#[test]
fn empty_text_scores_exactly_neutral() {
    let pipeline = lexicon_pipeline();
    assert_eq!(pipeline.score(""), NEUTRAL_SCORE);
    assert_eq!(pipeline.score("   \n"), NEUTRAL_SCORE);
}

#[test]
fn empty_text_extracts_empty_mapping() {
    let pipeline = lexicon_pipeline();
    assert!(pipeline.extract("").is_empty());
}

#[test]
fn whole_word_matching_rejects_substrings() {
    let pipeline = lexicon_pipeline();
    // "cat" sits inside "category" and "sat" contains "at"; no keyword may
    // fire on a substring of a longer word.
    assert!(pipeline.extract("The cat sat on the mat.").is_empty());
    assert!(!pipeline
        .extract("this category was great")
        .contains_key(&Category::Racing));
}

#[test]
fn keyword_match_includes_sentence() {
    let pipeline = lexicon_pipeline();
    let out = pipeline.extract("We had a delicious dinner.");
    assert_eq!(
        out.get(&Category::Food).map(String::as_str),
        Some("We had a delicious dinner.")
    );
}

#[test]
fn unrelated_text_yields_no_categories() {
    let pipeline = lexicon_pipeline();
    assert!(pipeline.extract("The weather was nice.").is_empty());
}

#[test]
fn sentences_keep_original_order_and_case() {
    let pipeline = lexicon_pipeline();
    let text = "The STAFF were welcoming. The lunch was stale. Our waiter checked on us twice.";
    let out = pipeline.extract(text);

    assert_eq!(
        out.get(&Category::Service).map(String::as_str),
        Some("The STAFF were welcoming. Our waiter checked on us twice.")
    );
    assert_eq!(
        out.get(&Category::Food).map(String::as_str),
        Some("The lunch was stale.")
    );
}

#[test]
fn one_sentence_can_satisfy_multiple_categories() {
    let pipeline = lexicon_pipeline();
    let text = "The staff served a delicious meal.";
    let out = pipeline.extract(text);

    assert_eq!(out.get(&Category::Service).map(String::as_str), Some(text));
    assert_eq!(out.get(&Category::Food).map(String::as_str), Some(text));
}

#[test]
fn annotate_combines_score_and_extraction() {
    let pipeline = lexicon_pipeline();
    let comment = Comment::new(
        "The food was wonderful. Parking was a mess.",
        date(2024, 5, 18),
        4.0,
    );

    let annotation = pipeline.annotate(&comment);
    assert_eq!(annotation.comment, comment);
    assert_eq!(annotation.sentiment, pipeline.score(&comment.text));
    assert_eq!(annotation.categories, pipeline.extract(&comment.text));
    assert!(annotation.categories.contains_key(&Category::Food));
    assert!(annotation.categories.contains_key(&Category::Facilities));
}

#[test]
fn annotation_is_idempotent() {
    let pipeline = lexicon_pipeline();
    let comment = Comment::new("Great day at the races!", date(2024, 5, 18), 5.0);
    assert_eq!(pipeline.annotate(&comment), pipeline.annotate(&comment));
}

#[test]
fn annotate_all_preserves_input_order() {
    let pipeline = lexicon_pipeline();
    let comments = vec![
        Comment::new("Lovely atmosphere.", date(2024, 5, 18), 5.0),
        Comment::new("Queue for the bathroom was long.", date(2024, 5, 19), 2.0),
    ];
    let annotations = pipeline.annotate_all(&comments);
    assert_eq!(annotations.len(), 2);
    assert_eq!(annotations[0].comment, comments[0]);
    assert_eq!(annotations[1].comment, comments[1]);
}
