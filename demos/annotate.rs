use anyhow::Result;
use chrono::NaiveDate;
use survey_insights::aggregate::{category_breakdown, sentiment_over_time};
use survey_insights::{AnnotationPipelineBuilder, Comment, SentimentBand};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // The lexicon scorer runs offline; swap in
    // `AnnotationPipelineBuilder::modernbert(ModernBertSize::Base)` to score
    // with the classifier (it falls back to the lexicon if loading fails).
    let pipeline = AnnotationPipelineBuilder::lexicon().build()?;

    let comments = vec![
        Comment::new(
            "The food was delicious and the staff were really friendly. \
             Parking was a nightmare though.",
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            4.0,
        ),
        Comment::new(
            "Overpriced drinks and a dirty bathroom. The racing itself was thrilling!",
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            2.0,
        ),
        Comment::new(
            "Wonderful atmosphere, great view of the track.",
            NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
            5.0,
        ),
    ];

    let annotations = pipeline.annotate_all(&comments);

    println!("=== Annotations ===");
    for annotation in &annotations {
        println!(
            "\n\"{}\"\n  sentiment: {:.3} ({})",
            annotation.comment.text,
            annotation.sentiment,
            SentimentBand::from_score(annotation.sentiment),
        );
        for (category, text) in &annotation.categories {
            println!("  [{}] {}", category, text);
        }
    }

    println!("\n=== Sentiment over time ===");
    for day in sentiment_over_time(&annotations) {
        println!(
            "{}: sentiment {:.3}, rating {:.1} ({} comments)",
            day.date, day.avg_sentiment, day.avg_rating, day.count
        );
    }

    println!("\n=== Category breakdown ===");
    for summary in category_breakdown(&annotations, pipeline.scorer()) {
        println!(
            "{:<12} {:.3} ({}) e.g. \"{}\"",
            summary.category.display_name(),
            summary.avg_sentiment,
            summary.count,
            summary.example_comments[0].text
        );
    }

    Ok(())
}
