//! Rule-based sentiment scoring over a valence lexicon.
//!
//! This is the fast, deterministic scorer: no model weights, no downloads,
//! total over every input string. Each token carries a signed valence on a
//! roughly [-4, 4] scale; negations flip and damp it, booster words push it
//! further from zero, and trailing exclamation marks amplify the total. The
//! summed valence is squashed into a compound polarity in [-1, 1] and then
//! normalized into the [0, 1] score domain shared with the learned scorer.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use unicode_segmentation::UnicodeSegmentation;

use crate::pipelines::annotation_pipeline::scorer::{SentimentScorer, NEUTRAL_SCORE};

/// Normalization constant for the compound squash.
const ALPHA: f64 = 15.0;
/// Valence scaling applied when a token sits in a negated context.
const NEGATION_SCALAR: f64 = -0.74;
/// Base shift contributed by a booster or dampener word.
const BOOST_INCR: f64 = 0.293;
/// Per-exclamation amplification, capped at four marks.
const EXCLAMATION_INCR: f64 = 0.292;
/// How far back a negation or booster can reach, in tokens.
const CONTEXT_WINDOW: usize = 3;

/// Token valences. Magnitudes follow the usual [-4, 4] polarity scale;
/// entries skew toward vocabulary that shows up in venue feedback.
const LEXICON: &[(&str, f64)] = &[
    ("amazing", 2.8),
    ("appalling", -2.5),
    ("attentive", 1.6),
    ("average", -0.5),
    ("awesome", 3.1),
    ("awful", -2.0),
    ("bad", -2.5),
    ("beautiful", 2.7),
    ("best", 3.2),
    ("bland", -1.4),
    ("boring", -1.3),
    ("brilliant", 2.8),
    ("broken", -1.6),
    ("careless", -1.6),
    ("charming", 2.2),
    ("cheerful", 2.4),
    ("clean", 1.7),
    ("comfortable", 2.0),
    ("convenient", 1.6),
    ("courteous", 1.9),
    ("cramped", -1.4),
    ("crowded", -1.0),
    ("decent", 1.2),
    ("delicious", 2.3),
    ("delight", 2.6),
    ("delighted", 2.9),
    ("delightful", 2.8),
    ("dirty", -1.8),
    ("disappointed", -2.1),
    ("disappointing", -2.2),
    ("disgusting", -2.9),
    ("dismal", -2.1),
    ("dreadful", -2.5),
    ("dull", -1.2),
    ("easy", 1.5),
    ("efficient", 1.8),
    ("enjoy", 2.0),
    ("enjoyable", 1.9),
    ("enjoyed", 2.2),
    ("excellent", 2.7),
    ("exceptional", 2.6),
    ("exciting", 2.2),
    ("fabulous", 2.7),
    ("fail", -2.0),
    ("failed", -2.1),
    ("fantastic", 2.6),
    ("fast", 1.2),
    ("fault", -1.5),
    ("favorite", 2.2),
    ("filthy", -2.4),
    ("fine", 1.1),
    ("flawless", 2.7),
    ("fresh", 1.5),
    ("friendly", 2.2),
    ("frustrating", -2.1),
    ("fun", 2.3),
    ("generous", 2.1),
    ("good", 1.9),
    ("gorgeous", 2.7),
    ("great", 3.1),
    ("grim", -1.9),
    ("happy", 2.7),
    ("hate", -2.7),
    ("hated", -2.8),
    ("helpful", 1.8),
    ("horrible", -2.5),
    ("horrendous", -2.8),
    ("impressed", 2.2),
    ("impressive", 2.3),
    ("inadequate", -1.7),
    ("incompetent", -2.2),
    ("incredible", 2.6),
    ("inedible", -2.4),
    ("knowledgeable", 1.7),
    ("lackluster", -1.5),
    ("like", 1.5),
    ("liked", 1.7),
    ("lovely", 2.8),
    ("love", 3.2),
    ("loved", 2.9),
    ("magnificent", 2.9),
    ("mediocre", -1.3),
    ("memorable", 1.9),
    ("mess", -1.6),
    ("messy", -1.5),
    ("nasty", -2.4),
    ("neat", 1.6),
    ("nice", 1.8),
    ("noisy", -1.1),
    ("outstanding", 3.0),
    ("overcooked", -1.6),
    ("overcrowded", -1.6),
    ("overpriced", -1.9),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("pleased", 2.3),
    ("polite", 1.9),
    ("poor", -2.3),
    ("pricey", -1.2),
    ("problem", -1.6),
    ("problems", -1.7),
    ("prompt", 1.4),
    ("reasonable", 1.4),
    ("recommend", 1.8),
    ("recommended", 1.9),
    ("refund", -1.0),
    ("rip-off", -2.6),
    ("rude", -2.0),
    ("ruined", -2.4),
    ("sad", -2.1),
    ("satisfied", 2.0),
    ("satisfying", 2.1),
    ("shabby", -1.7),
    ("shocking", -1.8),
    ("slow", -1.2),
    ("smooth", 1.5),
    ("spacious", 1.6),
    ("spectacular", 2.9),
    ("spotless", 2.2),
    ("stale", -1.7),
    ("stunning", 2.8),
    ("stylish", 1.8),
    ("superb", 2.9),
    ("tasteless", -1.9),
    ("tasty", 2.1),
    ("terrible", -2.1),
    ("terrific", 2.7),
    ("thrilled", 2.8),
    ("thrilling", 2.4),
    ("tidy", 1.5),
    ("tired", -1.2),
    ("uncomfortable", -1.8),
    ("unfriendly", -2.0),
    ("unhelpful", -1.9),
    ("unpleasant", -2.1),
    ("unprofessional", -2.1),
    ("unreliable", -1.8),
    ("upset", -1.9),
    ("useless", -1.9),
    ("value", 1.3),
    ("vibrant", 2.0),
    ("warm", 1.6),
    ("waste", -2.0),
    ("welcoming", 2.2),
    ("wonderful", 2.7),
    ("worst", -3.1),
    ("worth", 1.4),
    ("worthless", -2.3),
    ("wow", 2.6),
    ("wrong", -1.7),
];

/// Words that negate a following sentiment token.
const NEGATORS: &[&str] = &[
    "ain't",
    "aren't",
    "barely",
    "can't",
    "cannot",
    "couldn't",
    "didn't",
    "doesn't",
    "don't",
    "hardly",
    "isn't",
    "lack",
    "lacked",
    "lacking",
    "neither",
    "never",
    "no",
    "nobody",
    "none",
    "nor",
    "not",
    "nothing",
    "nowhere",
    "scarcely",
    "shouldn't",
    "wasn't",
    "weren't",
    "without",
    "won't",
    "wouldn't",
];

/// Intensity modifiers: positive entries push valence away from zero,
/// negative entries pull it toward zero.
const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", BOOST_INCR),
    ("completely", BOOST_INCR),
    ("considerably", BOOST_INCR),
    ("decidedly", BOOST_INCR),
    ("deeply", BOOST_INCR),
    ("especially", BOOST_INCR),
    ("exceptionally", BOOST_INCR),
    ("extremely", BOOST_INCR),
    ("highly", BOOST_INCR),
    ("hugely", BOOST_INCR),
    ("incredibly", BOOST_INCR),
    ("really", BOOST_INCR),
    ("remarkably", BOOST_INCR),
    ("so", BOOST_INCR),
    ("thoroughly", BOOST_INCR),
    ("totally", BOOST_INCR),
    ("truly", BOOST_INCR),
    ("utterly", BOOST_INCR),
    ("very", BOOST_INCR),
    ("almost", -BOOST_INCR),
    ("kinda", -BOOST_INCR),
    ("less", -BOOST_INCR),
    ("marginally", -BOOST_INCR),
    ("occasionally", -BOOST_INCR),
    ("partly", -BOOST_INCR),
    ("slightly", -BOOST_INCR),
    ("somewhat", -BOOST_INCR),
];

static VALENCES: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| LEXICON.iter().copied().collect());

static BOOSTS: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| BOOSTERS.iter().copied().collect());

/// Lexicon-based polarity scorer.
///
/// Deterministic and infallible; the same text always produces the same
/// score. Suitable wherever the learned scorer is unavailable or too slow.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    pub fn new() -> Self {
        Self
    }

    /// Raw compound polarity in [-1, 1]; 0 is neutral.
    ///
    /// Exposed separately from [`score`](SentimentScorer::score) so hosts
    /// that want the signed polarity can read it before normalization.
    pub fn compound(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }

        let tokens: Vec<String> = text
            .unicode_words()
            .map(|w| w.to_lowercase())
            .collect();

        let mut sum = 0.0f64;
        for (idx, token) in tokens.iter().enumerate() {
            let Some(&valence) = VALENCES.get(token.as_str()) else {
                continue;
            };
            sum += contextual_valence(valence, idx, &tokens);
        }

        if sum != 0.0 {
            let emphasis = exclamation_emphasis(text);
            sum += emphasis * sum.signum();
        }

        (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> f32 {
        if text.trim().is_empty() {
            return NEUTRAL_SCORE;
        }
        normalize(self.compound(text))
    }
}

/// Map a compound polarity in [-1, 1] onto the [0, 1] score domain.
fn normalize(compound: f64) -> f32 {
    ((compound + 1.0) / 2.0) as f32
}

/// Apply negation and booster context from the preceding window.
fn contextual_valence(valence: f64, idx: usize, tokens: &[String]) -> f64 {
    let mut v = valence;
    let mut negated = false;

    for distance in 1..=CONTEXT_WINDOW {
        let Some(prior_idx) = idx.checked_sub(distance) else {
            break;
        };
        let prior = tokens[prior_idx].as_str();

        if let Some(&boost) = BOOSTS.get(prior) {
            // Boost fades with distance from the token it modifies.
            let damping = match distance {
                1 => 1.0,
                2 => 0.95,
                _ => 0.9,
            };
            v += boost * damping * valence.signum();
        }

        if NEGATORS.contains(&prior) {
            negated = true;
        }
    }

    if negated {
        v *= NEGATION_SCALAR;
    }
    v
}

/// Emphasis contributed by trailing exclamation marks, capped at four.
fn exclamation_emphasis(text: &str) -> f64 {
    let count = text.matches('!').count().min(4);
    count as f64 * EXCLAMATION_INCR
}
