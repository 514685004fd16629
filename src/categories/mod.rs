//! The fixed set of survey feedback categories.
//!
//! Categories are a closed enum rather than free-form strings so that an
//! unknown name fails at deserialization instead of silently creating a new
//! bucket. The keyword registry backing extraction lives in [`keywords`];
//! the presentation metadata (display names, colors, icons) mirrors what
//! the reporting frontend consumes.

mod keywords;

use serde::{Deserialize, Serialize};

/// One of the fixed survey feedback topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Service,
    Facilities,
    Racing,
    Value,
    Atmosphere,
}

impl Category {
    /// Every category, in registry order.
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Service,
        Category::Facilities,
        Category::Racing,
        Category::Value,
        Category::Atmosphere,
    ];

    /// The lowercase wire name, identical to the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Service => "service",
            Category::Facilities => "facilities",
            Category::Racing => "racing",
            Category::Value => "value",
            Category::Atmosphere => "atmosphere",
        }
    }

    /// Keyword set that triggers this category during extraction.
    ///
    /// Whole-word, case-insensitive matching is applied by the extractor;
    /// entries may span multiple words (e.g. "customer service").
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::Food => keywords::FOOD,
            Category::Service => keywords::SERVICE,
            Category::Facilities => keywords::FACILITIES,
            Category::Racing => keywords::RACING,
            Category::Value => keywords::VALUE,
            Category::Atmosphere => keywords::ATMOSPHERE,
        }
    }

    /// User-facing display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Food => "Food & Beverages",
            Category::Service => "Staff & Service",
            Category::Facilities => "Facilities & Venue",
            Category::Racing => "Racing Experience",
            Category::Value => "Value for Money",
            Category::Atmosphere => "Atmosphere & Ambiance",
        }
    }

    /// Hex color used consistently across visualizations.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Food => "#FF6B6B",
            Category::Service => "#4ECDC4",
            Category::Facilities => "#FFD166",
            Category::Racing => "#6A0572",
            Category::Value => "#1A936F",
            Category::Atmosphere => "#3D5A80",
        }
    }

    /// Material icon name for this category.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Food => "restaurant",
            Category::Service => "people",
            Category::Facilities => "location_city",
            Category::Racing => "sports_score",
            Category::Value => "attach_money",
            Category::Atmosphere => "emoji_emotions",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
