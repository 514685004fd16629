//! Per-category keyword registry.
//!
//! Configuration data, not logic: each slice is the curated set of trigger
//! words for one [`Category`](super::Category). Matching rules (whole-word,
//! case-insensitive) live in the extractor; an equivalent curated list can
//! be substituted without touching them.

pub(crate) const FOOD: &[&str] = &[
    "food",
    "meal",
    "menu",
    "eat",
    "dining",
    "breakfast",
    "lunch",
    "dinner",
    "snack",
    "cuisine",
    "dish",
    "taste",
    "flavor",
    "delicious",
    "catering",
    "restaurant",
    "cafe",
    "buffet",
    "cold",
    "hot",
    "drinks",
    "beverage",
];

pub(crate) const SERVICE: &[&str] = &[
    "service",
    "staff",
    "waiter",
    "waitress",
    "attendant",
    "employee",
    "customer service",
    "help",
    "assistance",
    "attentive",
    "friendly",
    "professional",
    "responsive",
    "helpful",
    "attitude",
    "server",
];

pub(crate) const FACILITIES: &[&str] = &[
    "facility",
    "facilities",
    "bathroom",
    "toilet",
    "restroom",
    "venue",
    "location",
    "building",
    "infrastructure",
    "clean",
    "maintenance",
    "seating",
    "seat",
    "chair",
    "table",
    "area",
    "space",
    "room",
    "parking",
    "entrance",
    "exit",
    "accessibility",
];

pub(crate) const RACING: &[&str] = &[
    "race",
    "racing",
    "horse",
    "jockey",
    "bet",
    "betting",
    "track",
    "viewing",
    "view",
    "binoculars",
    "odds",
    "winner",
    "finish",
    "program",
    "card",
    "race card",
    "thoroughbred",
    "competition",
];

pub(crate) const VALUE: &[&str] = &[
    "price",
    "cost",
    "expensive",
    "cheap",
    "affordable",
    "value",
    "money",
    "worth",
    "overpriced",
    "reasonable",
    "budget",
    "payment",
    "fee",
    "admission",
    "ticket",
    "spend",
    "dollar",
    "pound",
    "cash",
];

pub(crate) const ATMOSPHERE: &[&str] = &[
    "atmosphere",
    "crowd",
    "ambiance",
    "environment",
    "mood",
    "vibe",
    "energy",
    "exciting",
    "boring",
    "fun",
    "enjoyable",
    "lively",
    "quiet",
    "noisy",
    "pleasant",
    "experience",
    "feel",
];
