//! Topical categories and the keyword table driving classification.

use std::fmt;

/// Closed set of topical labels. Declaration order is classification
/// precedence; output order sorts by [`Category::name`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Music,
    Cars,
    Tech,
    News,
    Gaming,
    Food,
    Finance,
    Travel,
    /// Catch-all for descriptions matching no keyword set.
    Other,
}

impl Category {
    /// All categories, including the catch-all.
    pub const ALL: [Category; 9] = [
        Category::Music,
        Category::Cars,
        Category::Tech,
        Category::News,
        Category::Gaming,
        Category::Food,
        Category::Finance,
        Category::Travel,
        Category::Other,
    ];

    /// Categories tested during classification, in precedence order.
    /// The first category with a keyword match wins; `Other` is never
    /// tested, only assigned when nothing matches.
    pub const PRECEDENCE: [Category; 8] = [
        Category::Music,
        Category::Cars,
        Category::Tech,
        Category::News,
        Category::Gaming,
        Category::Food,
        Category::Finance,
        Category::Travel,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Music => "music",
            Category::Cars => "cars",
            Category::Tech => "tech",
            Category::News => "news",
            Category::Gaming => "gaming",
            Category::Food => "food",
            Category::Finance => "finance",
            Category::Travel => "travel",
            Category::Other => "other",
        }
    }

    /// Lowercase substrings that route a description to this category.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Music => &["music", "song", "piano", "band", "guitar", "singer", "artist"],
            Category::Cars => &["car", "auto", "drive", "bmw", "mechanic", "garage"],
            Category::Tech => &[
                "code",
                "program",
                "software",
                "developer",
                "tech",
                "algorithm",
                "python",
            ],
            Category::News => &["news", "cnn", "cbc", "report", "journalist"],
            Category::Gaming => &["game", "gamer", "gaming", "minecraft", "esports"],
            Category::Food => &["food", "cook", "chef", "kitchen", "recipe"],
            Category::Finance => &["finance", "money", "invest", "stock", "trading"],
            Category::Travel => &["travel", "vlog", "adventure", "explore"],
            Category::Other => &[],
        }
    }

    /// Substring match against an already-lowercased description.
    pub fn matches(self, description_lower: &str) -> bool {
        self.keywords()
            .iter()
            .any(|kw| description_lower.contains(kw))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
