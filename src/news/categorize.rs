//! Topic categorization: an explicit ordered rule list with a deterministic
//! first-match rule, kept separate from fetching and rendering.

use crate::news::model::{CategoryBucket, NewsItem};

/// Maximum number of items a bucket will accept; later matches are dropped.
pub const BUCKET_CAP: usize = 5;

/// One `(category, keywords)` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRule {
    /// Category display name.
    pub name: String,
    /// Keyword substrings; a headline matches on the keyword verbatim or lowercased.
    pub keywords: Vec<String>,
}

impl CategoryRule {
    /// Convenience constructor.
    pub fn new(name: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        }
    }

    fn matches(&self, text: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| text.contains(k.as_str()) || text.contains(&k.to_lowercase()))
    }
}

/// Ordered rule list; rule order is also the bucket display order.
#[derive(Debug, Clone)]
pub struct Categorizer {
    rules: Vec<CategoryRule>,
}

impl Default for Categorizer {
    fn default() -> Self {
        Self {
            rules: vec![
                CategoryRule::new("OpenAI", &["OpenAI", "ChatGPT", "Sam Altman", "O1"]),
                CategoryRule::new("Anthropic", &["Anthropic", "Claude"]),
                CategoryRule::new("Gemini", &["Gemini", "Google DeepMind", "Google AI"]),
                CategoryRule::new("xAI", &["xAI", "Grok", "Elon Musk"]),
                CategoryRule::new("Tesla", &["Tesla", "Cybertruck", "Optimus"]),
                CategoryRule::new("SpaceX", &["SpaceX", "Starship", "Falcon"]),
            ],
        }
    }
}

impl Categorizer {
    /// Build a categorizer from an explicit rule list.
    #[must_use]
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    /// The rule names, in display order.
    #[must_use]
    pub fn category_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name.as_str()).collect()
    }

    /// Assign a category to a headline: rules are tested in order and the
    /// first matching rule wins, even if later rules would also match.
    /// Returns `None` for an unmatched headline.
    #[must_use]
    pub fn assign(&self, text: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|r| r.matches(text))
            .map(|r| r.name.as_str())
    }

    /// Group pre-categorized items into buckets, in rule order.
    ///
    /// Each bucket caps at [`BUCKET_CAP`]; an item matching an already-full
    /// category is dropped, never reassigned. Unmatched items are dropped.
    /// Empty buckets are omitted from the result.
    #[must_use]
    pub fn bucketize(&self, items: &[NewsItem]) -> Vec<CategoryBucket> {
        let mut buckets: Vec<CategoryBucket> = self
            .rules
            .iter()
            .map(|r| CategoryBucket {
                name: r.name.clone(),
                items: Vec::new(),
            })
            .collect();

        for item in items {
            let Some(cat) = item.category.as_deref() else {
                continue;
            };
            if let Some(bucket) = buckets.iter_mut().find(|b| b.name == cat)
                && bucket.items.len() < BUCKET_CAP
            {
                bucket.items.push(item.clone());
            }
        }

        buckets.retain(|b| !b.items.is_empty());
        buckets
    }
}
