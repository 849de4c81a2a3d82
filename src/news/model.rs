use serde::Serialize;

/// A single feed entry, normalized across source strategies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    /// Display headline (source suffix already stripped for RSS titles).
    pub title: String,
    /// Link to the story.
    pub link: String,
    /// Short display date (e.g. `"Dec 5"`); empty if the feed's date was malformed.
    pub date: String,
    /// Publisher or display domain.
    pub source: String,
    /// Topic category assigned by the categorizer, if any.
    pub category: Option<String>,
}

/// A capped, ordered collection of items assigned to one topic category.
/// Lives for a single render cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBucket {
    /// Category display name.
    pub name: String,
    /// Items in arrival order, at most [`BUCKET_CAP`](crate::news::BUCKET_CAP).
    pub items: Vec<NewsItem>,
}
