//! Search filtering for catalog lists
//!
//! Case-insensitive substring match, OR-ed across each record's searchable
//! fields. The query is not tokenized and matches keep their original order.

use crate::types::Project;

/// Records that can be matched against a search query
pub trait Searchable {
    /// Fields the query is matched against
    fn search_fields(&self) -> [&str; 4];

    /// `needle` must already be lower-cased
    fn matches(&self, needle: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

impl Searchable for Project {
    fn search_fields(&self) -> [&str; 4] {
        [&self.title, &self.description, &self.category, &self.author]
    }
}

/// Filter records by a search query
pub fn filter_items<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    if query.is_empty() {
        return items.to_vec();
    }

    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches(&needle))
        .cloned()
        .collect()
}
