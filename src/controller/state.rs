//! List state shared by the catalog controllers
//!
//! Transitions are plain methods so each one can be tested without a remote.

use serde::Serialize;

use crate::types::{Identified, ProjectId};

use super::filter::{Searchable, filter_items};

/// Coarse lifecycle of a list view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
    Failed(String),
}

/// Derives the filtered view from the full list and a query
type Filter<T> = fn(&[T], &str) -> Vec<T>;

/// Items fetched from a collection plus the view derived from the search query.
///
/// `filtered` is always `items` passed through `query`; every transition that
/// touches `items` re-derives it in the same step. A list built with
/// [`ListState::new`] has no search and `filtered` mirrors `items`.
#[derive(Debug, Clone, Serialize)]
pub struct ListState<T> {
    items: Vec<T>,
    filtered: Vec<T>,
    query: String,
    loading: bool,
    error_message: Option<String>,
    #[serde(skip)]
    filter: Option<Filter<T>>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            filtered: Vec::new(),
            query: String::new(),
            loading: true,
            error_message: None,
            filter: None,
        }
    }
}

impl<T: Identified + Clone> ListState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fetch has been issued
    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error_message = None;
    }

    /// The fetch succeeded
    pub fn loaded(&mut self, items: Vec<T>) {
        self.items = items;
        self.refilter();
        self.loading = false;
        self.error_message = None;
    }

    /// The fetch failed; the list stays as it was
    pub fn load_failed(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error_message = Some(message.into());
    }

    /// Remove a record from every view of the list
    pub fn remove(&mut self, id: ProjectId) -> Option<T> {
        let position = self.items.iter().position(|item| item.id() == id)?;
        let removed = self.items.remove(position);
        self.filtered.retain(|item| item.id() != id);
        Some(removed)
    }

    pub fn find(&self, id: ProjectId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    fn refilter(&mut self) {
        self.filtered = match self.filter {
            Some(filter) => filter(&self.items, &self.query),
            None => self.items.clone(),
        };
    }
}

impl<T: Searchable + Identified + Clone> ListState<T> {
    /// An empty list whose filtered view follows a search query
    pub fn searchable() -> Self {
        Self {
            filter: Some(filter_items::<T> as Filter<T>),
            ..Self::default()
        }
    }

    /// Re-derive the filtered view for a new query
    pub fn apply_query(&mut self, query: &str) {
        self.filter = Some(filter_items::<T> as Filter<T>);
        self.query = query.to_string();
        self.refilter();
    }
}

impl<T> ListState<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn filtered(&self) -> &[T] {
        &self.filtered
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn phase(&self) -> LoadPhase {
        match (&self.error_message, self.loading) {
            (_, true) => LoadPhase::Loading,
            (Some(message), false) => LoadPhase::Failed(message.clone()),
            (None, false) => LoadPhase::Ready,
        }
    }
}
