//! Resource browser: category filter, fetched list and selection.

use crate::models::{CategoryFilter, Resource};

use super::sequence::{RequestSequence, RequestToken};

#[derive(Debug, Clone)]
pub struct ResourcesState {
    categories: Vec<CategoryFilter>,
    selected_category: CategoryFilter,
    resources: Vec<Resource>,
    selected_resource: usize,
    seq: RequestSequence,
    loading: bool,
}

impl Default for ResourcesState {
    fn default() -> Self {
        Self {
            categories: vec![CategoryFilter::All],
            selected_category: CategoryFilter::All,
            resources: Vec::new(),
            selected_resource: 0,
            seq: RequestSequence::new(),
            loading: false,
        }
    }
}

impl ResourcesState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories(&self) -> &[CategoryFilter] {
        &self.categories
    }

    pub fn selected_category(&self) -> &CategoryFilter {
        &self.selected_category
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Replace the filter list. `All` is always first.
    pub fn set_categories(&mut self, categories: Vec<CategoryFilter>) {
        let mut list = vec![CategoryFilter::All];
        list.extend(categories.into_iter().filter(|c| *c != CategoryFilter::All));
        self.categories = list;
    }

    /// Select a category and issue the token for the fetch it triggers.
    pub fn select_category(&mut self, category: CategoryFilter) -> RequestToken {
        self.selected_category = category;
        self.loading = true;
        self.seq.issue()
    }

    fn category_index(&self) -> Option<usize> {
        self.categories
            .iter()
            .position(|c| *c == self.selected_category)
    }

    fn step_category(&mut self, forward: bool) -> Option<(CategoryFilter, RequestToken)> {
        let len = self.categories.len();
        if len < 2 {
            return None;
        }
        let next = match (self.category_index(), forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            (None, _) => 0,
        };
        let category = self.categories[next].clone();
        let token = self.select_category(category.clone());
        Some((category, token))
    }

    /// Move to the next filter, wrapping. Returns the filter and token to fetch with.
    pub fn next_category(&mut self) -> Option<(CategoryFilter, RequestToken)> {
        self.step_category(true)
    }

    pub fn prev_category(&mut self) -> Option<(CategoryFilter, RequestToken)> {
        self.step_category(false)
    }

    /// Apply a fetched list if `token` is the latest issued.
    pub fn apply_resources(&mut self, token: RequestToken, resources: Vec<Resource>) -> bool {
        if !self.seq.is_latest(token) {
            return false;
        }
        self.resources = resources;
        self.selected_resource = 0;
        self.loading = false;
        true
    }

    /// A fetch failed. The previous list stays; only the latest fetch
    /// clears the loading flag. Returns whether `token` was the latest.
    pub fn fetch_failed(&mut self, token: RequestToken) -> bool {
        if !self.seq.is_latest(token) {
            return false;
        }
        self.loading = false;
        true
    }

    /// Token of the most recent resources fetch, if any.
    pub fn latest_request(&self) -> Option<RequestToken> {
        self.seq.latest()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_resource
    }

    pub fn selected_resource(&self) -> Option<&Resource> {
        self.resources.get(self.selected_resource)
    }

    pub fn select_next_resource(&mut self) {
        if self.selected_resource + 1 < self.resources.len() {
            self.selected_resource += 1;
        }
    }

    pub fn select_prev_resource(&mut self) {
        self.selected_resource = self.selected_resource.saturating_sub(1);
    }
}
