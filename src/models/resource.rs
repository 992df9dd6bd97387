//! Resource library types for `/api/resources` and `/api/resources/categories`.

use serde::Deserialize;

/// Characters of resource content shown before the preview is cut off.
pub const PREVIEW_CHARS: usize = 200;

/// A server-owned informational article.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl Resource {
    /// External link, treating an empty string as absent.
    pub fn link(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }

    /// Content shortened to [`PREVIEW_CHARS`] characters with a trailing "...".
    pub fn content_preview(&self) -> String {
        if self.content.chars().count() > PREVIEW_CHARS {
            let head: String = self.content.chars().take(PREVIEW_CHARS).collect();
            format!("{}...", head)
        } else {
            self.content.clone()
        }
    }

    /// Category tag with its first hyphen shown as a space.
    pub fn category_badge(&self) -> String {
        self.category.replacen('-', " ", 1)
    }
}

/// Envelope for `GET /api/resources`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourcesResponse {
    #[serde(default)]
    pub resources: Vec<Resource>,
}

/// Envelope for `GET /api/resources/categories`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub categories: Vec<String>,
}

/// A category filter. `All` is the client-side sentinel for "no filter".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Tag(String),
}

impl CategoryFilter {
    pub const ALL_TAG: &'static str = "all";

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL_TAG,
            CategoryFilter::Tag(tag) => tag,
        }
    }

    /// Server query value, `None` for the unfiltered collection.
    pub fn query_value(&self) -> Option<&str> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Tag(tag) => Some(tag),
        }
    }

    /// Display label: first letter upper-cased, first hyphen as a space.
    pub fn label(&self) -> String {
        let raw = self.as_str();
        let mut chars = raw.chars();
        match chars.next() {
            Some(first) => {
                let rest: String = chars.collect();
                format!("{}{}", first.to_uppercase(), rest.replacen('-', " ", 1))
            }
            None => String::new(),
        }
    }

    /// Build the filter list shown to the user: `All` first, then the
    /// server's tags in order.
    pub fn with_all(tags: Vec<String>) -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(
                tags.into_iter()
                    .filter(|t| t != Self::ALL_TAG)
                    .map(CategoryFilter::Tag),
            )
            .collect()
    }
}

impl From<&str> for CategoryFilter {
    fn from(tag: &str) -> Self {
        if tag.is_empty() || tag == Self::ALL_TAG {
            CategoryFilter::All
        } else {
            CategoryFilter::Tag(tag.to_string())
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
