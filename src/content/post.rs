//! Post model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blog post, normalized from one markdown file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// URL-safe identifier, the file name minus its extension
    pub slug: String,

    /// Post title
    pub title: Option<String>,

    /// Short description, used for feed summaries
    pub description: Option<String>,

    /// Publication date; absent when the front-matter omits it or the
    /// value does not parse
    pub date: Option<DateTime<Utc>>,

    /// Post author
    pub author: Option<Author>,

    /// Rendered HTML content
    pub content: String,

    /// Hidden posts are loaded but excluded from feeds and the sitemap
    pub hidden: bool,

    /// Source file name
    pub source: String,
}

/// Post author
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Author {
    pub name: Option<String>,
    pub link: Option<String>,
}

impl Post {
    /// Create a new post with only the required fields set
    pub fn new(slug: String, source: String) -> Self {
        Self {
            slug,
            title: None,
            description: None,
            date: None,
            author: None,
            content: String::new(),
            hidden: false,
            source,
        }
    }
}
