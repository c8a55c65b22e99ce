//! Blog configuration (_config.yml)

use anyhow::Result;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main blog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: AuthorConfig,
    pub language: String,
    /// Copyright notice for the feeds; derived from the author and the
    /// current year when absent
    pub copyright: Option<String>,

    // URL
    /// Canonical domain, scheme included
    pub url: String,
    /// Public path pattern for a post; ":slug" is replaced
    pub permalink: String,

    // Directory
    pub posts_dir: String,
    pub public_dir: String,
    /// Subdirectory of the public dir that receives the three feed files
    pub feed_dir: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

/// Blog-level author
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorConfig {
    pub name: String,
    pub link: String,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            title: "A Blog".to_string(),
            description: String::new(),
            author: AuthorConfig::default(),
            language: "en".to_string(),
            copyright: None,

            url: "http://example.com".to_string(),
            permalink: "/:slug".to_string(),

            posts_dir: "_posts".to_string(),
            public_dir: "public".to_string(),
            feed_dir: "rss".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: BlogConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Copyright notice, generated from the author when not configured
    pub fn copyright_notice(&self) -> String {
        self.copyright.clone().unwrap_or_else(|| {
            format!(
                "All rights reserved {}, {}",
                chrono::Utc::now().year(),
                self.author.name
            )
        })
    }
}
