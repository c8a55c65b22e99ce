//! feedsmith: feed and sitemap generation for markdown blogs
//!
//! This crate reads a directory of markdown posts with YAML front-matter,
//! renders each body to HTML, and emits RSS 2.0, Atom, and JSON Feed
//! documents plus a sitemap into the public directory of the surrounding
//! site.

pub mod commands;
pub mod config;
pub mod content;
pub mod feed;
pub mod helpers;
pub mod sitemap;

use anyhow::Result;
use std::path::Path;

/// The main blog handle
#[derive(Clone)]
pub struct Blog {
    /// Blog configuration
    pub config: config::BlogConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Posts (content) directory
    pub posts_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl Blog {
    /// Create a new blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::BlogConfig::load(&config_path)?
        } else {
            config::BlogConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
            public_dir,
        })
    }

    /// Generate the feeds and sitemap
    pub async fn build(&self) -> Result<()> {
        commands::build::run(self).await
    }

    /// Remove generated artifacts from the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
