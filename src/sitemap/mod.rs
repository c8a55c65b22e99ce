//! Sitemap builder - sitemap protocol 0.9 XML

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::BlogConfig;
use crate::content::Post;
use crate::helpers::{escape_xml, post_url, root_url};

/// Builds the sitemap document for a post list
pub struct SitemapBuilder<'a> {
    config: &'a BlogConfig,
    posts: &'a [Post],
}

impl<'a> SitemapBuilder<'a> {
    /// Create a new sitemap builder
    pub fn new(config: &'a BlogConfig, posts: &'a [Post]) -> Self {
        Self { config, posts }
    }

    /// Serialize the <urlset> document; the root URL always comes first,
    /// followed by one URL per visible post in input order
    pub fn urlset(&self) -> String {
        let mut out = String::new();
        out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        out.push('\n');
        out.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
        out.push('\n');

        out.push_str(&format!(
            "  <url><loc>{}</loc></url>\n",
            escape_xml(&root_url(self.config))
        ));
        for post in self.posts.iter().filter(|p| !p.hidden) {
            let url = post_url(self.config, &post.slug);
            out.push_str(&format!("  <url><loc>{}</loc></url>\n", escape_xml(&url)));
        }

        out.push_str("</urlset>\n");
        out
    }

    /// Write sitemap.xml into the public directory
    pub fn write(&self, public_dir: &Path) -> Result<()> {
        fs::create_dir_all(public_dir)
            .map_err(|e| anyhow::anyhow!("Failed to create dir {:?}: {}", public_dir, e))?;

        let output_path = public_dir.join("sitemap.xml");
        fs::write(&output_path, self.urlset())
            .map_err(|e| anyhow::anyhow!("Failed to write {:?}: {}", output_path, e))?;

        tracing::info!("Generated sitemap.xml");
        Ok(())
    }
}
