//! Remove generated artifacts

use anyhow::Result;
use std::fs;

use crate::Blog;

/// Delete the feed directory and the sitemap
///
/// The public directory is shared with the surrounding site, so only the
/// files this tool generates are removed.
pub fn run(blog: &Blog) -> Result<()> {
    let feed_dir = blog.public_dir.join(&blog.config.feed_dir);
    if feed_dir.exists() {
        fs::remove_dir_all(&feed_dir)?;
        tracing::info!("Deleted: {:?}", feed_dir);
    }

    let sitemap_path = blog.public_dir.join("sitemap.xml");
    if sitemap_path.exists() {
        fs::remove_file(&sitemap_path)?;
        tracing::info!("Deleted: {:?}", sitemap_path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlogConfig;

    #[test]
    fn test_clean_leaves_unrelated_files_alone() {
        let tmp = tempfile::tempdir().unwrap();
        let config = BlogConfig::default();
        let blog = Blog {
            posts_dir: tmp.path().join(&config.posts_dir),
            public_dir: tmp.path().join(&config.public_dir),
            base_dir: tmp.path().to_path_buf(),
            config,
        };

        fs::create_dir_all(blog.public_dir.join("rss")).unwrap();
        fs::write(blog.public_dir.join("rss/feed.xml"), "x").unwrap();
        fs::write(blog.public_dir.join("sitemap.xml"), "x").unwrap();
        fs::write(blog.public_dir.join("index.html"), "site").unwrap();

        run(&blog).unwrap();

        assert!(!blog.public_dir.join("rss").exists());
        assert!(!blog.public_dir.join("sitemap.xml").exists());
        assert!(blog.public_dir.join("index.html").exists());
    }

    #[test]
    fn test_clean_is_a_noop_without_artifacts() {
        let tmp = tempfile::tempdir().unwrap();
        let config = BlogConfig::default();
        let blog = Blog {
            posts_dir: tmp.path().join(&config.posts_dir),
            public_dir: tmp.path().join(&config.public_dir),
            base_dir: tmp.path().to_path_buf(),
            config,
        };

        run(&blog).unwrap();
    }
}
