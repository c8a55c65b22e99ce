//! Build the feeds and sitemap

use anyhow::Result;

use crate::content::loader::PostLoader;
use crate::feed::FeedBuilder;
use crate::sitemap::SitemapBuilder;
use crate::Blog;

/// Generate all output artifacts
pub async fn run(blog: &Blog) -> Result<()> {
    let start = std::time::Instant::now();

    let loader = PostLoader::new(blog);
    let posts = loader.load_posts().await?;

    tracing::info!("Loaded {} posts", posts.len());

    let feeds = FeedBuilder::new(&blog.config, &posts);
    feeds.write_all(&blog.public_dir)?;

    let sitemap = SitemapBuilder::new(&blog.config, &posts);
    sitemap.write(&blog.public_dir)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlogConfig;
    use std::fs;

    #[tokio::test]
    async fn test_build_writes_all_artifacts() {
        let tmp = tempfile::tempdir().unwrap();
        let config = BlogConfig {
            url: "https://example.com".to_string(),
            ..Default::default()
        };
        let blog = Blog {
            posts_dir: tmp.path().join(&config.posts_dir),
            public_dir: tmp.path().join(&config.public_dir),
            base_dir: tmp.path().to_path_buf(),
            config,
        };

        fs::create_dir_all(&blog.posts_dir).unwrap();
        fs::write(
            blog.posts_dir.join("hello-world.md"),
            "---\ntitle: Hello World\ndate: 2021-01-02\n---\n\nHi.\n",
        )
        .unwrap();

        run(&blog).await.unwrap();

        for artifact in ["rss/feed.xml", "rss/atom.xml", "rss/feed.json", "sitemap.xml"] {
            assert!(blog.public_dir.join(artifact).exists(), "{}", artifact);
        }

        let sitemap = fs::read_to_string(blog.public_dir.join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("https://example.com/hello-world"));
    }

    #[tokio::test]
    async fn test_build_fails_without_posts_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let config = BlogConfig::default();
        let blog = Blog {
            posts_dir: tmp.path().join(&config.posts_dir),
            public_dir: tmp.path().join(&config.public_dir),
            base_dir: tmp.path().to_path_buf(),
            config,
        };

        assert!(run(&blog).await.is_err());
    }
}
