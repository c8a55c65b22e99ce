//! Post loader - loads posts from the posts directory

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use walkdir::WalkDir;

use super::{Author, FrontMatter, MarkdownRenderer, Post};
use crate::Blog;

/// Fatal loader failures
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("posts directory not found: {0:?}")]
    MissingPostsDir(PathBuf),

    #[error("failed to read post {path:?}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Loads posts from the posts directory
pub struct PostLoader {
    posts_dir: PathBuf,
    renderer: Arc<MarkdownRenderer>,
}

impl PostLoader {
    /// Create a new post loader
    pub fn new(blog: &Blog) -> Self {
        Self {
            posts_dir: blog.posts_dir.clone(),
            renderer: Arc::new(MarkdownRenderer::new()),
        }
    }

    /// Load all posts, sorted by date descending (newest first)
    ///
    /// File reads run concurrently and are joined in file name order, so
    /// the final stable sort keeps a deterministic order for equal dates.
    pub async fn load_posts(&self) -> Result<Vec<Post>> {
        if !self.posts_dir.exists() {
            return Err(LoadError::MissingPostsDir(self.posts_dir.clone()).into());
        }

        // Only the top level of the posts directory is considered
        let mut paths: Vec<PathBuf> = WalkDir::new(&self.posts_dir)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file() && is_markdown_file(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect();
        paths.sort();

        // Fire-and-collect: every file is independent, order is reconciled
        // when the handles are joined
        let mut handles = Vec::with_capacity(paths.len());
        for path in paths {
            let renderer = Arc::clone(&self.renderer);
            handles.push(tokio::task::spawn_blocking(move || {
                load_post(&path, &renderer)
            }));
        }

        let mut posts = Vec::with_capacity(handles.len());
        for handle in handles {
            posts.push(handle.await??);
        }

        // Undated posts compare lowest and end up after every dated post
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(posts)
    }
}

/// Load a single post from a file
fn load_post(path: &Path, renderer: &MarkdownRenderer) -> Result<Post> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let (fm, body) = FrontMatter::parse(&content);

    let slug = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled")
        .to_string();

    let source = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string();

    let date = fm.parse_date();
    if date.is_none() && fm.date.is_some() {
        tracing::warn!("Unparseable date in {:?}: {:?}", path, fm.date);
    }

    let content_html = renderer.render(body)?;

    let mut post = Post::new(slug, source);
    post.title = fm.title;
    post.description = fm.description;
    post.date = date;
    post.author = fm.author.map(|a| Author {
        name: a.name,
        link: a.website,
    });
    post.content = content_html;
    post.hidden = fm.hidden;

    Ok(post)
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlogConfig;

    fn blog_in(dir: &Path) -> Blog {
        let config = BlogConfig::default();
        Blog {
            posts_dir: dir.join(&config.posts_dir),
            public_dir: dir.join(&config.public_dir),
            base_dir: dir.to_path_buf(),
            config,
        }
    }

    fn write_post(dir: &Path, name: &str, front: &str, body: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(name), format!("---\n{}---\n\n{}\n", front, body)).unwrap();
    }

    #[tokio::test]
    async fn test_load_posts_sorted_by_date_descending() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = blog_in(tmp.path());

        write_post(
            &blog.posts_dir,
            "older.md",
            "title: Older\ndate: 2021-01-01\n",
            "First.",
        );
        write_post(
            &blog.posts_dir,
            "newer.md",
            "title: Newer\ndate: 2021-01-02\n",
            "Second.",
        );

        let posts = PostLoader::new(&blog).load_posts().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].slug, "newer");
        assert_eq!(posts[1].slug, "older");
    }

    #[tokio::test]
    async fn test_one_record_per_file_with_matching_slugs() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = blog_in(tmp.path());

        for name in ["a.md", "b.md", "c.markdown"] {
            write_post(&blog.posts_dir, name, "date: 2021-01-01\n", "Body.");
        }
        // Non-markdown files are ignored
        fs::write(blog.posts_dir.join("notes.txt"), "ignored").unwrap();

        let posts = PostLoader::new(&blog).load_posts().await.unwrap();
        let mut slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        slugs.sort();
        assert_eq!(slugs, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_missing_posts_dir_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = blog_in(tmp.path());

        let err = PostLoader::new(&blog).load_posts().await.unwrap_err();
        assert!(err.to_string().contains("posts directory not found"));
    }

    #[tokio::test]
    async fn test_undated_posts_sort_last() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = blog_in(tmp.path());

        write_post(&blog.posts_dir, "undated.md", "title: Undated\n", "Body.");
        write_post(
            &blog.posts_dir,
            "dated.md",
            "title: Dated\ndate: 2021-01-01\n",
            "Body.",
        );

        let posts = PostLoader::new(&blog).load_posts().await.unwrap();
        assert_eq!(posts[0].slug, "dated");
        assert_eq!(posts[1].slug, "undated");
        assert!(posts[1].date.is_none());
    }

    #[tokio::test]
    async fn test_author_restructured_and_body_rendered() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = blog_in(tmp.path());

        write_post(
            &blog.posts_dir,
            "post.md",
            "title: Post\ndate: 2021-01-01\nauthor:\n  name: Jane Doe\n  website: https://example.com\n",
            "# Heading",
        );

        let posts = PostLoader::new(&blog).load_posts().await.unwrap();
        let author = posts[0].author.as_ref().unwrap();
        assert_eq!(author.name.as_deref(), Some("Jane Doe"));
        assert_eq!(author.link.as_deref(), Some("https://example.com"));
        assert!(posts[0].content.contains("<h1>Heading</h1>"));
    }

    #[tokio::test]
    async fn test_hidden_posts_are_loaded() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = blog_in(tmp.path());

        write_post(
            &blog.posts_dir,
            "secret.md",
            "title: Secret\ndate: 2021-01-01\nhidden: true\n",
            "Body.",
        );

        let posts = PostLoader::new(&blog).load_posts().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert!(posts[0].hidden);
    }
}
