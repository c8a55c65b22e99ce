//! Create a new post

use anyhow::Result;
use std::fs;

use crate::Blog;

/// Create a new post skeleton with pre-filled front-matter
pub fn run(blog: &Blog, title: &str, path: Option<&str>) -> Result<()> {
    fs::create_dir_all(&blog.posts_dir)?;

    let filename = match path {
        Some(p) => format!("{}.md", p),
        None => format!("{}.md", slug::slugify(title)),
    };
    let file_path = blog.posts_dir.join(&filename);

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let now = chrono::Utc::now();
    let content = format!(
        r#"---
title: {}
description: ''
date: {}
author:
  name: {}
  website: {}
---
"#,
        title,
        now.format("%Y-%m-%d %H:%M:%S"),
        blog.config.author.name,
        blog.config.author.link
    );

    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlogConfig;
    use crate::content::FrontMatter;

    fn blog_in(dir: &std::path::Path) -> Blog {
        let mut config = BlogConfig::default();
        config.author.name = "Jane Doe".to_string();
        Blog {
            posts_dir: dir.join(&config.posts_dir),
            public_dir: dir.join(&config.public_dir),
            base_dir: dir.to_path_buf(),
            config,
        }
    }

    #[test]
    fn test_new_post_scaffold_parses() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = blog_in(tmp.path());

        run(&blog, "Hello World", None).unwrap();

        let content = fs::read_to_string(blog.posts_dir.join("hello-world.md")).unwrap();
        let (fm, _) = FrontMatter::parse(&content);
        assert_eq!(fm.title.as_deref(), Some("Hello World"));
        assert!(fm.parse_date().is_some());
        assert_eq!(
            fm.author.unwrap().name.as_deref(),
            Some("Jane Doe")
        );
    }

    #[test]
    fn test_new_post_refuses_to_overwrite() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = blog_in(tmp.path());

        run(&blog, "Hello World", None).unwrap();
        assert!(run(&blog, "Hello World", None).is_err());
    }
}
