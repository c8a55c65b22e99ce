//! List posts

use anyhow::Result;

use crate::content::loader::PostLoader;
use crate::Blog;

/// List posts, newest first
pub async fn run(blog: &Blog) -> Result<()> {
    let loader = PostLoader::new(blog);
    let posts = loader.load_posts().await?;

    println!("Posts ({}):", posts.len());
    for post in posts {
        let date = post
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "no date".to_string());
        let marker = if post.hidden { " [hidden]" } else { "" };
        println!(
            "  {} - {} [{}]{}",
            date,
            post.title.as_deref().unwrap_or(&post.slug),
            post.source,
            marker
        );
    }

    Ok(())
}
