//! Feed builder - RSS 2.0, Atom, and JSON Feed documents

use anyhow::Result;
use chrono::Utc;
use std::fs;
use std::path::Path;

use crate::config::BlogConfig;
use crate::content::{Author, Post};
use crate::helpers::{
    absolutize_urls, escape_xml, full_url_for, post_url, root_url, strip_invalid_xml_chars,
};

/// Generator tag advertised in the feed documents
const GENERATOR: &str = concat!("feedsmith ", env!("CARGO_PKG_VERSION"));

/// Builds the three syndication documents for a post list
///
/// Hidden posts are dropped at construction so every document sees the same
/// item list; item order matches the input order.
pub struct FeedBuilder<'a> {
    config: &'a BlogConfig,
    posts: Vec<&'a Post>,
}

impl<'a> FeedBuilder<'a> {
    /// Create a feed builder over the visible posts
    pub fn new(config: &'a BlogConfig, posts: &'a [Post]) -> Self {
        let posts = posts.iter().filter(|p| !p.hidden).collect();
        Self { config, posts }
    }

    /// Serialize the RSS 2.0 document
    pub fn rss2(&self) -> String {
        let mut out = String::new();
        out.push_str(r#"<?xml version="1.0" encoding="utf-8"?>"#);
        out.push('\n');
        out.push_str(concat!(
            r#"<rss version="2.0" xmlns:dc="http://purl.org/dc/elements/1.1/""#,
            r#" xmlns:content="http://purl.org/rss/1.0/modules/content/""#,
            r#" xmlns:atom="http://www.w3.org/2005/Atom">"#
        ));
        out.push('\n');
        out.push_str("  <channel>\n");
        out.push_str(&format!(
            "    <title>{}</title>\n",
            escape_xml(&self.config.title)
        ));
        out.push_str(&format!("    <link>{}</link>\n", root_url(self.config)));
        out.push_str(&format!(
            "    <description>{}</description>\n",
            escape_xml(&self.config.description)
        ));
        out.push_str(&format!(
            "    <lastBuildDate>{}</lastBuildDate>\n",
            Utc::now().to_rfc2822()
        ));
        out.push_str("    <docs>https://validator.w3.org/feed/docs/rss2.html</docs>\n");
        out.push_str(&format!("    <generator>{}</generator>\n", GENERATOR));
        out.push_str(&format!(
            "    <language>{}</language>\n",
            escape_xml(&self.config.language)
        ));
        out.push_str(&format!(
            "    <copyright>{}</copyright>\n",
            escape_xml(&self.config.copyright_notice())
        ));
        out.push_str(&format!(
            "    <atom:link href=\"{}\" rel=\"self\" type=\"application/rss+xml\"/>\n",
            self.feed_url("feed.xml")
        ));

        for post in &self.posts {
            let url = post_url(self.config, &post.slug);
            out.push_str("    <item>\n");
            if let Some(title) = &post.title {
                out.push_str(&format!("      <title>{}</title>\n", escape_xml(title)));
            }
            out.push_str(&format!("      <link>{}</link>\n", url));
            out.push_str(&format!("      <guid>{}</guid>\n", url));
            if let Some(date) = post.date {
                out.push_str(&format!("      <pubDate>{}</pubDate>\n", date.to_rfc2822()));
            }
            if let Some(description) = &post.description {
                out.push_str(&format!(
                    "      <description>{}</description>\n",
                    escape_xml(description)
                ));
            }
            if let Some(name) = post.author.as_ref().and_then(|a| a.name.as_deref()) {
                out.push_str(&format!(
                    "      <dc:creator>{}</dc:creator>\n",
                    escape_xml(name)
                ));
            }
            out.push_str(&format!(
                "      <content:encoded><![CDATA[{}]]></content:encoded>\n",
                self.item_content(post)
            ));
            out.push_str("    </item>\n");
        }

        out.push_str("  </channel>\n");
        out.push_str("</rss>\n");
        out
    }

    /// Serialize the Atom 1.0 document
    pub fn atom1(&self) -> String {
        let mut out = String::new();
        out.push_str(r#"<?xml version="1.0" encoding="utf-8"?>"#);
        out.push('\n');
        out.push_str(r#"<feed xmlns="http://www.w3.org/2005/Atom">"#);
        out.push('\n');
        out.push_str(&format!("  <id>{}</id>\n", root_url(self.config)));
        out.push_str(&format!(
            "  <title>{}</title>\n",
            escape_xml(&self.config.title)
        ));
        out.push_str(&format!(
            "  <subtitle>{}</subtitle>\n",
            escape_xml(&self.config.description)
        ));
        out.push_str(&format!("  <link href=\"{}\"/>\n", root_url(self.config)));
        out.push_str(&format!(
            "  <link href=\"{}\" rel=\"self\"/>\n",
            self.feed_url("atom.xml")
        ));
        out.push_str(&format!("  <updated>{}</updated>\n", Utc::now().to_rfc3339()));
        out.push_str(&format!("  <generator>{}</generator>\n", GENERATOR));
        out.push_str(&format!(
            "  <rights>{}</rights>\n",
            escape_xml(&self.config.copyright_notice())
        ));
        out.push_str("  <author>\n");
        out.push_str(&format!(
            "    <name>{}</name>\n",
            escape_xml(&self.config.author.name)
        ));
        if !self.config.author.link.is_empty() {
            out.push_str(&format!(
                "    <uri>{}</uri>\n",
                escape_xml(&self.config.author.link)
            ));
        }
        out.push_str("  </author>\n");

        for post in &self.posts {
            let url = post_url(self.config, &post.slug);
            out.push_str("  <entry>\n");
            out.push_str(&format!(
                "    <title>{}</title>\n",
                escape_xml(post.title.as_deref().unwrap_or(&post.slug))
            ));
            out.push_str(&format!("    <id>{}</id>\n", url));
            out.push_str(&format!("    <link href=\"{}\"/>\n", url));
            // Atom requires an updated stamp on every entry
            let stamp = post.date.unwrap_or_else(Utc::now);
            out.push_str(&format!(
                "    <published>{}</published>\n",
                stamp.to_rfc3339()
            ));
            out.push_str(&format!("    <updated>{}</updated>\n", stamp.to_rfc3339()));
            if let Some(description) = &post.description {
                out.push_str(&format!(
                    "    <summary>{}</summary>\n",
                    escape_xml(description)
                ));
            }
            if let Some(author) = &post.author {
                push_person(&mut out, "author", author);
                push_person(&mut out, "contributor", author);
            }
            out.push_str(&format!(
                "    <content type=\"html\"><![CDATA[{}]]></content>\n",
                self.item_content(post)
            ));
            out.push_str("  </entry>\n");
        }

        out.push_str("</feed>\n");
        out
    }

    /// Serialize the JSON Feed document
    pub fn json1(&self) -> Result<String> {
        let items: Vec<serde_json::Value> = self
            .posts
            .iter()
            .map(|post| {
                let url = post_url(self.config, &post.slug);
                let mut item = serde_json::Map::new();
                item.insert("id".into(), url.clone().into());
                item.insert("url".into(), url.into());
                if let Some(title) = &post.title {
                    item.insert("title".into(), title.clone().into());
                }
                if let Some(description) = &post.description {
                    item.insert("summary".into(), description.clone().into());
                }
                item.insert("content_html".into(), post.content.clone().into());
                if let Some(date) = post.date {
                    item.insert("date_published".into(), date.to_rfc3339().into());
                }
                if let Some(author) = &post.author {
                    let mut person = serde_json::Map::new();
                    if let Some(name) = &author.name {
                        person.insert("name".into(), name.clone().into());
                    }
                    if let Some(link) = &author.link {
                        person.insert("url".into(), link.clone().into());
                    }
                    item.insert("author".into(), person.into());
                }
                serde_json::Value::Object(item)
            })
            .collect();

        let doc = serde_json::json!({
            "version": "https://jsonfeed.org/version/1",
            "title": self.config.title,
            "home_page_url": root_url(self.config),
            "feed_url": self.feed_url("feed.json"),
            "description": self.config.description,
            "author": {
                "name": self.config.author.name,
                "url": self.config.author.link,
            },
            "items": items,
        });

        Ok(serde_json::to_string_pretty(&doc)?)
    }

    /// Write feed.xml, atom.xml, and feed.json under the public directory
    pub fn write_all(&self, public_dir: &Path) -> Result<()> {
        let feed_dir = public_dir.join(&self.config.feed_dir);
        fs::create_dir_all(&feed_dir)
            .map_err(|e| anyhow::anyhow!("Failed to create dir {:?}: {}", feed_dir, e))?;

        for (name, body) in [
            ("feed.xml", self.rss2()),
            ("atom.xml", self.atom1()),
            ("feed.json", self.json1()?),
        ] {
            let output_path = feed_dir.join(name);
            fs::write(&output_path, body)
                .map_err(|e| anyhow::anyhow!("Failed to write {:?}: {}", output_path, e))?;
            tracing::debug!("Generated: {:?}", output_path);
        }

        tracing::info!("Generated {} feed items in {:?}", self.posts.len(), feed_dir);
        Ok(())
    }

    /// Item content with relative links made absolute and control
    /// characters stripped
    fn item_content(&self, post: &Post) -> String {
        let absolute = absolutize_urls(&post.content, &self.config.url);
        strip_invalid_xml_chars(&absolute)
    }

    /// Absolute URL of one of the generated feed files
    fn feed_url(&self, name: &str) -> String {
        let dir = self.config.feed_dir.trim_matches('/');
        full_url_for(self.config, &format!("/{}/{}", dir, name))
    }
}

/// Append an Atom person construct
fn push_person(out: &mut String, tag: &str, author: &Author) {
    out.push_str(&format!("    <{}>\n", tag));
    out.push_str(&format!(
        "      <name>{}</name>\n",
        escape_xml(author.name.as_deref().unwrap_or(""))
    ));
    if let Some(link) = &author.link {
        out.push_str(&format!("      <uri>{}</uri>\n", escape_xml(link)));
    }
    out.push_str(&format!("    </{}>\n", tag));
}
