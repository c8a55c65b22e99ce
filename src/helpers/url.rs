//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::BlogConfig;

/// Characters escaped inside a URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}');

/// Public URL path for a post slug
///
/// # Examples
/// ```ignore
/// path_for_slug(&config, "hello-world") // -> "/hello-world"
/// ```
pub fn path_for_slug(config: &BlogConfig, slug: &str) -> String {
    let encoded = utf8_percent_encode(slug, PATH_SEGMENT).to_string();
    let path = config.permalink.replace(":slug", &encoded);
    if path.starts_with('/') {
        path
    } else {
        format!("/{}", path)
    }
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/hello-world") // -> "https://example.com/hello-world"
/// ```
pub fn full_url_for(config: &BlogConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Absolute URL of the site root, with a trailing slash
pub fn root_url(config: &BlogConfig) -> String {
    format!("{}/", config.url.trim_end_matches('/'))
}

/// Absolute URL for a post
pub fn post_url(config: &BlogConfig, slug: &str) -> String {
    full_url_for(config, &path_for_slug(config, slug))
}
