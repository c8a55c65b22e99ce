//! XML helpers for feed and sitemap serialization

/// Escape XML special characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Strip invalid XML control characters (except tab, newline, carriage return)
/// XML 1.0 only allows: #x9 | #xA | #xD | [#x20-#xD7FF] | [#xE000-#xFFFD] | [#x10000-#x10FFFF]
pub fn strip_invalid_xml_chars(s: &str) -> String {
    s.chars()
        .filter(|&c| {
            c == '\t'
                || c == '\n'
                || c == '\r'
                || ('\u{0020}'..='\u{D7FF}').contains(&c)
                || ('\u{E000}'..='\u{FFFD}').contains(&c)
                || ('\u{10000}'..='\u{10FFFF}').contains(&c)
        })
        .collect()
}

/// Rewrite root-relative href/src attributes in HTML content to absolute URLs
pub fn absolutize_urls(content: &str, base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    content
        .replace("href=\"/", &format!("href=\"{}/", base))
        .replace("src=\"/", &format!("src=\"{}/", base))
        .replace("href='/", &format!("href='{}/", base))
        .replace("src='/", &format!("src='{}/", base))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(
            escape_xml(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&apos;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_strip_invalid_xml_chars() {
        let input = "ok\u{0008}\ttext\u{000B}";
        assert_eq!(strip_invalid_xml_chars(input), "ok\ttext");
    }

    #[test]
    fn test_absolutize_urls() {
        let html = r#"<a href="/about">x</a><img src="/img/a.png">"#;
        let result = absolutize_urls(html, "https://example.com");
        assert!(result.contains(r#"href="https://example.com/about""#));
        assert!(result.contains(r#"src="https://example.com/img/a.png""#));
    }

    #[test]
    fn test_absolutize_leaves_absolute_urls_alone() {
        let html = r#"<a href="https://other.org/page">x</a>"#;
        assert_eq!(absolutize_urls(html, "https://example.com"), html);
    }
}
