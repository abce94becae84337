use regex::{Captures, Regex};
use std::sync::LazyLock;
use url::Url;

/// Everything up to the last `https` in a link
static REDIRECT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^.*(https)").expect("redirect prefix pattern is valid"));

/// `href` attribute of an `<a>` start tag; `data-href` and text are not matched
static HREF_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(<a\b[^>]*?\s)href="([^"]*)""#).expect("href pattern is valid")
});

/// Strips a redirect wrapper so the link starts at the destination's own scheme.
///
/// `/url?q=https://example.com` becomes `https://example.com`. Links without
/// `https` in them are returned unchanged, and applying this twice changes
/// nothing further.
pub fn normalize_link(href: &str) -> String {
    REDIRECT_PREFIX.replace(href, "$1").into_owned()
}

/// Normalizes `href` and makes it absolute against `base`.
///
/// Absolute links are kept verbatim (no re-serialization, so no trailing
/// slash gets appended). Returns `None` for links that cannot be resolved.
pub fn resolve_link(href: &str, base: &Url) -> Option<String> {
    let normalized = normalize_link(href.trim());
    if normalized.is_empty() {
        return None;
    }

    match Url::parse(&normalized) {
        Ok(_) => Some(normalized),
        Err(url::ParseError::RelativeUrlWithoutBase) => match base.join(&normalized) {
            Ok(joined) => Some(joined.to_string()),
            Err(e) => {
                ::log::debug!("Could not resolve link {}: {}", normalized, e);
                None
            }
        },
        Err(e) => {
            ::log::debug!("Rejecting malformed link {}: {}", normalized, e);
            None
        }
    }
}

/// Applies [`normalize_link`] to every link `href` in `markup`
pub fn rewrite_hrefs(markup: &str) -> String {
    HREF_ATTRIBUTE
        .replace_all(markup, |caps: &Captures| {
            format!("{}href=\"{}\"", &caps[1], normalize_link(&caps[2]))
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://www.google.com/").unwrap()
    }

    #[test]
    fn test_normalize_strips_redirect_wrapper() {
        assert_eq!(
            normalize_link("/url?q=https://example.com"),
            "https://example.com"
        );
        assert_eq!(
            normalize_link("https://www.google.com/url?q=https://rust-lang.org/learn&sa=U"),
            "https://rust-lang.org/learn&sa=U"
        );
    }

    #[test]
    fn test_normalize_without_https_is_unchanged() {
        assert_eq!(normalize_link("/search?q=rust"), "/search?q=rust");
        assert_eq!(normalize_link("http://plain.example"), "http://plain.example");
        assert_eq!(normalize_link(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "/url?q=https://example.com",
            "https://example.com",
            "/url?q=https://a.example/?next=https://b.example",
            "/search?q=nothing",
            "line\nbreak https://x.example",
        ];

        for sample in samples {
            let once = normalize_link(sample);
            assert_eq!(normalize_link(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_resolve_keeps_absolute_links_verbatim() {
        assert_eq!(
            resolve_link("/url?q=https://example.com", &base()).as_deref(),
            Some("https://example.com")
        );
        assert_eq!(
            resolve_link("http://plain.example", &base()).as_deref(),
            Some("http://plain.example")
        );
    }

    #[test]
    fn test_resolve_joins_relative_links() {
        assert_eq!(
            resolve_link("/search?q=rust", &base()).as_deref(),
            Some("https://www.google.com/search?q=rust")
        );
        assert_eq!(resolve_link("   ", &base()), None);
    }

    #[test]
    fn test_rewrite_hrefs_in_markup() {
        let markup = r#"<div><a href="/url?q=https://example.com">x</a><a href="/images">y</a></div>"#;
        assert_eq!(
            rewrite_hrefs(markup),
            r#"<div><a href="https://example.com">x</a><a href="/images">y</a></div>"#
        );
    }

    #[test]
    fn test_rewrite_hrefs_leaves_lookalikes() {
        let markup = concat!(
            r#"<div><a class="r" data-href="/url?q=https://x.example" href="/url?q=https://y.example">y</a>"#,
            r#"<p>href="/url?q=https://z.example"</p></div>"#
        );
        assert_eq!(
            rewrite_hrefs(markup),
            concat!(
                r#"<div><a class="r" data-href="/url?q=https://x.example" href="https://y.example">y</a>"#,
                r#"<p>href="/url?q=https://z.example"</p></div>"#
            )
        );
    }
}
