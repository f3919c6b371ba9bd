// ─────────────────────────────────────────────────────────────────────
// RippleTruth — URL Fetch + Article Extraction
// ─────────────────────────────────────────────────────────────────────
//! Blocking HTTP fetch with a bounded timeout, followed by paragraph
//! extraction from the returned HTML.
//!
//! Blocked, missing, rate-limited and failing pages map to `[Error …`
//! sentinels with a reader-facing explanation; a page with no usable
//! paragraphs maps to `[No readable article text found]`.

use std::time::Duration;

use reqwest::blocking::Client;
use rippletruth_types::sentinel::{error_sentinel, no_readable_sentinel};
use rippletruth_types::{RippleConfig, RippleError, RippleResult};
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Elements whose paragraphs are page chrome, not article text.
const SKIPPED_CONTAINERS: &[&str] = &["script", "style", "nav", "footer", "header", "aside"];

/// Trait for URL-to-text backends.
pub trait TextFetcher: Send + Sync {
    /// Fetch `url` and return article text or a sentinel string. Never fails.
    fn fetch_url_text(&self, url: &str) -> String;
}

/// reqwest-backed fetcher.
pub struct HttpFetcher {
    client: Client,
    min_paragraph_chars: usize,
}

impl HttpFetcher {
    pub fn new(config: &RippleConfig) -> RippleResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| RippleError::Fetch(e.to_string()))?;
        Ok(Self {
            client,
            min_paragraph_chars: config.min_paragraph_chars,
        })
    }
}

impl TextFetcher for HttpFetcher {
    fn fetch_url_text(&self, url: &str) -> String {
        let parsed = match parse_http_url(url) {
            Ok(u) => u,
            Err(sentinel) => return sentinel,
        };

        let response = match self.client.get(parsed).send() {
            Ok(r) => r,
            Err(e) if e.is_timeout() => {
                log::warn!("fetch: timeout for {url}");
                return "[Error: connection timeout]\n\n\
                        The site took too long to respond. Try loading it in a browser \
                        first or paste the text instead."
                    .to_string();
            }
            Err(e) => {
                log::warn!("fetch: transport failure for {url}: {e}");
                return error_sentinel(format!("loading URL: {e}"));
            }
        };

        let status = response.status();
        if let Some(sentinel) = status_sentinel(status.as_u16()) {
            log::warn!("fetch: {url} returned {status}");
            return sentinel;
        }
        if !status.is_success() {
            log::warn!("fetch: {url} returned {status}");
            return error_sentinel(format!("HTTP {status}"));
        }

        match response.text() {
            Ok(html) => extract_paragraph_text(&html, self.min_paragraph_chars)
                .unwrap_or_else(|| no_readable_sentinel("article text found")),
            Err(e) => error_sentinel(format!("reading response body: {e}")),
        }
    }
}

/// Accept only absolute http(s) URLs; anything else becomes a sentinel.
pub fn parse_http_url(url: &str) -> Result<Url, String> {
    match Url::parse(url.trim()) {
        Ok(u) if matches!(u.scheme(), "http" | "https") => Ok(u),
        Ok(u) => Err(error_sentinel(format!("unsupported URL scheme '{}'", u.scheme()))),
        Err(e) => Err(error_sentinel(format!("invalid URL: {e}"))),
    }
}

/// Reader-facing sentinel for HTTP statuses that have a known cause.
pub fn status_sentinel(code: u16) -> Option<String> {
    let msg = match code {
        403 => "[Error 403 — Forbidden]\n\n\
                The website rejected the request. It may block automated clients, \
                require a login, or sit behind a firewall. Try a public article or \
                paste the text instead."
            .to_string(),
        404 => "[Error 404 — Not Found]\n\n\
                The webpage does not exist or the link was mistyped."
            .to_string(),
        429 => "[Error 429 — Too Many Requests]\n\n\
                The site is rate-limiting automated requests. Try again in a few \
                minutes or paste the text instead."
            .to_string(),
        500..=599 => format!(
            "[Error {code} — Server Error]\n\n\
             The website is temporarily unavailable."
        ),
        _ => return None,
    };
    Some(msg)
}

fn in_skipped_container(el: &ElementRef<'_>) -> bool {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .any(|a| SKIPPED_CONTAINERS.contains(&a.value().name()))
}

fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Join the `<p>` blocks of `html` that sit outside page chrome and have
/// at least `min_chars` characters. `None` when nothing qualifies.
pub fn extract_paragraph_text(html: &str, min_chars: usize) -> Option<String> {
    let doc = Html::parse_document(html);
    let sel = Selector::parse("p").ok()?;

    let blocks: Vec<String> = doc
        .select(&sel)
        .filter(|p| !in_skipped_container(p))
        .map(|p| normalize_ws(&p.text().collect::<Vec<_>>().join(" ")))
        .filter(|t| t.chars().count() >= min_chars)
        .collect();

    if blocks.is_empty() {
        None
    } else {
        Some(blocks.join("\n\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rippletruth_types::is_sentinel;

    const ARTICLE: &str = r#"
        <html><head><style>p { color: red; }</style></head>
        <body>
          <header><p>Site header paragraph that is long enough to count on its own.</p></header>
          <nav><p>Home | World | Politics | Economy | Sport | Weather | More</p></nav>
          <article>
            <p>The central bank kept interest rates unchanged on Tuesday, citing steady inflation.</p>
            <p>Short.</p>
            <p>Analysts   said the decision was
               widely expected by <b>markets</b> across the region.</p>
          </article>
          <aside><p>Related: ten things you did not know about central banks and rates.</p></aside>
          <footer><p>Copyright notice and legal boilerplate text for the whole site.</p></footer>
        </body></html>"#;

    #[test]
    fn test_extracts_article_paragraphs_only() {
        let text = extract_paragraph_text(ARTICLE, 40).unwrap();
        let blocks: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("The central bank kept interest rates"));
        assert_eq!(
            blocks[1],
            "Analysts said the decision was widely expected by markets across the region."
        );
    }

    #[test]
    fn test_min_chars_filters_everything() {
        assert!(extract_paragraph_text(ARTICLE, 500).is_none());
        let bare = "<html><body><div>no paragraphs</div></body></html>";
        assert!(extract_paragraph_text(bare, 1).is_none());
    }

    #[test]
    fn test_status_sentinels() {
        for code in [403u16, 404, 429, 500, 503] {
            let s = status_sentinel(code).unwrap();
            assert!(is_sentinel(&s), "{code} → {s}");
            assert!(s.contains(&code.to_string()));
        }
        assert!(status_sentinel(200).is_none());
        assert!(status_sentinel(401).is_none());
    }

    #[test]
    fn test_rejects_non_http_urls() {
        assert!(is_sentinel(&parse_http_url("ftp://example.org/a").unwrap_err()));
        assert!(is_sentinel(&parse_http_url("not a url").unwrap_err()));
        assert!(parse_http_url("  https://example.org/news  ").is_ok());
    }

    #[test]
    fn test_invalid_url_never_hits_network() {
        let fetcher = HttpFetcher::new(&RippleConfig::default()).unwrap();
        let out = fetcher.fetch_url_text("example.org/no-scheme");
        assert!(out.starts_with("[Error: invalid URL"));
    }
}
