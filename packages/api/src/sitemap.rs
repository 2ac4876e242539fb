//! # Sitemap generation
//!
//! [`generate`] turns the static page list plus the configured content items
//! into [`SitemapEntry`] values; [`to_xml`] renders them as a sitemaps.org
//! `urlset` document. The web server serves the result at `/sitemap.xml`.
//!
//! Static pages are stamped with the generation date. Content items use their
//! configured `updated` date when it parses as `YYYY-MM-DD`, otherwise the
//! generation date.

use chrono::NaiveDate;
use store::config::SitemapConfig;

/// Public pages and their priority.
pub const STATIC_PAGES: &[(&str, f32)] = &[
    ("/", 1.0),
    ("/pricing", 0.9),
    ("/team", 0.8),
    ("/leadership", 0.7),
    ("/faq", 0.6),
    ("/login", 0.3),
];

/// Priority of every content item.
pub const ITEM_PRIORITY: f32 = 0.7;

#[derive(Clone, Debug, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: NaiveDate,
    pub priority: f32,
}

/// Generation date for a sitemap served now.
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Build the entry list for `base_url` (no trailing slash).
pub fn generate(base_url: &str, content: &SitemapConfig, today: NaiveDate) -> Vec<SitemapEntry> {
    let base_url = base_url.trim_end_matches('/');

    let pages = STATIC_PAGES.iter().map(|(path, priority)| SitemapEntry {
        url: format!("{base_url}{path}"),
        last_modified: today,
        priority: *priority,
    });

    let prefix = content.item_prefix.trim_end_matches('/');
    let items = content.items.iter().map(|item| {
        let last_modified = item
            .updated
            .as_deref()
            .and_then(|d| match NaiveDate::parse_from_str(d, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    tracing::warn!("Ignoring invalid updated date {d:?} for {}", item.slug);
                    None
                }
            })
            .unwrap_or(today);
        SitemapEntry {
            url: format!("{base_url}{prefix}/{}", item.slug.trim_matches('/')),
            last_modified,
            priority: ITEM_PRIORITY,
        }
    });

    pages.chain(items).collect()
}

/// Render entries as a sitemaps.org XML document.
pub fn to_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape(&entry.url)));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            entry.last_modified.format("%Y-%m-%d")
        ));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
