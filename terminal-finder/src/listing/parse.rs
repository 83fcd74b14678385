//! Listing page parsing.
//!
//! The listing groups terminals by region under
//! `div[data-scrollspy-content=<region>]`. Each terminal is an
//! `li.text-sm` inside a `div.ft-area-terminal`, with its name in
//! `span.pe-2` and a "시간표" (timetable) link.

use scraper::{ElementRef, Html, Selector};

use super::error::ListingError;

/// Link text marking the timetable link of a terminal entry.
const TIMETABLE_LINK_TEXT: &str = "시간표";

/// A terminal as it appears on the listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedTerminal {
    pub region: String,
    pub name: String,
    /// Absolute timetable URL, if the entry has one.
    pub timetable_url: Option<String>,
}

fn selector(css: &str) -> Result<Selector, ListingError> {
    Selector::parse(css).map_err(|e| ListingError::Selector(e.to_string()))
}

/// Resolve a root-relative `href` against `base_url`.
pub fn absolute_url(base_url: &str, href: &str) -> String {
    if href.starts_with('/') {
        format!("{}{}", base_url.trim_end_matches('/'), href)
    } else {
        href.to_string()
    }
}

/// Extract terminals for each of `regions`, in region then page order.
///
/// Regions missing from the page are skipped.
pub fn parse_listing(
    html: &str,
    base_url: &str,
    regions: &[String],
) -> Result<Vec<ListedTerminal>, ListingError> {
    let document = Html::parse_document(html);
    let entry_selector = selector("div.ft-area-terminal li.text-sm")?;
    let name_selector = selector("span.pe-2")?;
    let link_selector = selector("a")?;

    let mut terminals = Vec::new();
    for region in regions {
        let region_selector = selector(&format!("div[data-scrollspy-content=\"{region}\"]"))?;
        let Some(section) = document.select(&region_selector).next() else {
            continue;
        };

        for entry in section.select(&entry_selector) {
            let Some(name) = entry.select(&name_selector).next() else {
                continue;
            };

            terminals.push(ListedTerminal {
                region: region.clone(),
                name: text_of(name),
                timetable_url: timetable_link(entry, &link_selector, base_url),
            });
        }
    }

    Ok(terminals)
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Href of the first timetable link, made absolute. Empty hrefs count as none.
fn timetable_link(entry: ElementRef<'_>, links: &Selector, base_url: &str) -> Option<String> {
    let link = entry
        .select(links)
        .find(|a| text_of(*a).contains(TIMETABLE_LINK_TEXT))?;

    link.value()
        .attr("href")
        .filter(|href| !href.is_empty())
        .map(|href| absolute_url(base_url, href))
}
