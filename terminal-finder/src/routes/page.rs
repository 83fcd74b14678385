//! Timetable page parsing.
//!
//! A terminal's timetable page lists each directly served destination as
//! an `h2` heading. The destination headings end where the booking
//! section begins.

use scraper::{Html, Selector};

use super::error::RouteError;

/// Heading that opens the booking section after the destination list.
pub const BOOKING_HEADING: &str = "예매 안내";

/// Extract destination names from a timetable page, in page order.
pub fn parse_destinations(html: &str) -> Result<Vec<String>, RouteError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("h2").map_err(|e| RouteError::Layout(e.to_string()))?;

    let mut destinations = Vec::new();
    for heading in document.select(&selector) {
        let text = heading.text().collect::<String>();
        let text = text.trim();

        if text == BOOKING_HEADING {
            return Ok(destinations);
        }
        if !text.is_empty() {
            destinations.push(text.to_string());
        }
    }

    Err(RouteError::Layout(format!(
        "no '{BOOKING_HEADING}' heading found"
    )))
}
