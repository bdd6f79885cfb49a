// extract.rs
use crate::domain::{Lead, RunContext, NO_ADDRESS, NO_NEIGHBORHOOD, NO_PHONE, NO_TITLE, NO_WEBSITE};
use crate::errors::ScraperError;
use crate::scraper::models::ListingPayload;
use scraper::{Html, Selector};

const LISTING_SELECTOR: &str = "a.listings-item";
const ENTITY_ATTR: &str = "data-entity";

/// Extracts one `Lead` per listing node on a fetched search page, in
/// source order. Pure function of its inputs: no I/O, only diagnostics.
///
/// A node without the `data-entity` attribute is skipped silently. A node
/// whose payload fails to parse is skipped with a diagnostic; the rest of
/// the page is still processed. Zero matching nodes is not an error.
pub fn extract_leads(
    html: &str,
    ctx: &RunContext,
    neighborhood: Option<&str>,
) -> Result<Vec<Lead>, ScraperError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(LISTING_SELECTOR)
        .map_err(|e| ScraperError::HtmlParse(e.to_string()))?;

    let mut leads = Vec::new();
    let mut nodes = 0usize;

    for element in document.select(&selector) {
        nodes += 1;

        let Some(raw) = element.value().attr(ENTITY_ATTR) else {
            continue;
        };

        let payload: ListingPayload = match serde_json::from_str(raw) {
            Ok(payload) => payload,
            Err(e) => {
                log::error!("Failed to parse entity payload: {e}");
                continue;
            }
        };

        let entity = payload.entity;
        leads.push(Lead {
            search_term: ctx.search_term.clone(),
            state: ctx.state.clone(),
            city: ctx.city.clone(),
            neighborhood: neighborhood.unwrap_or(NO_NEIGHBORHOOD).to_string(),
            name: entity.title.unwrap_or_else(|| NO_TITLE.to_string()),
            address: entity.address.unwrap_or_else(|| NO_ADDRESS.to_string()),
            phone: entity.phone.unwrap_or_else(|| NO_PHONE.to_string()),
            website: entity.website.unwrap_or_else(|| NO_WEBSITE.to_string()),
        });
    }

    if nodes == 0 {
        log::warn!("No listing nodes found on page");
    } else {
        log::info!("Found {nodes} listing nodes, extracted {} leads", leads.len());
    }

    Ok(leads)
}
