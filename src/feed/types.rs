//! Data model for the product feed and its display projection.

use serde::Deserialize;

/// One raw record from the product feed, taken verbatim from the API.
///
/// The upstream payload carries more fields (price, stock, thumbnail, ...)
/// which serde ignores. `brand` is absent for some items, so the optional
/// metadata fields all fall back to defaults rather than failing the whole
/// page.
#[derive(Debug, Clone, Deserialize)]
pub struct RawItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub category: String,
}

/// Envelope the feed endpoint returns.
///
/// `products` is optional so a structurally valid JSON object without the
/// sequence field deserializes cleanly and can be reported as a shape
/// error instead of a decode failure.
#[derive(Debug, Deserialize)]
pub struct FeedPage {
    pub products: Option<Vec<RawItem>>,
    // Pagination metadata; carried for completeness, never consumed.
    #[serde(default)]
    #[allow(dead_code)]
    pub total: u64,
    #[serde(default)]
    #[allow(dead_code)]
    pub skip: u64,
    #[serde(default)]
    #[allow(dead_code)]
    pub limit: u64,
}

/// Display-ready projection of a [`RawItem`].
///
/// Title and description are truncated per the transform rules; the image
/// URL is a deterministic placeholder keyed by the item id (no network
/// dependency).
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPost {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
    pub brand: String,
    pub rating: f64,
}
