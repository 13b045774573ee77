//! Pure projection from raw feed items to display posts.

use super::types::{DisplayPost, RawItem};

/// Only the first 10 items of a page are shown; the rest are discarded.
pub const MAX_POSTS: usize = 10;

/// Titles longer than this are cut and suffixed with "...".
const TITLE_LIMIT: usize = 60;
/// Descriptions longer than this are cut and suffixed with the read-more tail.
const DESCRIPTION_LIMIT: usize = 150;

const TITLE_SUFFIX: &str = "...";
const DESCRIPTION_SUFFIX: &str = "... Read more...";

/// Transforms a page of raw items into display posts, in feed order,
/// capped at [`MAX_POSTS`].
pub fn transform_feed(items: Vec<RawItem>) -> Vec<DisplayPost> {
    items.into_iter().take(MAX_POSTS).map(to_display_post).collect()
}

/// Projects a single raw item into its display form. Infallible.
fn to_display_post(item: RawItem) -> DisplayPost {
    let image_url = format!("https://placehold.co/400x200?text=Post+{}", item.id);
    DisplayPost {
        id: item.id,
        title: clip(&item.title, TITLE_LIMIT, TITLE_SUFFIX),
        description: clip(&item.description, DESCRIPTION_LIMIT, DESCRIPTION_SUFFIX),
        image_url,
        category: item.category,
        brand: item.brand,
        rating: item.rating,
    }
}

/// Keeps the first `limit` characters of `s` and appends `suffix` when the
/// string is longer; returns the string unchanged otherwise.
///
/// Counts characters, not bytes or display columns, and cuts on a char
/// boundary so multi-byte input can never panic the slice.
fn clip(s: &str, limit: usize, suffix: &str) -> String {
    match s.char_indices().nth(limit) {
        Some((byte_end, _)) => format!("{}{}", &s[..byte_end], suffix),
        None => s.to_string(),
    }
}
