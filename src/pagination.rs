//! Offset pagination: query-parameter parsing and navigation links.

use crate::validate::non_negative_integer;

/// Page size applied when the `limit` parameter is absent or unusable.
pub const DEFAULT_LIMIT: u64 = 10;

/// Offset applied when the `offset` parameter is absent or unusable.
pub const DEFAULT_OFFSET: u64 = 0;

/// A validated pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: u64,
    pub offset: u64,
}

impl PageWindow {
    /// Builds a window from raw query parameters. Malformed values never
    /// fail the request; they fall back to the defaults. A limit of zero
    /// counts as unusable since it would produce an empty page whose links
    /// never advance.
    pub fn from_query(limit: Option<&str>, offset: Option<&str>) -> Self {
        let limit = limit
            .and_then(non_negative_integer)
            .filter(|&n| n >= 1)
            .unwrap_or(DEFAULT_LIMIT);
        let offset = offset
            .and_then(non_negative_integer)
            .unwrap_or(DEFAULT_OFFSET);
        Self { limit, offset }
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

/// Absolute URLs for the adjacent pages, when they exist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageLinks {
    pub previous: Option<String>,
    pub next: Option<String>,
}

/// Computes previous/next links for a window over `total` records.
///
/// A previous page exists when stepping back one full window stays at or
/// above zero; a next page exists when the record after this window is
/// still within the total. The search query, when present, is carried
/// through both links so a paginated search stays a search.
pub fn page_links(
    origin: &str,
    path: &str,
    window: PageWindow,
    search_query: Option<&str>,
    total: u64,
) -> PageLinks {
    let search_param = search_query
        .map(|q| format!("&search_query={}", urlencoding::encode(q)))
        .unwrap_or_default();
    let link = |offset: u64| {
        format!(
            "{}{}?limit={}&offset={}{}",
            origin, path, window.limit, offset, search_param
        )
    };

    let previous = window.offset.checked_sub(window.limit).map(link);
    let next = window
        .offset
        .checked_add(window.limit)
        .filter(|&n| n < total)
        .map(link);

    PageLinks { previous, next }
}
