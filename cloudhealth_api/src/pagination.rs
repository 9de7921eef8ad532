//! Page-based list fetching shared by every list endpoint.
//!
//! List endpoints take `page` (1-based) and `per_page` query parameters and
//! wrap their items under a family-specific key. None of them report a total
//! count, so the last page is recognised by coming back short: a collection
//! whose size is an exact multiple of `per_page` costs one extra request that
//! returns an empty page.

use serde::de::DeserializeOwned;
use url::form_urlencoded;

use crate::client::{AuthStyle, Client};
use crate::Error;

/// A decoded list response that can be flattened into its items.
pub trait Page: DeserializeOwned {
    type Item;

    fn into_items(self) -> Vec<Self::Item>;
}

/// Position within a paginated listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageCursor {
    pub page: u32,
    pub per_page: u32,
}

impl PageCursor {
    /// Cursor for page 1. A `per_page` of zero is bumped to one.
    pub fn first(per_page: u32) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
        }
    }

    pub fn next(self) -> Self {
        Self {
            page: self.page + 1,
            ..self
        }
    }

    /// A page holding fewer than `per_page` items is the last one.
    pub fn is_last(&self, items: usize) -> bool {
        items < self.per_page as usize
    }

    /// Merges `page` and `per_page` into `path`, keeping any query it already has.
    pub fn apply(&self, path: &str) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("page", &self.page.to_string())
            .append_pair("per_page", &self.per_page.to_string())
            .finish();
        let sep = match path.find('?') {
            None => "?",
            Some(_) if path.ends_with('?') || path.ends_with('&') => "",
            Some(_) => "&",
        };
        format!("{}{}{}", path, sep, query)
    }
}

impl Client {
    /// Walks a list endpoint page by page and returns every item in server order.
    ///
    /// Any failing page aborts the walk; nothing collected so far is returned.
    pub async fn fetch_all<P: Page>(
        &self,
        path: &str,
        auth: AuthStyle,
        per_page: u32,
    ) -> Result<Vec<P::Item>, Error> {
        let mut items = Vec::new();
        let mut cursor = PageCursor::first(per_page);
        loop {
            let page: P = self.get_json(cursor.apply(path), auth).await?;
            let page_items = page.into_items();
            let count = page_items.len();
            items.extend(page_items);
            if cursor.is_last(count) {
                break;
            }
            cursor = cursor.next();
        }
        tracing::debug!(
            path,
            pages = cursor.page,
            items = items.len(),
            "Fetched paginated listing"
        );
        Ok(items)
    }
}
