//! Paginated response shape

use serde::{Deserialize, Serialize};

use crate::domain::ports::Page;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    /// 0-based index of this page
    pub number: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> PageResponse<T> {
    /// Build from a domain page, converting each element
    pub fn from_page<E>(page: Page<E>) -> Self
    where
        T: From<E>,
    {
        let page = page.map(T::from);
        PageResponse {
            content: page.content,
            number: page.number,
            size: page.size,
            total_elements: page.total_elements,
            total_pages: page.total_pages,
        }
    }
}
