//! Pagination types shared by every repository
//!
//! Page indexes are 0-based here. Translating from the 1-based numbers used on
//! the wire happens in the service layer.

use crate::error::DomainError;

/// A validated request for one page of a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    size: u64,
}

impl PageRequest {
    /// Build a page request, rejecting negative indexes and empty pages.
    ///
    /// The offset `page * size` must fit in an `i64`, the range of a
    /// PostgreSQL `OFFSET`.
    pub fn new(page: i64, size: i64) -> Result<Self, DomainError> {
        if page < 0 {
            return Err(DomainError::Validation(
                "Page index must not be less than zero".to_string(),
            ));
        }
        if size < 1 {
            return Err(DomainError::Validation(
                "Page size must not be less than one".to_string(),
            ));
        }
        if page.checked_mul(size).is_none() {
            return Err(DomainError::Validation(format!(
                "Page {} of size {} is out of range",
                page, size
            )));
        }
        Ok(Self {
            page: page as u64,
            size: size as u64,
        })
    }

    /// Build a page request from a 1-based page number
    pub fn one_based(page: i64, size: i64) -> Result<Self, DomainError> {
        let index = page.checked_sub(1).ok_or_else(|| {
            DomainError::Validation("Page number must not be less than one".to_string())
        })?;
        Self::new(index, size)
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Number of elements skipped before this page
    pub fn offset(&self) -> u64 {
        self.page * self.size
    }
}

/// One page of a collection together with the collection totals
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            number: request.page(),
            size: request.size(),
            total_elements,
            total_pages: total_elements.div_ceil(request.size()),
        }
    }

    /// Convert the content while keeping the totals
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}
