//! Page envelopes for query results.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A single page of items plus pagination metadata.
///
/// Page numbers are 1-based. Construction rejects invalid arguments instead
/// of clamping them; `total_count >= 0` holds by type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagedList<T> {
    items: Vec<T>,
    page_number: u64,
    page_size: u64,
    total_count: u64,
    total_pages: u64,
}

impl<T> PagedList<T> {
    pub fn new(
        items: Vec<T>,
        page_number: u64,
        page_size: u64,
        total_count: u64,
    ) -> DomainResult<Self> {
        if page_number < 1 {
            return Err(DomainError::validation(
                "page number must be greater than or equal to 1",
            ));
        }
        if page_size < 1 {
            return Err(DomainError::validation(
                "page size must be greater than or equal to 1",
            ));
        }

        let total_pages = total_count.div_ceil(page_size);
        Ok(Self {
            items,
            page_number,
            page_size,
            total_count,
            total_pages,
        })
    }

    /// An empty page.
    pub fn empty(page_number: u64, page_size: u64) -> DomainResult<Self> {
        Self::new(Vec::new(), page_number, page_size, 0)
    }

    /// Page a full in-memory collection: keeps the slice at
    /// `(page_number - 1) * page_size .. + page_size` and reports the
    /// original, unsliced length as `total_count`.
    pub fn create(items: Vec<T>, page_number: u64, page_size: u64) -> DomainResult<Self> {
        let total_count = items.len() as u64;
        let skip = page_number.saturating_sub(1).saturating_mul(page_size);
        let page: Vec<T> = items
            .into_iter()
            .skip(skip as usize)
            .take(page_size as usize)
            .collect();
        Self::new(page, page_number, page_size, total_count)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn page_number(&self) -> u64 {
        self.page_number
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    pub fn has_previous_page(&self) -> bool {
        self.page_number > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.page_number < self.total_pages
    }
}

/// Application-facing page envelope (the response-side mirror of
/// [`PagedList`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    items: Vec<T>,
    page_number: u64,
    page_size: u64,
    total_count: u64,
    total_pages: u64,
}

impl<T> PaginatedResult<T> {
    pub fn new(
        items: Vec<T>,
        page_number: u64,
        page_size: u64,
        total_count: u64,
    ) -> DomainResult<Self> {
        if page_number < 1 {
            return Err(DomainError::validation(
                "page number must be greater than or equal to 1",
            ));
        }
        if page_size < 1 {
            return Err(DomainError::validation(
                "page size must be greater than or equal to 1",
            ));
        }

        let total_pages = total_count.div_ceil(page_size);
        Ok(Self {
            items,
            page_number,
            page_size,
            total_count,
            total_pages,
        })
    }

    pub fn empty(page_number: u64, page_size: u64) -> DomainResult<Self> {
        Self::new(Vec::new(), page_number, page_size, 0)
    }

    pub fn from_paged_list(paged: PagedList<T>) -> Self {
        Self {
            page_number: paged.page_number,
            page_size: paged.page_size,
            total_count: paged.total_count,
            total_pages: paged.total_pages,
            items: paged.items,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn page_number(&self) -> u64 {
        self.page_number
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    pub fn has_previous_page(&self) -> bool {
        self.page_number > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.page_number < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: usize) -> Vec<String> {
        (1..=count).map(|n| n.to_string()).collect()
    }

    #[test]
    fn first_of_three_pages() {
        let paged = PagedList::create(numbered(25), 1, 10).unwrap();
        assert_eq!(paged.items().len(), 10);
        assert_eq!(paged.total_count(), 25);
        assert_eq!(paged.total_pages(), 3);
        assert!(paged.has_next_page());
        assert!(!paged.has_previous_page());
    }

    #[test]
    fn last_page_is_short() {
        let paged = PagedList::create(numbered(25), 3, 10).unwrap();
        assert_eq!(paged.items().len(), 5);
        assert_eq!(paged.items()[0], "21");
        assert!(!paged.has_next_page());
        assert!(paged.has_previous_page());
    }

    #[test]
    fn page_past_the_end_is_empty_but_keeps_the_count() {
        let paged = PagedList::create(numbered(25), 4, 10).unwrap();
        assert!(paged.items().is_empty());
        assert_eq!(paged.total_count(), 25);
    }

    #[test]
    fn rejects_zero_page_number_and_size() {
        assert!(PagedList::<String>::new(Vec::new(), 0, 10, 0).is_err());
        assert!(PagedList::<String>::new(Vec::new(), 1, 0, 0).is_err());
        assert!(PagedList::create(numbered(3), 0, 10).is_err());
    }

    #[test]
    fn empty_page_has_no_neighbours() {
        let paged = PagedList::<String>::empty(1, 10).unwrap();
        assert_eq!(paged.total_pages(), 0);
        assert!(!paged.has_next_page());
        assert!(!paged.has_previous_page());
    }

    #[test]
    fn paginated_result_mirrors_the_paged_list() {
        let paged = PagedList::create(numbered(25), 2, 10).unwrap();
        let result = PaginatedResult::from_paged_list(paged);
        assert_eq!(result.items().len(), 10);
        assert_eq!(result.page_number(), 2);
        assert_eq!(result.total_count(), 25);
        assert_eq!(result.total_pages(), 3);
        assert!(result.has_previous_page());
        assert!(result.has_next_page());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: `create` always reports the unsliced length, and the
            /// returned page holds `min(size, max(0, len - (page-1)*size))`
            /// items.
            #[test]
            fn create_preserves_count_and_page_arithmetic(
                len in 0usize..200,
                page_number in 1u64..20,
                page_size in 1u64..20,
            ) {
                let items: Vec<u64> = (0..len as u64).collect();
                let paged = PagedList::create(items, page_number, page_size).unwrap();

                prop_assert_eq!(paged.total_count(), len as u64);

                let skip = (page_number - 1) * page_size;
                let expected = (len as u64).saturating_sub(skip).min(page_size);
                prop_assert_eq!(paged.items().len() as u64, expected);

                prop_assert_eq!(paged.total_pages(), (len as u64).div_ceil(page_size));
            }
        }
    }
}
