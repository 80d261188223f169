/// Previous/next page toggler for the resume viewer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_count: usize,
}

impl Pagination {
    /// Starts on page 1; a count of zero is treated as one page
    pub fn new(page_count: usize) -> Self {
        Pagination {
            page: 1,
            page_count: page_count.max(1),
        }
    }

    /// Current page, 1-based
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn can_previous(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self) -> bool {
        self.page < self.page_count
    }

    /// Returns whether the page changed
    pub fn previous(&mut self) -> bool {
        if !self.can_previous() {
            return false;
        }
        self.page -= 1;
        log::debug!("resume page {}", self.page);
        true
    }

    /// Returns whether the page changed
    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.page += 1;
        log::debug!("resume page {}", self.page);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_is_disabled_on_first_page() {
        let mut pages = Pagination::new(2);
        assert_eq!(pages.page(), 1);
        assert!(!pages.can_previous());
        assert!(pages.can_next());

        assert!(!pages.previous());
        assert_eq!(pages.page(), 1);
        assert!(!pages.can_previous());
    }

    #[test]
    fn next_moves_to_last_page_and_disables_itself() {
        let mut pages = Pagination::new(2);
        assert!(pages.next());
        assert_eq!(pages.page(), 2);
        assert!(!pages.can_next());
        assert!(pages.can_previous());

        assert!(!pages.next());
        assert_eq!(pages.page(), 2);

        assert!(pages.previous());
        assert_eq!(pages.page(), 1);
    }

    #[test]
    fn zero_pages_is_one_page() {
        let pages = Pagination::new(0);
        assert_eq!(pages.page_count(), 1);
        assert!(!pages.can_next());
    }
}
