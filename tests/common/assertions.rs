//! Custom test assertions

use resale_catalog::core::models::Product;

/// Assertions for stored products
pub trait ProductAssertions {
    /// No analysis field has been written
    fn assert_unanalyzed(&self);

    /// The listing title was drafted
    fn assert_titled(&self, expected: &str);
}

impl ProductAssertions for Product {
    fn assert_unanalyzed(&self) {
        assert!(
            self.title.is_none(),
            "{}: expected no title, got {:?}",
            self.management_number,
            self.title
        );
        assert!(
            !self.is_analyzed(),
            "{}: expected no level, got {:?}",
            self.management_number,
            self.level
        );
        assert!(self.candidate_titles.is_empty());
        assert!(self.category.is_none());
    }

    fn assert_titled(&self, expected: &str) {
        assert_eq!(
            self.title.as_deref(),
            Some(expected),
            "{}: unexpected title",
            self.management_number
        );
    }
}
