//! Table paging and the delete-confirmation target shared by the list screens.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub rows_per_page: usize,
}

impl Pagination {
    pub fn new(rows_per_page: usize) -> Self {
        Self {
            page: 0,
            rows_per_page: rows_per_page.max(1),
        }
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.rows_per_page).max(1)
    }

    /// Rows of the current page. A page past the end yields an empty slice.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page * self.rows_per_page).min(items.len());
        let end = (start + self.rows_per_page).min(items.len());
        &items[start..end]
    }

    pub fn with_page(self, page: usize) -> Self {
        Self { page, ..self }
    }

    /// Going back to the first page keeps the view from landing past the end.
    pub fn with_rows_per_page(self, rows_per_page: usize) -> Self {
        Self::new(rows_per_page)
    }

    /// Pulls the page back inside the data after a refetch shrank it.
    pub fn clamp(self, total: usize) -> Self {
        let last = self.page_count(total) - 1;
        self.with_page(self.page.min(last))
    }

    /// `"11-20 dari 42"`
    pub fn range_label(&self, total: usize) -> String {
        if total == 0 {
            return "0 dari 0".to_string();
        }
        let start = (self.page * self.rows_per_page).min(total);
        let end = (start + self.rows_per_page).min(total);
        format!("{}-{} dari {}", start + 1, end, total)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page + 1 < self.page_count(total)
    }
}

/// Row picked for deletion, kept until the dialog is confirmed or cancelled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteTarget {
    pub id: u64,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_follow_the_current_page() {
        let rows: Vec<u32> = (1..=12).collect();
        let pagination = Pagination::new(5);

        assert_eq!(pagination.slice(&rows), &[1, 2, 3, 4, 5]);
        assert_eq!(pagination.with_page(2).slice(&rows), &[11, 12]);
        assert!(pagination.with_page(3).slice(&rows).is_empty());
        assert_eq!(pagination.page_count(rows.len()), 3);
    }

    #[test]
    fn changing_rows_per_page_returns_to_the_first_page() {
        let pagination = Pagination::new(10).with_page(4).with_rows_per_page(25);
        assert_eq!(pagination, Pagination { page: 0, rows_per_page: 25 });
    }

    #[test]
    fn clamp_keeps_the_page_inside_shrunk_data() {
        let pagination = Pagination::new(5).with_page(2);
        assert_eq!(pagination.clamp(11).page, 2);
        assert_eq!(pagination.clamp(10).page, 1);
        assert_eq!(pagination.clamp(0).page, 0);
    }

    #[test]
    fn range_label_and_navigation() {
        let pagination = Pagination::new(10).with_page(1);
        assert_eq!(pagination.range_label(42), "11-20 dari 42");
        assert_eq!(Pagination::new(10).range_label(0), "0 dari 0");
        assert!(pagination.has_previous());
        assert!(pagination.has_next(42));
        assert!(!pagination.with_page(4).has_next(42));
    }
}
