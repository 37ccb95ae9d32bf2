use std::collections::HashSet;

/// Expanded/collapsed flag per visible row, keyed by record id.
///
/// Rows are collapsed unless their id is in the set.
#[derive(Debug, Clone, Default)]
pub struct RowExpansion {
    expanded: HashSet<String>,
}

impl RowExpansion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the row and return its new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.to_string());
            true
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Forget every row that is no longer on screen.
    pub fn retain_visible<'a, I>(&mut self, visible_ids: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let visible: HashSet<&str> = visible_ids.into_iter().collect();
        self.expanded.retain(|id| visible.contains(id.as_str()));
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut rows = RowExpansion::new();
        assert!(!rows.is_expanded("a"));
        assert!(rows.toggle("a"));
        assert!(rows.is_expanded("a"));
        assert!(!rows.toggle("a"));
        assert!(!rows.is_expanded("a"));
    }

    #[test]
    fn test_rows_are_independent() {
        let mut rows = RowExpansion::new();
        rows.toggle("a");
        rows.toggle("b");
        rows.toggle("a");
        assert!(!rows.is_expanded("a"));
        assert!(rows.is_expanded("b"));
        assert_eq!(rows.expanded_count(), 1);
    }

    #[test]
    fn test_rows_leaving_window_are_forgotten() {
        let mut rows = RowExpansion::new();
        rows.toggle("a");
        rows.toggle("b");

        rows.retain_visible(["b", "c"]);
        assert!(!rows.is_expanded("a"));
        assert!(rows.is_expanded("b"));

        // Coming back into view starts collapsed again
        rows.retain_visible(["a", "b"]);
        assert!(!rows.is_expanded("a"));
    }
}
