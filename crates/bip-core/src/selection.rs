//! Selection context types.

/// Whatever the host currently considers selected.
///
/// The panel never looks inside a selection; it only needs to know
/// whether there is anything to act upon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionContext {
    count: usize,
}

impl SelectionContext {
    /// Nothing selected.
    pub fn empty() -> Self {
        Self { count: 0 }
    }

    /// A selection of `count` display items.
    pub fn with_items(count: usize) -> Self {
        Self { count }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn len(&self) -> usize {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_emptiness() {
        assert!(SelectionContext::empty().is_empty());
        assert!(SelectionContext::default().is_empty());
        assert!(SelectionContext::with_items(0).is_empty());

        let selection = SelectionContext::with_items(3);
        assert!(!selection.is_empty());
        assert_eq!(selection.len(), 3);
    }
}
