//! Per-traversal visited markers.

/// Boolean marks for the nodes of one graph, scoped to a single traversal.
///
/// # Examples
/// ```
/// use graphwalk_core::VisitedSet;
///
/// let mut visited = VisitedSet::new(3);
/// assert!(visited.insert(1));
/// assert!(!visited.insert(1));
/// assert!(visited.contains(1));
/// assert!(!visited.contains(2));
/// assert_eq!(visited.len(), 1);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VisitedSet {
    marks: Vec<bool>,
    count: usize,
}

impl VisitedSet {
    /// Creates a set sized for `capacity` nodes with every node unvisited.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            marks: vec![false; capacity],
            count: 0,
        }
    }

    /// Marks `node` as visited.
    ///
    /// Returns `true` when the node was previously unvisited. Indices beyond
    /// the capacity are never inserted and report `false`.
    pub fn insert(&mut self, node: usize) -> bool {
        match self.marks.get_mut(node) {
            Some(mark) if !*mark => {
                *mark = true;
                self.count = self.count.saturating_add(1);
                true
            }
            _ => false,
        }
    }

    /// Returns whether `node` has been visited.
    #[must_use]
    pub fn contains(&self, node: usize) -> bool {
        self.marks.get(node).copied().unwrap_or(false)
    }

    /// Returns the number of visited nodes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns whether no node has been visited yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the number of nodes the set can mark.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.marks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(64)]
    fn fresh_set_marks_nothing(#[case] capacity: usize) {
        let visited = VisitedSet::new(capacity);
        assert!(visited.is_empty());
        assert_eq!(visited.capacity(), capacity);
        assert!((0..capacity).all(|node| !visited.contains(node)));
    }

    #[rstest]
    fn insert_ignores_out_of_range_nodes() {
        let mut visited = VisitedSet::new(2);
        assert!(!visited.insert(2));
        assert!(!visited.contains(2));
        assert!(visited.is_empty());
    }
}
