//! Placed-object registry
//!
//! Ordered list of the dice currently in the scene. Insertion order is
//! placement order, every node appears at most once, and removal is all or
//! nothing.

#[derive(Debug, Clone)]
pub struct DiceRegistry<N> {
    placed: Vec<N>,
}

impl<N> Default for DiceRegistry<N> {
    fn default() -> Self {
        Self { placed: Vec::new() }
    }
}

impl<N: Copy + PartialEq> DiceRegistry<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node. Returns `false` (and does nothing) if it is already registered.
    pub fn push(&mut self, node: N) -> bool {
        if self.contains(node) {
            return false;
        }
        self.placed.push(node);
        true
    }

    pub fn contains(&self, node: N) -> bool {
        self.placed.contains(&node)
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    pub fn as_slice(&self) -> &[N] {
        &self.placed
    }

    pub fn iter(&self) -> impl Iterator<Item = N> + '_ {
        self.placed.iter().copied()
    }

    /// Empty the registry, handing back everything that was in it (in order).
    pub fn take_all(&mut self) -> Vec<N> {
        std::mem::take(&mut self.placed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_preserves_insertion_order() {
        let mut registry = DiceRegistry::new();
        assert!(registry.push(3u32));
        assert!(registry.push(1));
        assert!(registry.push(2));
        assert_eq!(registry.as_slice(), &[3, 1, 2]);
        assert_eq!(registry.iter().collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn test_registry_rejects_duplicates() {
        let mut registry = DiceRegistry::new();
        assert!(registry.push(7u32));
        assert!(!registry.push(7));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_take_all_empties_registry() {
        let mut registry = DiceRegistry::new();
        registry.push(1u32);
        registry.push(2);

        let taken = registry.take_all();
        assert_eq!(taken, vec![1, 2]);
        assert!(registry.is_empty());
        assert!(!registry.contains(1));
    }
}
