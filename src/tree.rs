/// Operations shared by the ordered set-like trees in this crate.
pub trait TreeOps<T> {
    /// Stores `value` unless an equal value is already present. Returns `false`
    /// (leaving the tree untouched) for duplicates.
    fn insert(&mut self, value: T) -> bool;
    /// Whether a value equal to `value` is stored.
    fn search(&self, value: &T) -> bool;
    /// Number of stored values.
    fn len(&self) -> usize;
    /// Longest root-to-leaf path. Both an empty tree and a lone leaf have height 0.
    fn height(&self) -> usize;
    /// Calls `visit` once per stored value, in ascending order.
    fn traverse<F: FnMut(&T)>(&self, visit: F);

    /// Whether nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
