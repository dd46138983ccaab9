use super::{Link, NodeId, Tree};
use std::fmt::{Debug, Formatter};

/// A position in an [`AaSet`](super::AaSet): either an element or the
/// one-past-the-last "end" position.
///
/// Cursors move by following the tree's parent links, so they carry no stack
/// and are `Copy`.  The end position of a non-empty set remembers the last
/// element, which is where [`move_prev`](Cursor::move_prev) takes it.
///
/// Two cursors are equal when they come from the same set and sit at the same
/// position.
///
/// # Examples
/// ```
/// use aa_set::AaSet;
///
/// let s = AaSet::from([1, 3, 5]);
/// let mut c = s.find(&3);
/// c.move_next();
/// assert_eq!(c.get(), Some(&5));
/// c.move_next();
/// assert_eq!(c, s.end());
/// c.move_prev();
/// assert_eq!(c.get(), Some(&5));
/// ```
pub struct Cursor<'a, T> {
    tree: &'a Tree<T>,
    node: Link,
    is_end: bool,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn at(tree: &'a Tree<T>, node: NodeId) -> Self {
        Cursor {
            tree,
            node: Some(node),
            is_end: false,
        }
    }

    pub(crate) fn end(tree: &'a Tree<T>) -> Self {
        Cursor {
            tree,
            node: tree.last,
            is_end: true,
        }
    }

    pub(crate) fn at_or_end(tree: &'a Tree<T>, link: Link) -> Self {
        match link {
            Some(n) => Cursor::at(tree, n),
            None => Cursor::end(tree),
        }
    }

    /// Returns the element at the cursor, or `None` at the end position.
    pub fn get(&self) -> Option<&'a T> {
        let tree = self.tree;
        match self.node {
            Some(n) if !self.is_end => Some(tree.value(n)),
            _ => None,
        }
    }

    /// Tests if the cursor is at the end position.
    pub fn is_end(&self) -> bool {
        self.is_end
    }

    /// Moves to the next element in order, or to the end position after the
    /// last element.  Does nothing at the end position.
    pub fn move_next(&mut self) {
        if self.is_end {
            return;
        }

        if let Some(n) = self.node {
            match self.tree.successor(n) {
                Some(next) => self.node = Some(next),
                // keep the last node so that move_prev can come back
                None => self.is_end = true,
            }
        }
    }

    /// Moves to the previous element in order.  From the end position this is
    /// the last element.  Does nothing at the first element or in an empty
    /// set.
    pub fn move_prev(&mut self) {
        if self.is_end {
            self.is_end = self.node.is_none();
            return;
        }

        if let Some(prev) = self.node.and_then(|n| self.tree.predecessor(n)) {
            self.node = Some(prev);
        }
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree)
            && self.node == other.node
            && self.is_end == other.is_end
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T: Debug> Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.get() {
            Some(v) => f.debug_tuple("Cursor").field(v).finish(),
            None => f.write_str("Cursor(end)"),
        }
    }
}
