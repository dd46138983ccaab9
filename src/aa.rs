//! AA-tree storage and rebalancing.
//!
//! Nodes live in an arena owned by [`Tree`].  Child links are indices into the
//! arena and every node is linked from exactly one parent, so a node owns its
//! subtrees even though nothing is boxed.  Parent links are plain indices too;
//! they only serve cursor movement.  Dropping the tree drops the arena, which
//! releases every node once and never recurses.
use std::borrow::Borrow;
use std::cmp::Ordering::*;
use std::fmt::{Debug, Formatter};
use std::mem::replace;

mod aa_set;
mod check;
mod cursor;

pub use aa_set::{AaSet, IntoIter, Iter, Range};
pub use check::InvariantViolation;
pub use cursor::Cursor;

#[cfg(test)]
macro_rules! chk_tree {
    ( $x:expr ) => {{
        $x.check().unwrap();
    }};
}

#[cfg(not(test))]
macro_rules! chk_tree {
    ( $x:expr ) => {{}};
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

type Link = Option<NodeId>;

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

pub(crate) struct Node<T> {
    value: T,
    level: usize,
    left: Link,
    right: Link,
    parent: Link,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Self {
        Node {
            value,
            level: 1,
            left: None,
            right: None,
            parent: None,
        }
    }

    fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

pub(crate) struct Tree<T> {
    slots: Vec<Option<Node<T>>>,
    vacant: Vec<NodeId>,
    root: Link,
    len: usize,
    // cached extremes, refreshed after every insert and remove
    first: Link,
    last: Link,
}

impl<T> Tree<T> {
    fn new() -> Self {
        Tree {
            slots: Vec::new(),
            vacant: Vec::new(),
            root: None,
            len: 0,
            first: None,
            last: None,
        }
    }

    fn node(&self, n: NodeId) -> &Node<T> {
        match &self.slots[n.0] {
            Some(node) => node,
            None => panic!("Dangling link to vacant slot {}", n.0),
        }
    }

    fn node_mut(&mut self, n: NodeId) -> &mut Node<T> {
        match &mut self.slots[n.0] {
            Some(node) => node,
            None => panic!("Dangling link to vacant slot {}", n.0),
        }
    }

    fn left(&self, n: NodeId) -> Link {
        self.node(n).left
    }

    fn right(&self, n: NodeId) -> Link {
        self.node(n).right
    }

    fn parent(&self, n: NodeId) -> Link {
        self.node(n).parent
    }

    fn value(&self, n: NodeId) -> &T {
        &self.node(n).value
    }

    // absent subtrees sit at level 0
    fn level(&self, link: Link) -> usize {
        link.map_or(0, |n| self.node(n).level)
    }

    fn alloc(&mut self, value: T) -> NodeId {
        let node = Some(Node::leaf(value));
        match self.vacant.pop() {
            Some(n) => {
                self.slots[n.0] = node;
                n
            }

            None => {
                self.slots.push(node);
                NodeId(self.slots.len() - 1)
            }
        }
    }

    // The caller must already have unlinked n from its parent.
    fn release(&mut self, n: NodeId) -> T {
        match self.slots[n.0].take() {
            Some(node) => {
                self.vacant.push(n);
                node.value
            }

            None => panic!("Attempt to release vacant slot {}", n.0),
        }
    }

    fn set_left(&mut self, n: NodeId, child: Link) {
        self.node_mut(n).left = child;
        if let Some(c) = child {
            self.node_mut(c).parent = Some(n);
        }
    }

    fn set_right(&mut self, n: NodeId, child: Link) {
        self.node_mut(n).right = child;
        if let Some(c) = child {
            self.node_mut(c).parent = Some(n);
        }
    }

    fn leftmost(&self, mut n: NodeId) -> NodeId {
        while let Some(l) = self.left(n) {
            n = l;
        }
        n
    }

    fn rightmost(&self, mut n: NodeId) -> NodeId {
        while let Some(r) = self.right(n) {
            n = r;
        }
        n
    }

    /// In-order successor of n, found by walking parent links.
    fn successor(&self, n: NodeId) -> Link {
        if let Some(r) = self.right(n) {
            return Some(self.leftmost(r));
        }

        let mut curr = n;
        while let Some(up) = self.parent(curr) {
            if self.left(up) == Some(curr) {
                return Some(up);
            }
            curr = up;
        }

        None
    }

    /// In-order predecessor of n, found by walking parent links.
    fn predecessor(&self, n: NodeId) -> Link {
        if let Some(l) = self.left(n) {
            return Some(self.rightmost(l));
        }

        let mut curr = n;
        while let Some(up) = self.parent(curr) {
            if self.right(up) == Some(curr) {
                return Some(up);
            }
            curr = up;
        }

        None
    }

    fn refresh_extremes(&mut self) {
        self.first = self.root.map(|r| self.leftmost(r));
        self.last = self.root.map(|r| self.rightmost(r));
    }

    fn clear(&mut self) {
        *self = Tree::new();
    }

    // Removes a horizontal left link:
    //    a(b(x, y), z)   =>   b(x, a(y, z))     when level(a) == level(b)
    // The returned subtree root inherits a's parent link.
    fn skew(&mut self, a: NodeId) -> NodeId {
        let Some(b) = self.left(a) else { return a };
        if self.node(b).level != self.node(a).level {
            return a;
        }

        let up = self.parent(a);
        let y = self.right(b);
        self.set_left(a, y);
        self.set_right(b, Some(a));
        self.node_mut(b).parent = up;
        b
    }

    // Removes two consecutive horizontal right links:
    //    a(x, b(y, c))   =>   b(a(x, y), c)     when level(a) == level(c)
    // b moves up a level.
    fn split(&mut self, a: NodeId) -> NodeId {
        let Some(b) = self.right(a) else { return a };
        let Some(c) = self.right(b) else { return a };
        if self.node(c).level != self.node(a).level {
            return a;
        }

        let up = self.parent(a);
        let y = self.left(b);
        self.set_right(a, y);
        self.set_left(b, Some(a));
        let b_node = self.node_mut(b);
        b_node.parent = up;
        b_node.level += 1;
        b
    }

    // Drops n to one above its lowest child, dragging a right child that was
    // level with n down with it.
    fn decrease_level(&mut self, n: NodeId) {
        let right = self.right(n);
        let want = self.level(self.left(n)).min(self.level(right)) + 1;
        if want >= self.node(n).level {
            return;
        }

        self.node_mut(n).level = want;
        if let Some(r) = right {
            if want < self.node(r).level {
                self.node_mut(r).level = want;
            }
        }
    }

    // Rebalances the subtree at n after a removal somewhere beneath it and
    // returns the new subtree root.
    fn fix_after_rm(&mut self, n: NodeId) -> NodeId {
        self.decrease_level(n);

        let n = self.skew(n);
        if let Some(r) = self.right(n) {
            let r = self.skew(r);
            self.set_right(n, Some(r));
            if let Some(rr) = self.right(r) {
                let rr = self.skew(rr);
                self.set_right(r, Some(rr));
            }
        }

        let n = self.split(n);
        if let Some(r) = self.right(n) {
            let r = self.split(r);
            self.set_right(n, Some(r));
        }

        n
    }

    // Removes the value held at n and returns the rebalanced subtree with the
    // removed value.  Interior nodes are never unlinked: they take over the
    // value of their successor (no left child) or predecessor, and that node is
    // removed from below instead.
    fn unlink(&mut self, n: NodeId) -> (Link, T) {
        let old = match (self.left(n), self.right(n)) {
            (None, None) => return (None, self.release(n)), // *** EARLY RETURN ***

            (None, Some(r)) => {
                let (r, succ) = self.rm_leftmost(r);
                self.set_right(n, r);
                replace(&mut self.node_mut(n).value, succ)
            }

            (Some(l), _) => {
                let (l, pred) = self.rm_leftmost_or_rightmost(l, Side::Right);
                self.set_left(n, l);
                replace(&mut self.node_mut(n).value, pred)
            }
        };

        (Some(self.fix_after_rm(n)), old)
    }

    fn rm_leftmost(&mut self, n: NodeId) -> (Link, T) {
        self.rm_leftmost_or_rightmost(n, Side::Left)
    }

    // Removes the extreme node on the given side of the subtree at n,
    // rebalancing every node on the way back up.
    fn rm_leftmost_or_rightmost(&mut self, n: NodeId, side: Side) -> (Link, T) {
        let next = match side {
            Side::Left => self.left(n),
            Side::Right => self.right(n),
        };

        let Some(next) = next else { return self.unlink(n) };
        let (child, v) = self.rm_leftmost_or_rightmost(next, side);
        match side {
            Side::Left => self.set_left(n, child),
            Side::Right => self.set_right(n, child),
        }

        (Some(self.fix_after_rm(n)), v)
    }

    // bookkeeping shared by every removal that found something
    fn finish_rm(&mut self, root: Link) {
        self.root = root;
        if let Some(r) = root {
            self.node_mut(r).parent = None;
        }

        self.len -= 1;
        if self.len == 0 {
            // reclaim the arena once nothing is left in it
            self.clear();
        }

        self.refresh_extremes();
    }

    fn find<Q>(&self, key: &Q) -> Link
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut curr = self.root;
        while let Some(n) = curr {
            let node = self.node(n);
            match key.cmp(node.value.borrow()) {
                Less => curr = node.left,
                Equal => return Some(n),
                Greater => curr = node.right,
            }
        }

        None
    }

    // The least node not less than key.  Every time the search turns left, the
    // node it leaves behind is the best candidate seen so far.
    fn lower_bound<Q>(&self, key: &Q) -> Link
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut best = None;
        let mut curr = self.root;
        while let Some(n) = curr {
            let node = self.node(n);
            match key.cmp(node.value.borrow()) {
                Less => {
                    best = Some(n);
                    curr = node.left;
                }
                Equal => return Some(n),
                Greater => curr = node.right,
            }
        }

        best
    }

    // The least node greater than key.
    fn upper_bound<Q>(&self, key: &Q) -> Link
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut best = None;
        let mut curr = self.root;
        while let Some(n) = curr {
            let node = self.node(n);
            if key < node.value.borrow() {
                best = Some(n);
                curr = node.left;
            } else {
                curr = node.right;
            }
        }

        best
    }

    fn into_sorted_vec(mut self) -> Vec<T> {
        let mut order = Vec::with_capacity(self.len);
        let mut curr = self.first;
        while let Some(n) = curr {
            order.push(n);
            curr = self.successor(n);
        }

        order.into_iter().map(|n| self.release(n)).collect()
    }
}

impl<T: Ord> Tree<T> {
    // Inserts value into the subtree at root and returns the new subtree root
    // and whether the value was new.
    fn ins(&mut self, root: Link, value: T) -> (NodeId, bool) {
        let n = match root {
            None => return (self.alloc(value), true), // *** EARLY RETURN ***
            Some(n) => n,
        };

        match value.cmp(self.value(n)) {
            Equal => return (n, false),

            Less => {
                let (l, is_new) = self.ins(self.left(n), value);
                self.set_left(n, Some(l));
                if !is_new {
                    return (n, false);
                }
            }

            Greater => {
                let (r, is_new) = self.ins(self.right(n), value);
                self.set_right(n, Some(r));
                if !is_new {
                    return (n, false);
                }
            }
        }

        let n = self.skew(n);
        (self.split(n), true)
    }

    fn insert(&mut self, value: T) -> bool {
        let (root, is_new) = self.ins(self.root, value);
        self.node_mut(root).parent = None;
        self.root = Some(root);
        self.len += is_new as usize;
        self.refresh_extremes();
        chk_tree!(self);
        is_new
    }

    // Removes key from the subtree at root.  When key is absent nothing on the
    // path is touched.
    fn rm<Q>(&mut self, root: Link, key: &Q) -> (Link, Option<T>)
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(n) = root else { return (None, None) };

        let removed = match key.cmp(self.value(n).borrow()) {
            Less => {
                let (l, v) = self.rm(self.left(n), key);
                self.set_left(n, l);
                v
            }

            Greater => {
                let (r, v) = self.rm(self.right(n), key);
                self.set_right(n, r);
                v
            }

            Equal => {
                let (subtree, v) = self.unlink(n);
                return (subtree, Some(v));
            }
        };

        match removed {
            None => (Some(n), None),
            Some(v) => (Some(self.fix_after_rm(n)), Some(v)),
        }
    }

    fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (root, removed) = self.rm(self.root, key);
        if removed.is_some() {
            self.finish_rm(root);
            chk_tree!(self);
        }
        removed
    }

    fn pop_first(&mut self) -> Option<T> {
        let (root, v) = self.rm_leftmost(self.root?);
        self.finish_rm(root);
        chk_tree!(self);
        Some(v)
    }

    fn pop_last(&mut self) -> Option<T> {
        let (root, v) = self.rm_leftmost_or_rightmost(self.root?, Side::Right);
        self.finish_rm(root);
        chk_tree!(self);
        Some(v)
    }
}

// A deep copy that packs the live nodes into a fresh arena.  Shape and levels
// are preserved exactly; parent links are rebuilt as nodes are attached.
impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        let mut copy = Tree::new();
        copy.slots.reserve(self.len);

        let mut work: Vec<(NodeId, Option<(NodeId, Side)>)> =
            self.root.map(|r| (r, None)).into_iter().collect();

        while let Some((src, attach_to)) = work.pop() {
            let node = self.node(src);
            let dst = copy.alloc(node.value.clone());
            copy.node_mut(dst).level = node.level;

            match attach_to {
                None => copy.root = Some(dst),
                Some((p, Side::Left)) => copy.set_left(p, Some(dst)),
                Some((p, Side::Right)) => copy.set_right(p, Some(dst)),
            }

            if let Some(r) = node.right {
                work.push((r, Some((dst, Side::Right))));
            }

            if let Some(l) = node.left {
                work.push((l, Some((dst, Side::Left))));
            }
        }

        copy.len = self.len;
        copy.refresh_extremes();
        copy
    }
}

impl<T: Debug> Debug for Tree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        fn fmt_link<T: Debug>(
            tree: &Tree<T>,
            link: Link,
            f: &mut Formatter<'_>,
        ) -> std::fmt::Result {
            let Some(n) = link else { return f.write_str(".") };
            let node = tree.node(n);
            f.write_fmt(format_args!("(lv: {} {:?} ", node.level, node.value))?;
            fmt_link(tree, node.left, f)?;
            f.write_str(" ")?;
            fmt_link(tree, node.right, f)?;
            f.write_str(")")
        }

        f.write_fmt(format_args!("Tree(#{}, ", self.len))?;
        fmt_link(self, self.root, f)?;
        f.write_str(")")
    }
}

#[cfg(test)]
mod test {
    extern crate quickcheck;
    use super::*;
    use quickcheck::quickcheck;

    fn values<T: Clone>(tree: &Tree<T>) -> Vec<T> {
        let mut vs = Vec::new();
        let mut curr = tree.first;
        while let Some(n) = curr {
            vs.push(tree.value(n).clone());
            curr = tree.successor(n);
        }
        vs
    }

    fn tree_of(vs: &[i32]) -> Tree<i32> {
        let mut tree = Tree::new();
        for &v in vs {
            tree.insert(v);
        }
        tree
    }

    fn bal_test(vs: Vec<u8>) {
        let mut tree = Tree::new();
        let mut btree = std::collections::BTreeSet::new();
        for &v in vs.iter() {
            assert_eq!(tree.insert(v), btree.insert(v));
            println!("{:?}", tree);
            tree.check().unwrap();
        }
        assert_eq!(values(&tree), Vec::from_iter(btree));
    }

    fn rm_test(vs: Vec<i8>) {
        let mut tree = Tree::new();
        let mut btree = std::collections::BTreeSet::new();

        for &k in vs.iter() {
            match k {
                1..=i8::MAX => {
                    let k = k % 32;
                    assert_eq!(tree.insert(k), btree.insert(k));
                }

                0 | i8::MIN => (),

                _ => {
                    let k = -k % 32;
                    assert_eq!(tree.remove(&k), btree.take(&k));
                }
            }

            assert_eq!(tree.len, btree.len());
            assert_eq!(values(&tree), Vec::from_iter(btree.iter().copied()));
            tree.check().unwrap();
        }
    }

    // systematically try removing each element of the tree
    fn chk_all_removes(tree: Tree<u8>) {
        for v in values(&tree) {
            let mut tree2 = tree.clone();
            assert_eq!(tree2.remove(&v), Some(v));
            assert_eq!(tree2.find(&v), None);
            assert_eq!(tree2.len, tree.len - 1);
            tree2.check().unwrap();
        }
    }

    #[test]
    fn skew_rotates_horizontal_left_link() {
        let mut tree = Tree::new();
        let a = tree.alloc(2);
        let b = tree.alloc(1);
        let y = tree.alloc(3);
        tree.set_left(a, Some(b));
        tree.set_right(b, Some(y));

        let root = tree.skew(a);
        assert_eq!(root, b);
        assert_eq!(tree.right(b), Some(a));
        assert_eq!(tree.left(a), Some(y));
        assert_eq!(tree.parent(a), Some(b));
        assert_eq!(tree.parent(y), Some(a));
        assert_eq!(tree.parent(b), None);
        assert_eq!(tree.node(b).level, 1);
    }

    #[test]
    fn skew_ignores_lower_left_child() {
        let mut tree = Tree::new();
        let a = tree.alloc(2);
        let b = tree.alloc(1);
        tree.node_mut(a).level = 2;
        tree.set_left(a, Some(b));

        assert_eq!(tree.skew(a), a);
        assert_eq!(tree.left(a), Some(b));

        let c = tree.alloc(7);
        assert_eq!(tree.skew(c), c);
    }

    #[test]
    fn split_rotates_double_right_link() {
        let mut tree = Tree::new();
        let a = tree.alloc(1);
        let b = tree.alloc(2);
        let c = tree.alloc(3);
        tree.set_right(a, Some(b));
        tree.set_right(b, Some(c));

        let root = tree.split(a);
        assert_eq!(root, b);
        assert_eq!(tree.node(b).level, 2);
        assert_eq!(tree.left(b), Some(a));
        assert_eq!(tree.right(b), Some(c));
        assert_eq!(tree.right(a), None);
        assert_eq!(tree.parent(a), Some(b));
        assert_eq!(tree.parent(c), Some(b));
    }

    #[test]
    fn split_ignores_single_right_link() {
        let mut tree = Tree::new();
        let a = tree.alloc(1);
        let b = tree.alloc(2);
        tree.set_right(a, Some(b));
        assert_eq!(tree.split(a), a);

        let c = tree.alloc(3);
        tree.node_mut(a).level = 2;
        tree.node_mut(b).level = 2;
        tree.set_right(b, Some(c));
        assert_eq!(tree.split(a), a);
        assert_eq!(tree.node(b).level, 2);
    }

    #[test]
    fn insert_shape_regr1() {
        let tree = tree_of(&[5, 3, 8, 1, 4]);
        println!("{:?}", tree);

        // (lv: 2 3 (lv: 1 1 . .) (lv: 2 5 (lv: 1 4 . .) (lv: 1 8 . .)))
        let root = tree.root.unwrap();
        assert_eq!(*tree.value(root), 3);
        assert_eq!(tree.node(root).level, 2);
        let r = tree.right(root).unwrap();
        assert_eq!(*tree.value(r), 5);
        assert_eq!(tree.node(r).level, 2);
        assert_eq!(values(&tree), vec![1, 3, 4, 5, 8]);
    }

    #[test]
    fn remove_interior_regr1() {
        let mut tree = tree_of(&[5, 3, 8, 1, 4]);
        assert_eq!(tree.remove(&3), Some(3));
        println!("{:?}", tree);

        // (lv: 2 4 (lv: 1 1 . .) (lv: 1 5 . (lv: 1 8 . .)))
        let root = tree.root.unwrap();
        assert_eq!(*tree.value(root), 4);
        assert_eq!(tree.node(root).level, 2);
        assert_eq!(values(&tree), vec![1, 4, 5, 8]);
        assert_eq!(tree.find(&3), None);
        assert_eq!(tree.lower_bound(&6).map(|n| *tree.value(n)), Some(8));
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut tree = tree_of(&[2, 4, 6]);
        let before = format!("{:?}", tree);
        assert_eq!(tree.remove(&5), None);
        assert_eq!(format!("{:?}", tree), before);
        assert_eq!(tree.len, 3);
    }

    #[test]
    fn remove_last_reclaims_arena() {
        let mut tree = tree_of(&[10]);
        assert_eq!(tree.remove(&10), Some(10));
        assert!(tree.root.is_none());
        assert!(tree.first.is_none() && tree.last.is_none());
        assert!(tree.slots.is_empty() && tree.vacant.is_empty());
    }

    #[test]
    fn vacant_slots_are_reused() {
        let mut tree = tree_of(&[1, 2, 3, 4]);
        tree.remove(&2);
        tree.remove(&3);
        tree.insert(7);
        tree.insert(8);
        assert_eq!(tree.slots.len(), 4);
        assert_eq!(values(&tree), vec![1, 4, 7, 8]);
    }

    #[test]
    fn bounds_test() {
        let tree = tree_of(&[10, 20, 30, 40]);
        let lb = |k| tree.lower_bound(&k).map(|n| *tree.value(n));
        let ub = |k| tree.upper_bound(&k).map(|n| *tree.value(n));

        assert_eq!(lb(5), Some(10));
        assert_eq!(lb(10), Some(10));
        assert_eq!(lb(11), Some(20));
        assert_eq!(lb(40), Some(40));
        assert_eq!(lb(41), None);

        assert_eq!(ub(5), Some(10));
        assert_eq!(ub(10), Some(20));
        assert_eq!(ub(39), Some(40));
        assert_eq!(ub(40), None);
    }

    #[test]
    fn pop_ends_test() {
        let mut tree = tree_of(&[3, 1, 4, 5, 9, 2, 6]);
        assert_eq!(tree.pop_first(), Some(1));
        assert_eq!(tree.pop_last(), Some(9));
        assert_eq!(values(&tree), vec![2, 3, 4, 5, 6]);
        tree.check().unwrap();

        let mut empty: Tree<i32> = Tree::new();
        assert_eq!(empty.pop_first(), None);
        assert_eq!(empty.pop_last(), None);
    }

    #[test]
    fn clone_packs_and_preserves_shape() {
        let mut tree = tree_of(&(0..64).collect::<Vec<_>>());
        for k in (0..64).step_by(3) {
            tree.remove(&k);
        }

        let copy = tree.clone();
        copy.check().unwrap();
        assert_eq!(copy.slots.len(), tree.len);
        assert!(copy.vacant.is_empty());
        assert_eq!(format!("{:?}", copy), format!("{:?}", tree));
    }

    #[test]
    fn rm_each_test() {
        // build in order to encourage right-leaning runs
        let tree = {
            let mut t = Tree::new();
            (0..32).for_each(|x| {
                t.insert(x);
            });
            t
        };
        chk_all_removes(tree);

        // and in reverse to exercise skews
        let tree = {
            let mut t = Tree::new();
            (0..32).rev().for_each(|x| {
                t.insert(x);
            });
            t
        };
        chk_all_removes(tree);
    }

    #[test]
    fn bal_test_regr1() {
        bal_test(vec![4, 0, 5, 1, 2, 3]);
    }

    #[test]
    fn rm_test_regr1() {
        rm_test(vec![101, 100, 1, -100]);
    }

    #[test]
    fn rm_test_regr2() {
        rm_test(vec![
            99, 1, 103, 3, 98, 2, 8, 4, 5, 6, 7, 102, 9, 97, -102, 10, -97,
        ]);
    }

    #[test]
    fn rm_test_regr3() {
        rm_test(vec![31, 14, 1, 15, 32, 16, 17, -14, -31]);
    }

    quickcheck! {
        fn qc_bal_test(vs: Vec<u8>) -> () {
            bal_test(vs);
        }

        fn qc_rm_test(vs: Vec<i8>) -> () {
            rm_test(vs);
        }

        fn qc_rm_test2(vs: Vec<u8>) -> () {
            let mut tree = Tree::new();
            for v in vs {
                tree.insert(v);
            }
            chk_all_removes(tree);
        }
    }
}
