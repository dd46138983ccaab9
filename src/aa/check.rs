use super::{NodeId, Tree};
use std::fmt;

/// The first broken invariant found by [`AaSet::check`](super::AaSet::check).
///
/// Levels are reported rather than elements so that the error carries no
/// bounds on the element type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A node without children is above level 1.
    LeafLevel {
        /// Level of the offending leaf.
        level: usize,
    },

    /// A left child is not exactly one level below its parent.
    LeftChildLevel {
        /// Level of the parent.
        parent: usize,
        /// Level of the left child.
        child: usize,
    },

    /// A right child is above its parent or more than one level below it.
    RightChildLevel {
        /// Level of the parent.
        parent: usize,
        /// Level of the right child.
        child: usize,
    },

    /// Three nodes share a level along a chain of right links.
    RightGrandchildLevel {
        /// The shared level.
        level: usize,
    },

    /// A node above level 1 is missing a child.
    MissingChild {
        /// Level of the offending node.
        level: usize,
    },

    /// An in-order traversal did not produce strictly increasing elements.
    OutOfOrder,

    /// A child does not link back to its parent, or the root has a parent.
    ParentLink,

    /// The tracked length disagrees with the number of reachable nodes.
    Len {
        /// Length the set reports.
        tracked: usize,
        /// Nodes reachable from the root.
        counted: usize,
    },

    /// The cached first or last position is not the leftmost or rightmost
    /// node.
    StaleExtremes,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use InvariantViolation::*;

        match *self {
            LeafLevel { level } => write!(f, "leaf at level {level}"),
            LeftChildLevel { parent, child } => write!(
                f,
                "left child at level {child} under parent at level {parent}"
            ),
            RightChildLevel { parent, child } => write!(
                f,
                "right child at level {child} under parent at level {parent}"
            ),
            RightGrandchildLevel { level } => {
                write!(f, "three nodes at level {level} linked rightward")
            }
            MissingChild { level } => {
                write!(f, "node at level {level} has fewer than two children")
            }
            OutOfOrder => f.write_str("elements out of order"),
            ParentLink => f.write_str("inconsistent parent link"),
            Len { tracked, counted } => {
                write!(f, "length is {tracked} but {counted} nodes are reachable")
            }
            StaleExtremes => f.write_str("cached first or last node is stale"),
        }
    }
}

impl std::error::Error for InvariantViolation {}

impl<T: Ord> Tree<T> {
    pub(crate) fn check(&self) -> Result<(), InvariantViolation> {
        use InvariantViolation::*;

        if self.root.is_some_and(|r| self.parent(r).is_some()) {
            return Err(ParentLink);
        }

        let mut counted = 0;
        let mut work: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(n) = work.pop() {
            counted += 1;
            let node = self.node(n);
            let level = node.level;

            if node.is_leaf() && level != 1 {
                return Err(LeafLevel { level });
            }

            if level > 1 && (node.left.is_none() || node.right.is_none()) {
                return Err(MissingChild { level });
            }

            if let Some(l) = node.left {
                let child = self.node(l);
                if child.parent != Some(n) {
                    return Err(ParentLink);
                }

                if child.level + 1 != level {
                    return Err(LeftChildLevel {
                        parent: level,
                        child: child.level,
                    });
                }

                work.push(l);
            }

            if let Some(r) = node.right {
                let child = self.node(r);
                if child.parent != Some(n) {
                    return Err(ParentLink);
                }

                if child.level > level || child.level + 1 < level {
                    return Err(RightChildLevel {
                        parent: level,
                        child: child.level,
                    });
                }

                if self.level(child.right) >= level {
                    return Err(RightGrandchildLevel { level });
                }

                work.push(r);
            }
        }

        if counted != self.len {
            return Err(Len {
                tracked: self.len,
                counted,
            });
        }

        let first = self.root.map(|r| self.leftmost(r));
        let last = self.root.map(|r| self.rightmost(r));
        if first != self.first || last != self.last {
            return Err(StaleExtremes);
        }

        // parent links are sound by now, so the successor walk terminates
        let mut prev: Option<&T> = None;
        let mut curr = self.first;
        while let Some(n) = curr {
            let v = self.value(n);
            if prev.is_some_and(|p| p >= v) {
                return Err(OutOfOrder);
            }
            prev = Some(v);
            curr = self.successor(n);
        }

        Ok(())
    }
}
