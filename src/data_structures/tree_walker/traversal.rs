//! Depth-first and breadth-first traversal over any [`TreeWalker`].
//!
//! Both traversals keep an explicit worklist of nodes. Children are obtained
//! by descending into them and immediately ascending back, so the cursor
//! returns to the node whose children are being enumerated before the next
//! sibling is fetched.

use std::collections::VecDeque;

use super::{Node, TreeWalker};

/// Which end of the worklist the next node is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Order {
    /// Worklist used as a stack
    DepthFirst,
    /// Worklist used as a queue
    RowOrder,
}

/// Visits nodes depth-first starting from the walker's current node.
///
/// Children are pushed in reverse so the leftmost child is visited first.
/// See [`TreeWalker::walk_depth_first`].
pub fn walk_depth_first<W, F>(walker: &mut W, visit: F, return_to_root: bool) -> Result<(), W::Error>
where
    W: TreeWalker + ?Sized,
    F: FnMut(&Node<W::Item>) -> bool,
{
    walk(walker, visit, return_to_root, Order::DepthFirst)
}

/// Visits nodes breadth-first starting from the walker's current node.
///
/// See [`TreeWalker::walk_row_order`].
pub fn walk_row_order<W, F>(walker: &mut W, visit: F, return_to_root: bool) -> Result<(), W::Error>
where
    W: TreeWalker + ?Sized,
    F: FnMut(&Node<W::Item>) -> bool,
{
    walk(walker, visit, return_to_root, Order::RowOrder)
}

fn walk<W, F>(walker: &mut W, visit: F, return_to_root: bool, order: Order) -> Result<(), W::Error>
where
    W: TreeWalker + ?Sized,
    F: FnMut(&Node<W::Item>) -> bool,
{
    let Some(start) = walker.current_node().cloned() else {
        return Ok(());
    };
    traverse(walker, start, visit, order)?;
    if return_to_root {
        walker.go_to_root()?;
    }
    Ok(())
}

fn traverse<W, F>(walker: &mut W, start: Node<W::Item>, mut visit: F, order: Order) -> Result<(), W::Error>
where
    W: TreeWalker + ?Sized,
    F: FnMut(&Node<W::Item>) -> bool,
{
    let mut worklist = VecDeque::from([start]);
    loop {
        let next = match order {
            Order::DepthFirst => worklist.pop_back(),
            Order::RowOrder => worklist.pop_front(),
        };
        let Some(node) = next else {
            break;
        };
        if !visit(&node) {
            break;
        }

        match order {
            Order::DepthFirst => {
                for child in node.descendants.iter().rev() {
                    enqueue_child(walker, child, &mut worklist)?;
                }
            }
            Order::RowOrder => {
                for child in &node.descendants {
                    enqueue_child(walker, child, &mut worklist)?;
                }
            }
        }
    }
    Ok(())
}

/// Steps into `child`, records it and steps back out.
fn enqueue_child<W>(
    walker: &mut W,
    child: &W::Item,
    worklist: &mut VecDeque<Node<W::Item>>,
) -> Result<(), W::Error>
where
    W: TreeWalker + ?Sized,
{
    if let Some(resolved) = walker.go_to_child(child)? {
        worklist.push_back(resolved);
        walker.go_to_parent()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    /// Tree stored as parent links; node payloads are their own indices.
    struct IndexTree {
        labels: Vec<char>,
        parents: Vec<Option<usize>>,
        current: Option<Node<usize>>,
        moves: usize,
    }

    impl IndexTree {
        fn new(labels: &str, parents: Vec<Option<usize>>) -> Self {
            let mut tree = Self {
                labels: labels.chars().collect(),
                parents,
                current: None,
                moves: 0,
            };
            let root = (!tree.labels.is_empty()).then(|| tree.snapshot(0));
            tree.current = root;
            tree
        }

        /// The tree drawn on `TreeWalker::walk_depth_first`.
        fn sample() -> Self {
            let mut parents = vec![None, Some(0), Some(0), Some(0)];
            for parent in 1..=3 {
                parents.extend([Some(parent); 3]);
            }
            Self::new("1234567890123", parents)
        }

        fn snapshot(&self, index: usize) -> Node<usize> {
            let children = (0..self.parents.len())
                .filter(|&i| self.parents[i] == Some(index))
                .collect();
            Node::new(index, children)
        }

        fn labels_of(&self, visited: &[usize]) -> String {
            visited.iter().map(|&i| self.labels[i]).collect()
        }
    }

    impl TreeWalker for IndexTree {
        type Item = usize;
        type Error = Infallible;

        fn current_node(&self) -> Option<&Node<usize>> {
            self.current.as_ref()
        }

        fn go_to_child(&mut self, child: &usize) -> Result<Option<Node<usize>>, Infallible> {
            if self.current.is_none() || *child >= self.labels.len() {
                return Ok(None);
            }
            self.moves += 1;
            let node = self.snapshot(*child);
            self.current = Some(node.clone());
            Ok(Some(node))
        }

        fn go_to_parent(&mut self) -> Result<Option<Node<usize>>, Infallible> {
            let parent = self
                .current
                .as_ref()
                .and_then(|node| self.parents[node.value]);
            Ok(parent.map(|index| {
                self.moves += 1;
                let node = self.snapshot(index);
                self.current = Some(node.clone());
                node
            }))
        }
    }

    fn collect(tree: &mut IndexTree, order: Order, limit: usize) -> Vec<usize> {
        let mut visited = Vec::new();
        let visit = |node: &Node<usize>| {
            visited.push(node.value);
            visited.len() < limit
        };
        match order {
            Order::DepthFirst => walk_depth_first(tree, visit, true),
            Order::RowOrder => walk_row_order(tree, visit, true),
        }
        .unwrap();
        visited
    }

    #[test]
    fn test_depth_first_order() {
        let mut tree = IndexTree::sample();
        let visited = collect(&mut tree, Order::DepthFirst, usize::MAX);
        assert_eq!(tree.labels_of(&visited), "1256738904123");
    }

    #[test]
    fn test_row_order() {
        let mut tree = IndexTree::sample();
        let visited = collect(&mut tree, Order::RowOrder, usize::MAX);
        assert_eq!(tree.labels_of(&visited), "1234567890123");
    }

    #[test]
    fn test_early_stop() {
        let mut tree = IndexTree::sample();
        let visited = collect(&mut tree, Order::RowOrder, 3);
        assert_eq!(tree.labels_of(&visited), "123");

        let visited = collect(&mut tree, Order::DepthFirst, 4);
        assert_eq!(tree.labels_of(&visited), "1256");
    }

    #[test]
    fn test_returns_to_root() {
        let mut tree = IndexTree::sample();
        collect(&mut tree, Order::DepthFirst, usize::MAX);
        assert_eq!(tree.current_node().map(|n| n.value), Some(0));
    }

    #[test]
    fn test_cursor_left_in_place_without_return() {
        let mut tree = IndexTree::sample();
        walk_row_order(&mut tree, |_| true, false).unwrap();
        // Last enumerated children belong to node 3, so the cursor ends there.
        assert_eq!(tree.current_node().map(|n| n.value), Some(3));
    }

    #[test]
    fn test_empty_tree_is_noop() {
        let mut tree = IndexTree::new("", Vec::new());
        let visited = collect(&mut tree, Order::DepthFirst, usize::MAX);
        assert!(visited.is_empty());
        assert_eq!(tree.moves, 0);
        assert!(tree.go_to_root().is_ok());
    }

    #[test]
    fn test_go_to_parent_at_root_keeps_cursor() {
        let mut tree = IndexTree::sample();
        assert_eq!(tree.go_to_parent().unwrap(), None);
        assert_eq!(tree.current_node().map(|n| n.value), Some(0));
    }
}
