use std::cmp::Ordering;

use log::debug;

use super::tree::{CodeTree, Node};

/// A node waiting in the merge queue. `seq` is a creation-order tag that
/// makes the queue order total: leaves get 0..n in ascending symbol order,
/// merged nodes take the numbers after that.
#[derive(Eq, Debug)]
struct Queued {
    seq: u32,
    node: Node,
}

impl Queued {
    fn new(seq: u32, node: Node) -> Queued {
        Queued { seq, node }
    }
}

/// Queue priority: ascending weight; at equal weight merged nodes come out
/// before leaves, and remaining ties resolve by creation order. The
/// comparison is inverted (lightest ranks greatest) so that sorting the
/// queue ascending leaves the next node to merge at the back, where pop()
/// can reach it.
impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .node
            .weight
            .cmp(&self.node.weight)
            .then_with(|| other.node.is_leaf().cmp(&self.node.is_leaf()))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

/// Reduce a frequency table to a single prefix-code tree by greedy
/// weight-minimizing merges: seed one leaf per distinct symbol, then
/// repeatedly merge the two minimum nodes (first out becomes the left
/// child) until one node remains. The queue order is a documented total
/// order, so the same table always produces the identical tree and
/// therefore identical compressed output.
///
/// Returns None when the table holds no symbols at all; callers treat the
/// missing tree as the valid empty state.
pub fn build_tree(freqs: &[u32]) -> Option<CodeTree> {
    let mut seq = 0_u32;

    // One leaf per distinct symbol, in ascending symbol order.
    let mut queue: Vec<Queued> = freqs
        .iter()
        .enumerate()
        .filter(|(_, &count)| count > 0)
        .map(|(symbol, &count)| {
            let queued = Queued::new(seq, Node::leaf(symbol as u8, count as u64));
            seq += 1;
            queued
        })
        .collect();

    if queue.is_empty() {
        return None;
    }
    debug!("Seeded {} leaves into the merge queue", queue.len());

    // ...then pare it down to one single node - keep it sorted so pop()
    // always yields the minimum.
    while queue.len() > 1 {
        queue.sort_unstable();
        let left = queue.pop().unwrap().node;
        let right = queue.pop().unwrap().node;
        queue.push(Queued::new(seq, Node::merge(left, right)));
        seq += 1;
    }

    Some(CodeTree {
        root: queue.pop().unwrap().node,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::tree::NodeData;
    use crate::tools::freq_count::freqs;

    /// Every inner node must weigh exactly as much as its children together.
    fn weights_consistent(node: &Node) -> bool {
        match &node.node_data {
            NodeData::Leaf(_) => true,
            NodeData::Kids(left, right) => {
                node.weight == left.weight + right.weight
                    && weights_consistent(left)
                    && weights_consistent(right)
            }
        }
    }

    #[test]
    fn empty_table_builds_no_tree_test() {
        assert!(build_tree(&freqs(b"")).is_none());
    }

    #[test]
    fn single_symbol_is_root_leaf_test() {
        let tree = build_tree(&freqs(b"aaaa")).unwrap();
        assert!(tree.root.is_leaf());
        assert_eq!(tree.root.node_data, NodeData::Leaf(b'a'));
        assert_eq!(tree.total_weight(), 4);
    }

    #[test]
    fn weight_invariant_test() {
        let data = b"abracadabra";
        let tree = build_tree(&freqs(data)).unwrap();
        assert!(weights_consistent(&tree.root));
        assert_eq!(tree.total_weight(), data.len() as u64);
        assert_eq!(tree.leaf_count(), 5);
    }

    #[test]
    fn deterministic_build_test() {
        let counts = freqs(b"abracadabra");
        assert_eq!(build_tree(&counts).unwrap(), build_tree(&counts).unwrap());
    }

    #[test]
    fn two_symbols_test() {
        let tree = build_tree(&freqs(b"aab")).unwrap();
        assert_eq!(tree.height(), 1);
        match &tree.root.node_data {
            // b is lighter, so it comes out of the queue first and sits left.
            NodeData::Kids(left, right) => {
                assert_eq!(left.node_data, NodeData::Leaf(b'b'));
                assert_eq!(right.node_data, NodeData::Leaf(b'a'));
            }
            NodeData::Leaf(_) => panic!("two symbols need an inner root"),
        }
    }

    #[test]
    fn equal_weights_stay_reproducible_test() {
        // Eight symbols, all the same count: the tie-break alone decides
        // the shape, and it must decide it the same way every time.
        let data = b"hgfedcbahgfedcba";
        let first = build_tree(&freqs(data)).unwrap();
        let second = build_tree(&freqs(data)).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.height(), 3);
    }
}
