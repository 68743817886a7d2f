use std::fmt::{Display, Formatter};

use rustc_hash::FxHashMap;

use super::tree::{CodeTree, Node, NodeData};

/// One symbol's bit path: the root-to-leaf walk packed most significant
/// bit first into `bits`, with `len` valid low bits. '0' is a left step,
/// '1' a right step. Symbol counts are u32, which keeps the total tree
/// weight below 2^40 and the deepest reachable leaf well inside 64 steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code {
    pub bits: u64,
    pub len: u8,
}

impl Code {
    /// Extend the path by one step.
    fn step(self, bit: u64) -> Code {
        Code {
            bits: self.bits << 1 | bit,
            len: self.len + 1,
        }
    }

    /// True if this path matches the leading steps of the other path.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len <= other.len && other.bits >> (other.len - self.len) == self.bits
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for i in (0..self.len).rev() {
            write!(f, "{}", self.bits >> i & 1)?;
        }
        Ok(())
    }
}

/// Symbol -> bit-path lookup used by the encoder. The decoder never
/// touches this; it descends the tree instead.
pub type CodeTable = FxHashMap<u8, Code>;

/// Derive the code table for a finalized tree: walk from the root,
/// accumulate '0' on each left step and '1' on each right step, and record
/// the accumulated path at each leaf. Pure function of the tree.
///
/// A tree whose root is itself a leaf (one distinct symbol) gets the fixed
/// one-bit code 0: the bare root-to-leaf walk would yield a zero-length
/// path, and zero bits cannot mark symbol boundaries in the stream.
pub fn code_table(tree: &CodeTree) -> CodeTable {
    let mut table = CodeTable::default();
    match &tree.root.node_data {
        NodeData::Leaf(symbol) => {
            table.insert(*symbol, Code { bits: 0, len: 1 });
        }
        NodeData::Kids(_, _) => {
            walk(&tree.root, Code { bits: 0, len: 0 }, &mut table);
        }
    }
    table
}

fn walk(node: &Node, path: Code, table: &mut CodeTable) {
    match &node.node_data {
        NodeData::Leaf(symbol) => {
            table.insert(*symbol, path);
        }
        NodeData::Kids(left, right) => {
            walk(left, path.step(0), table);
            walk(right, path.step(1), table);
        }
    }
}
