//! The huffman module is the coding core of huffzip: it turns a frequency
//! table into a prefix-code tree, derives the symbol bit paths from that
//! tree, and runs the bit-level encode and decode state machines.
//!
//! Huffman coding is a static, two-pass scheme. Frequencies are counted
//! over the whole input before any encoding begins, so every symbol's code
//! is fixed for the duration of the stream. Symbols that occur often get
//! short bit paths, rare symbols get long ones, and because every code is
//! a root-to-leaf path in one strict binary tree, no code is a prefix of
//! another and the stream needs no delimiters.
//!
//! The pieces, in pipeline order:
//! - tree: the prefix-code tree itself (leaf and inner nodes, weights).
//! - tree_build: greedy weight-minimizing merges from a frequency table.
//! - code_table: symbol -> bit path derivation by tree walk.
//! - encode: symbol stream in, bit stream out.
//! - decode: bit stream in, symbol stream out, driven by tree descent.
//! - error: everything that can go wrong on either side.
//!
pub mod code_table;
pub mod decode;
pub mod encode;
pub mod error;
pub mod tree;
pub mod tree_build;
