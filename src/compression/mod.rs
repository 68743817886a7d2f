//! The compression module manages the file-level side of huffzip.
//!
//! Compression happens in the following steps:
//! - Frequency analysis: count every byte value over the whole input.
//! - Tree construction: greedy weight-minimizing merges into one prefix-code tree.
//! - Code table derivation: walk the tree to get each symbol's bit path.
//! - Huffman coding: replace each input byte with its bit path.
//!
//! Decompression is the inverse. The frame carries the frequency table,
//! the decompressor rebuilds the tree from it (tree construction is fully
//! deterministic, so both sides always hold the identical tree), then
//! walks the tree bit by bit to recover the original stream.
//!
//! On-disk frame, fixed once for both sides:
//! - magic: the 3 bytes "HFz".
//! - version: 1 byte, currently 0x01.
//! - symbol count: u16 big-endian, number of distinct symbols (0-256).
//! - entries: symbol count repetitions of symbol byte + u32 big-endian
//!   occurrence count, in ascending symbol order.
//! - bit count: u64 big-endian, the exact number of payload bits.
//! - payload: the coded bits, packed most significant bit first; the
//!   final partial byte is zero-padded in its least significant bits.
//!
//! The bit count is what keeps the two sides aligned: the reader stops on
//! the last real bit, the pad is never decoded, and a truncated file is
//! always detected because the declared bits outlast the data.
//!
pub mod compress;
pub mod decompress;
