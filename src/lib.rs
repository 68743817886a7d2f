//! A static Huffman coding file compressor.
//!
//! Provides lossless compression and decompression of files using a
//! two-pass scheme: the first pass counts symbol frequencies and builds an
//! optimal prefix-code tree, the second pass replaces each symbol with its
//! bit path through that tree. Decompression walks the same tree one bit
//! at a time.
//!
//! Basic usage to compress a file:
//!
//! `$> huffzip -z test.txt`
//!
//! This creates test.txt.hfz and removes the original (pass -k to keep it).
//! Decompress with:
//!
//! `$> huffzip -d test.txt.hfz`
//!
pub mod bitstream;
pub mod compression;
pub mod huffman_coding;
pub mod tools;
