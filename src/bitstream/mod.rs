//! The bitstream module is the bit-level I/O subsystem for huffzip.
//!
//! Huffman coded data is a stream of individual bits, not bytes, so both
//! sides of the codec talk to these two types instead of touching the
//! underlying byte stream directly:
//!
//! - bitwriter: a bit sink that packs pushed bits into bytes, most
//!   significant bit first, and zero-pads the final partial byte on flush.
//! - bitreader: a bit source over anything readable, yielding bits in the
//!   exact order the writer emitted them, with an optional bit budget so
//!   end-of-stream lands on the last real payload bit rather than inside
//!   the pad.
//!
//! This subsystem is designed for the needs of the huffzip codec. It has
//! not been generalized for wider use.
//!
pub mod bitreader;
pub mod bitwriter;
