use thiserror::Error;

/// Errors raised while encoding or decoding a Huffman bitstream. None of
/// these are retried internally; every failure aborts the whole operation
/// and surfaces to the caller.
#[derive(Error, Debug)]
pub enum CodingError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no code for symbol {0:#04x}; the input does not match the code table")]
    MissingCode(u8),

    #[error("bit stream ended before the last code path completed")]
    TruncatedStream,

    #[error("bit stream carries data but the code tree is empty")]
    EmptyTree,

    #[error("decoded {found} symbols but the header declared {expected}")]
    CountMismatch { expected: u64, found: u64 },

    #[error("invalid header: {0}")]
    InvalidHeader(String),
}
