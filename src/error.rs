//! Error types for Huffman coding.

use thiserror::Error;

/// Error variants for Huffman coding operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The input contained no symbols to analyze.
    #[error("empty input: no symbols to analyze")]
    EmptyInput,

    /// A symbol has no entry in the encoding table.
    #[error("no code for symbol {symbol:#04x}")]
    InvalidCode {
        /// The symbol that could not be encoded.
        symbol: u8,
    },

    /// The encoded bit stream ended in the middle of a code.
    #[error("encoded stream truncated mid-code at bit {position}")]
    TruncatedStream {
        /// Offset of the first digit of the unfinished code.
        position: usize,
    },

    /// An I/O error occurred while reading or writing a file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for Huffman coding operations.
pub type Result<T> = std::result::Result<T, Error>;
