//! Typed failures for network file decoding and encoding.

/// Errors that can occur while decoding a network file.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The buffer ended before the format was fully read.
    #[error("truncated input: needed {needed} more bytes, {remaining} left")]
    Truncated {
        /// Bytes the current read required.
        needed: usize,
        /// Bytes left in the buffer.
        remaining: usize,
    },

    /// The header names a feature set this decoder does not know.
    #[error("unknown feature set: \"{tag}\"")]
    UnknownFeatureSet {
        /// The tag read from the header.
        tag: String,
    },

    /// Bytes remain after the final layer; the file does not match the
    /// fixed topology implied by its feature set.
    #[error("{remaining} trailing bytes after the final layer")]
    TrailingBytes {
        /// Unconsumed byte count.
        remaining: usize,
    },

    /// An I/O error occurred while reading the file from disk.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

/// Errors that can occur while encoding a network to bytes.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// A value does not fit the integer width its layer position declares.
    #[error("value {value} does not fit {bits}-bit storage")]
    ValueOutOfRange {
        /// The offending value.
        value: i32,
        /// The declared element width in bits.
        bits: u32,
    },
}
