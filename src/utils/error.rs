// src/utils/error.rs

use std::fmt;

use thiserror::Error;

/// Why a marker string failed to resolve into whole codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    /// The input ended before the current walk reached a leaf.
    Truncated,
    /// A character that is neither the left nor the right marker.
    UnrecognizedMarker(char),
    /// The marker names a child the current node does not have.
    MissingChild,
}

impl fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedKind::Truncated => write!(f, "input ends in the middle of a code"),
            MalformedKind::UnrecognizedMarker(c) => write!(f, "unrecognized marker {:?}", c),
            MalformedKind::MissingChild => write!(f, "marker leads to a child that does not exist"),
        }
    }
}

/// The primary error type for all codec operations.
#[derive(Error, Debug)]
pub enum HuffmanError {
    #[error("Cannot build a Huffman tree from an empty alphabet")]
    EmptyAlphabet,

    #[error("Symbol {symbol:?} at position {position} has no code in the table")]
    UnknownSymbol { symbol: char, position: usize },

    #[error("Malformed encoding at position {position}: {kind}")]
    MalformedEncoding { position: usize, kind: MalformedKind },

    #[error("Combined symbol weight overflows u64")]
    WeightOverflow,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for codec operations.
pub type Result<T> = std::result::Result<T, HuffmanError>;
