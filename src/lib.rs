//! A Rust library for Huffman coding of text.
//!
//! This crate builds an optimal prefix-free code for the symbols of a text from
//! their frequencies, and uses it to encode text into strings of path markers
//! and to decode those strings back, losslessly.
//!
//! # Quick Start
//!
//! ```
//! use huffman_codec::{build_tree, count, decode, derive_code_table, encode};
//!
//! let freq = count("moonman and mona");
//! let tree = build_tree(&freq)?;
//! let table = derive_code_table(&tree);
//!
//! let encoded = encode(&table, "mona")?;
//! assert!(encoded.chars().all(|c| c == '.' || c == '^'));
//! assert_eq!(decode(&tree, &encoded)?, "mona");
//! # Ok::<(), huffman_codec::HuffmanError>(())
//! ```
//!
//! # Features
//!
//! - **Deterministic trees**: ties between equal weights follow a documented [`TieBreak`] policy
//! - **Configurable markers**: any two distinct characters can spell the paths
//! - **Strict decoding**: truncated or foreign input is an error, never a partial result
//! - **Bit packing**: [`pack::PackedBits`] turns marker strings into bytes
//!
//! Every tree, table and codec is owned by one session; nothing is shared or
//! synchronized between callers.

// Core modules
pub mod huffman;
pub mod pack;
pub mod utils;

// Public pipeline API
pub use huffman::{
    build_tree, build_tree_with, count, decode, decode_with, derive_code_table,
    derive_code_table_with, encode,
};

// Types
pub use huffman::{
    Branch, CodeTable, CodecBuilder, CompressionStats, FrequencyTable, HuffmanCodec, HuffmanNode,
    HuffmanTree, MergeOrder, PathAlphabet, TieBreak, LEFT_MARKER, RIGHT_MARKER,
};
pub use pack::PackedBits;

// Error types
pub use utils::error::{HuffmanError, MalformedKind, Result};

// Constants
pub const HUFFMAN_CODEC_VERSION: &str = "0.1.0";
