// src/huffman/mod.rs

//! Huffman coding over text symbols.
//!
//! ## Pipeline
//!
//! 1. **Counting** (`frequency`) - tabulate how often each `char` occurs
//! 2. **Tree building** (`queue` + `tree`) - merge the two lightest nodes until one remains
//! 3. **Table derivation** (`table`) - spell each root-to-leaf path with two markers
//! 4. **Encoding / decoding** (`encoder`, `decoder`) - table lookup one way, tree walk the other
//!
//! `codec` wraps all four behind a configurable session type.

pub mod codec;
pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod frequency;
pub mod queue;
pub mod table;
pub mod tree;


pub use codec::{CodecBuilder, CompressionStats, HuffmanCodec};
pub use constants::{LEFT_MARKER, RIGHT_MARKER};
pub use decoder::{decode, decode_with};
pub use encoder::encode;
pub use frequency::{count, FrequencyTable};
pub use queue::{MergeOrder, TieBreak};
pub use table::{derive_code_table, derive_code_table_with, Branch, CodeTable, PathAlphabet};
pub use tree::{build_tree, build_tree_with, HuffmanNode, HuffmanTree};
