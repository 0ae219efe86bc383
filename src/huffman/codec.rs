// src/huffman/codec.rs

//! Codec sessions.
//!
//! A [`HuffmanCodec`] bundles the tree, the code table derived from it, and
//! the marker alphabet, so that encode and decode always agree. Sessions are
//! configured with [`CodecBuilder`]:
//!
//! ```
//! use huffman_codec::{CodecBuilder, TieBreak};
//!
//! let codec = CodecBuilder::new()
//!     .with_markers('0', '1')
//!     .with_tie_break(TieBreak::LowestSymbol)
//!     .train("these pretzels are making me thirsty")?;
//!
//! let encoded = codec.encode("stray mirth")?;
//! assert!(encoded.chars().all(|c| c == '0' || c == '1'));
//! assert_eq!(codec.decode(&encoded)?, "stray mirth");
//! # Ok::<(), huffman_codec::HuffmanError>(())
//! ```

use log::debug;

use super::constants::{LEFT_MARKER, RIGHT_MARKER};
use super::decoder::decode_with;
use super::encoder::encode;
use super::frequency::{count, FrequencyTable};
use super::queue::TieBreak;
use super::table::{derive_code_table_with, CodeTable, PathAlphabet};
use super::tree::{build_tree_with, HuffmanTree};
use crate::utils::error::Result;

/// Configuration for a codec session.
#[derive(Debug, Clone, Copy)]
pub struct CodecBuilder {
    left: char,
    right: char,
    tie_break: TieBreak,
}

impl CodecBuilder {
    /// Starts from the default `.` / `^` markers and [`TieBreak::Arrival`].
    pub fn new() -> Self {
        Self {
            left: LEFT_MARKER,
            right: RIGHT_MARKER,
            tie_break: TieBreak::default(),
        }
    }

    /// Sets the markers for left and right descents. They are validated when
    /// the codec is built.
    pub fn with_markers(mut self, left: char, right: char) -> Self {
        self.left = left;
        self.right = right;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Builds a codec for the symbols of `freq`.
    pub fn build(&self, freq: &FrequencyTable) -> Result<HuffmanCodec> {
        let alphabet = PathAlphabet::new(self.left, self.right)?;
        let tree = build_tree_with(freq, self.tie_break)?;
        let table = derive_code_table_with(&tree, alphabet);
        debug!(
            "codec ready: {} symbols, markers {:?}/{:?}, tie break {:?}",
            table.len(),
            alphabet.left(),
            alphabet.right(),
            self.tie_break
        );
        Ok(HuffmanCodec {
            tree,
            table,
            alphabet,
        })
    }

    /// Counts `corpus` and builds a codec for its symbols.
    pub fn train(&self, corpus: &str) -> Result<HuffmanCodec> {
        self.build(&count(corpus))
    }
}

impl Default for CodecBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A tree, its code table and its marker alphabet.
#[derive(Debug, Clone)]
pub struct HuffmanCodec {
    tree: HuffmanTree,
    table: CodeTable,
    alphabet: PathAlphabet,
}

impl HuffmanCodec {
    /// Builds a codec with the default configuration.
    pub fn from_frequencies(freq: &FrequencyTable) -> Result<Self> {
        CodecBuilder::new().build(freq)
    }

    /// Encodes `input`; every symbol must occur in the training frequencies.
    pub fn encode(&self, input: &str) -> Result<String> {
        encode(&self.table, input)
    }

    pub fn decode(&self, encoded: &str) -> Result<String> {
        decode_with(&self.tree, encoded, self.alphabet)
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn code_table(&self) -> &CodeTable {
        &self.table
    }

    pub fn alphabet(&self) -> PathAlphabet {
        self.alphabet
    }

    /// Size comparison between `input` and its encoding.
    pub fn stats(&self, input: &str, encoded: &str) -> CompressionStats {
        CompressionStats {
            symbols: input.chars().count(),
            original_bits: input.len() * 8,
            encoded_bits: encoded.chars().count(),
        }
    }
}

/// Size of a text before and after encoding, counting one bit per marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStats {
    pub symbols: usize,
    /// UTF-8 size of the input, in bits.
    pub original_bits: usize,
    pub encoded_bits: usize,
}

impl CompressionStats {
    /// Original size over encoded size; higher is better. Returns 0.0 when
    /// nothing was encoded.
    pub fn ratio(&self) -> f64 {
        if self.encoded_bits == 0 {
            return 0.0;
        }
        self.original_bits as f64 / self.encoded_bits as f64
    }

    /// Average code length. Returns 0.0 for an empty input.
    pub fn bits_per_symbol(&self) -> f64 {
        if self.symbols == 0 {
            return 0.0;
        }
        self.encoded_bits as f64 / self.symbols as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::HuffmanError;

    #[test]
    fn test_builder_defaults() {
        let codec = CodecBuilder::default().train("abracadabra").expect("non-empty");
        assert_eq!(codec.alphabet(), PathAlphabet::default());
        assert_eq!(codec.decode(&codec.encode("cadabra").expect("known")).expect("valid"), "cadabra");
    }

    #[test]
    fn test_builder_rejects_identical_markers() {
        let result = CodecBuilder::new().with_markers('*', '*').train("abc");
        assert!(matches!(result, Err(HuffmanError::InvalidConfig(_))));
    }

    #[test]
    fn test_builder_rejects_empty_corpus() {
        let result = CodecBuilder::new().train("");
        assert!(matches!(result, Err(HuffmanError::EmptyAlphabet)));
    }

    #[test]
    fn test_stats() {
        let codec = HuffmanCodec::from_frequencies(&count("aaab")).expect("non-empty");
        let encoded = codec.encode("aaab").expect("known");
        let stats = codec.stats("aaab", &encoded);
        assert_eq!(stats.symbols, 4);
        assert_eq!(stats.original_bits, 32);
        assert_eq!(stats.encoded_bits, 4);
        assert!((stats.ratio() - 8.0).abs() < 1e-9);
        assert!((stats.bits_per_symbol() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_stats_of_nothing() {
        let codec = HuffmanCodec::from_frequencies(&count("ab")).expect("non-empty");
        let stats = codec.stats("", "");
        assert_eq!(stats.ratio(), 0.0);
        assert_eq!(stats.bits_per_symbol(), 0.0);
    }

    #[test]
    fn test_tie_break_changes_shape_not_cost() {
        let freq = count("aabbccdd");
        let arrival = CodecBuilder::new().build(&freq).expect("non-empty");
        let lowest = CodecBuilder::new()
            .with_tie_break(TieBreak::LowestSymbol)
            .build(&freq)
            .expect("non-empty");
        assert_eq!(
            arrival.tree().weighted_path_length(),
            lowest.tree().weighted_path_length()
        );
        assert_eq!(arrival.code_table().len(), lowest.code_table().len());
    }
}
