// src/huffman/decoder.rs

use log::debug;

use super::table::{Branch, PathAlphabet};
use super::tree::{HuffmanNode, HuffmanTree};
use crate::utils::error::{HuffmanError, MalformedKind, Result};

/// Decodes a `.` / `^` marker string with `tree`.
pub fn decode(tree: &HuffmanTree, encoded: &str) -> Result<String> {
    decode_with(tree, encoded, PathAlphabet::default())
}

/// Decodes `encoded` by walking `tree` from the root once per symbol.
///
/// Each marker moves to the named child; reaching a leaf emits its symbol and
/// restarts at the root. When the root is itself a leaf, every left marker
/// stands for one occurrence of its symbol.
///
/// The input must be a whole number of codes from this tree. Otherwise the
/// call fails with [`HuffmanError::MalformedEncoding`] and no output.
pub fn decode_with(tree: &HuffmanTree, encoded: &str, alphabet: PathAlphabet) -> Result<String> {
    let root = tree.root();
    let mut output = String::new();
    let mut node = root;
    let mut position = 0;

    for (index, marker) in encoded.chars().enumerate() {
        position = index;
        let branch = alphabet.branch(marker).ok_or(HuffmanError::MalformedEncoding {
            position,
            kind: MalformedKind::UnrecognizedMarker(marker),
        })?;

        let next = match (node, branch) {
            (HuffmanNode::Internal { left, .. }, Branch::Left) => left.as_ref(),
            (HuffmanNode::Internal { right, .. }, Branch::Right) => right.as_ref(),
            // Only a leaf root is ever current here; its one code is the left marker.
            (HuffmanNode::Leaf { .. }, Branch::Left) => node,
            (HuffmanNode::Leaf { .. }, Branch::Right) => {
                return Err(HuffmanError::MalformedEncoding {
                    position,
                    kind: MalformedKind::MissingChild,
                });
            }
        };

        match next {
            HuffmanNode::Leaf { symbol, .. } => {
                output.push(*symbol);
                node = root;
            }
            HuffmanNode::Internal { .. } => node = next,
        }
    }

    if !std::ptr::eq(node, root) {
        return Err(HuffmanError::MalformedEncoding {
            position: position + 1,
            kind: MalformedKind::Truncated,
        });
    }

    debug!(
        "decoded {} markers into {} symbols",
        encoded.chars().count(),
        output.chars().count()
    );
    Ok(output)
}
