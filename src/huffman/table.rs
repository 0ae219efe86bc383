// src/huffman/table.rs

//! Code table derivation.
//!
//! Codes are strings over a two-marker [`PathAlphabet`]: a depth-first walk
//! from the root appends the left marker for every left descent and the right
//! marker for every right descent, and records the path at each leaf.

use std::collections::BTreeMap;

use log::debug;

use super::constants::{LEFT_MARKER, RIGHT_MARKER};
use super::tree::{HuffmanNode, HuffmanTree};
use crate::utils::error::{HuffmanError, Result};

/// Which child a marker selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Left,
    Right,
}

/// The pair of markers used to spell out tree paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathAlphabet {
    left: char,
    right: char,
}

impl PathAlphabet {
    /// Creates an alphabet from two markers, which must differ.
    pub fn new(left: char, right: char) -> Result<Self> {
        if left == right {
            return Err(HuffmanError::InvalidConfig(format!(
                "left and right markers must differ, both are {:?}",
                left
            )));
        }
        Ok(Self { left, right })
    }

    pub fn left(&self) -> char {
        self.left
    }

    pub fn right(&self) -> char {
        self.right
    }

    pub fn marker(&self, branch: Branch) -> char {
        match branch {
            Branch::Left => self.left,
            Branch::Right => self.right,
        }
    }

    /// Maps a marker back to its branch, or `None` for any other character.
    pub fn branch(&self, marker: char) -> Option<Branch> {
        if marker == self.left {
            Some(Branch::Left)
        } else if marker == self.right {
            Some(Branch::Right)
        } else {
            None
        }
    }
}

impl Default for PathAlphabet {
    fn default() -> Self {
        Self {
            left: LEFT_MARKER,
            right: RIGHT_MARKER,
        }
    }
}

/// Mapping from each symbol of a tree to its path string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, String>,
    alphabet: PathAlphabet,
}

impl CodeTable {
    /// The code for `symbol`, or `None` if the tree had no such leaf.
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// Number of markers in the code for `symbol`.
    pub fn code_length(&self, symbol: char) -> Option<usize> {
        self.get(symbol).map(|code| code.chars().count())
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn alphabet(&self) -> PathAlphabet {
        self.alphabet
    }

    /// Iterate over `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_str()))
    }

    /// Checks that no code equals or is a prefix of another.
    ///
    /// Derivation guarantees this; the check exists for diagnostics on tables
    /// that were assembled or transported by other means.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&str> = self.codes.values().map(String::as_str).collect();
        codes.sort_unstable();
        codes.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }
}

/// Derives the code table of `tree` using the default `.` / `^` markers.
pub fn derive_code_table(tree: &HuffmanTree) -> CodeTable {
    derive_code_table_with(tree, PathAlphabet::default())
}

/// Derives the code table of `tree`, spelling paths with `alphabet`.
///
/// A tree whose root is a leaf gives its only symbol the one-marker code made
/// of the left marker.
pub fn derive_code_table_with(tree: &HuffmanTree, alphabet: PathAlphabet) -> CodeTable {
    let mut codes = BTreeMap::new();

    if let Some(symbol) = tree.root().symbol() {
        codes.insert(symbol, alphabet.left().to_string());
    } else {
        let mut stack: Vec<(&HuffmanNode, String)> = vec![(tree.root(), String::new())];
        while let Some((node, path)) = stack.pop() {
            match node {
                HuffmanNode::Leaf { symbol, .. } => {
                    codes.insert(*symbol, path);
                }
                HuffmanNode::Internal { left, right, .. } => {
                    let mut right_path = path.clone();
                    right_path.push(alphabet.right());
                    let mut left_path = path;
                    left_path.push(alphabet.left());
                    stack.push((right, right_path));
                    stack.push((left, left_path));
                }
            }
        }
    }

    debug!(
        "derived {} codes, longest {} markers",
        codes.len(),
        codes.values().map(|c| c.chars().count()).max().unwrap_or(0)
    );
    CodeTable { codes, alphabet }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::frequency::FrequencyTable;
    use crate::huffman::tree::build_tree;

    #[test]
    fn test_alphabet_rejects_identical_markers() {
        assert!(matches!(
            PathAlphabet::new('x', 'x'),
            Err(HuffmanError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_alphabet_branch_lookup() {
        let alphabet = PathAlphabet::new('0', '1').expect("distinct");
        assert_eq!(alphabet.branch('0'), Some(Branch::Left));
        assert_eq!(alphabet.branch('1'), Some(Branch::Right));
        assert_eq!(alphabet.branch('2'), None);
        assert_eq!(alphabet.marker(Branch::Right), '1');
    }

    #[test]
    fn test_default_markers() {
        let alphabet = PathAlphabet::default();
        assert_eq!(alphabet.left(), '.');
        assert_eq!(alphabet.right(), '^');
    }

    #[test]
    fn test_single_leaf_gets_one_marker() {
        let mut freq = FrequencyTable::new();
        freq.insert('z', 3);
        let table = derive_code_table(&build_tree(&freq).expect("one symbol"));
        assert_eq!(table.get('z'), Some("."));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_one_entry_per_leaf() {
        let freq = crate::count("the quick brown fox jumps over the lazy dog");
        let tree = build_tree(&freq).expect("non-empty");
        let table = derive_code_table(&tree);
        assert_eq!(table.len(), tree.leaf_count());
        assert!(table.is_prefix_free());
        for (symbol, _) in freq.iter() {
            assert!(table.get(symbol).is_some(), "missing code for {:?}", symbol);
        }
    }

    #[test]
    fn test_custom_markers() {
        let freq = crate::count("aab");
        let tree = build_tree(&freq).expect("non-empty");
        let table = derive_code_table_with(&tree, PathAlphabet::new('0', '1').expect("distinct"));
        // 'b' (1) pops before 'a' (2), so it is the left child.
        assert_eq!(table.get('b'), Some("0"));
        assert_eq!(table.get('a'), Some("1"));
        assert_eq!(table.alphabet().right(), '1');
    }

    #[test]
    fn test_prefix_check_catches_bad_table() {
        let mut table = derive_code_table(&build_tree(&crate::count("ab")).expect("non-empty"));
        table.codes.insert('c', "..".to_string());
        assert!(!table.is_prefix_free());
    }
}
