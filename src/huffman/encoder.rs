// src/huffman/encoder.rs

use log::debug;

use super::table::CodeTable;
use crate::utils::error::{HuffmanError, Result};

/// Encodes `input` by concatenating the code of each symbol in order.
///
/// Fails with [`HuffmanError::UnknownSymbol`] on the first symbol that has no
/// code; nothing is returned in that case.
pub fn encode(table: &CodeTable, input: &str) -> Result<String> {
    let mut encoded = String::new();
    for (position, symbol) in input.chars().enumerate() {
        let code = table
            .get(symbol)
            .ok_or(HuffmanError::UnknownSymbol { symbol, position })?;
        encoded.push_str(code);
    }
    debug!(
        "encoded {} bytes of input into {} bytes of markers",
        input.len(),
        encoded.len()
    );
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::table::derive_code_table;
    use crate::huffman::tree::build_tree;

    #[test]
    fn test_empty_input() {
        let table = derive_code_table(&build_tree(&crate::count("abc")).expect("non-empty"));
        assert_eq!(encode(&table, "").expect("nothing to encode"), "");
    }

    #[test]
    fn test_unknown_symbol_reports_position() {
        let table = derive_code_table(&build_tree(&crate::count("abc")).expect("non-empty"));
        match encode(&table, "abxc") {
            Err(HuffmanError::UnknownSymbol { symbol, position }) => {
                assert_eq!(symbol, 'x');
                assert_eq!(position, 2);
            }
            other => panic!("expected UnknownSymbol, got {:?}", other),
        }
    }

    #[test]
    fn test_single_symbol_costs_one_marker_each() {
        let table = derive_code_table(&build_tree(&crate::count("k")).expect("one symbol"));
        assert_eq!(encode(&table, "kkkk").expect("known symbol"), "....");
    }
}
