//! Per-symbol code derivation.
//!
//! Walks the coding tree once and records, for every leaf, the digits
//! accumulated on the path from the root.

use crate::freq::ALPHABET_SIZE;
use crate::tree::Node;

/// Mapping from symbol to its Huffman code.
///
/// Codes are non-empty sequences of binary digits (`0`/`1` values).
/// Symbols absent from the analyzed input have no code.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: Vec<Option<Vec<u8>>>,
}

impl CodeTable {
    /// Derive the code table from a Huffman tree.
    ///
    /// Descends into the right child appending digit `1` before the
    /// left child appending digit `0`; the digit assignment is part of
    /// the wire format and must match the decoder's tree walk.
    pub fn from_tree(root: &Node) -> Self {
        let mut codes = vec![None; ALPHABET_SIZE];
        collect(root, Vec::new(), &mut codes);
        CodeTable { codes }
    }

    /// Code for `symbol`, if the symbol was present in the input.
    pub fn get(&self, symbol: u8) -> Option<&[u8]> {
        self.codes
            .get(symbol as usize)
            .and_then(|code| code.as_deref())
    }

    /// Iterate over `(symbol, code)` pairs in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[u8])> {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.as_deref().map(|c| (symbol as u8, c)))
    }

    /// Number of symbols holding a code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|code| code.is_some()).count()
    }

    /// Whether no symbol holds a code.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn collect(node: &Node, prefix: Vec<u8>, codes: &mut [Option<Vec<u8>>]) {
    match node {
        Node::Leaf { symbol, .. } => {
            codes[*symbol as usize] = Some(prefix);
        }
        Node::Internal { left, right, .. } => {
            let mut right_prefix = prefix.clone();
            right_prefix.push(1);
            collect(right, right_prefix, codes);

            let mut left_prefix = prefix;
            left_prefix.push(0);
            collect(left, left_prefix, codes);
        }
    }
}
