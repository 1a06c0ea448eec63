//! Pipeline coordinator.
//!
//! Owns the frequency list, coding tree and code table for one input
//! distribution, and layers buffer and file encode/decode on top.

use std::fs;
use std::path::Path;

use crate::bits;
use crate::code::CodeTable;
use crate::error::{Error, Result};
use crate::freq::{self, SymbolFreq};
use crate::tree::{self, Node};

/// Huffman coding pipeline for a single input distribution.
///
/// Construction runs frequency analysis, then tree construction, then
/// code derivation. The resulting state is immutable: encode and decode
/// only read it. Inputs that should share one code must share one
/// `HuffmanCodec`; the packed format carries no code table, so the
/// decoding side needs the same tree the encoder used.
#[derive(Debug, Clone)]
pub struct HuffmanCodec {
    frequencies: Vec<SymbolFreq>,
    root: Node,
    codes: CodeTable,
}

impl HuffmanCodec {
    /// Build the full pipeline from an input buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if `data` holds no symbols, and
    /// [`Error::InvalidCode`] if it holds a byte outside the alphabet.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let frequencies = freq::build_frequencies(data)?;
        let root = tree::build_tree(&frequencies);
        let codes = CodeTable::from_tree(&root);
        Ok(HuffmanCodec {
            frequencies,
            root,
            codes,
        })
    }

    /// Build the pipeline from the contents of the file at `path`.
    ///
    /// # Errors
    ///
    /// Any read failure surfaces as [`Error::Io`], plus the errors of
    /// [`HuffmanCodec::from_bytes`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_bytes(&fs::read(path)?)
    }

    /// Sorted frequency list the tree was built from.
    pub fn frequencies(&self) -> &[SymbolFreq] {
        &self.frequencies
    }

    /// Root of the coding tree.
    pub fn tree(&self) -> &Node {
        &self.root
    }

    /// Per-symbol code table.
    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }

    /// Encode `data` into a packed byte buffer.
    ///
    /// Looks up each symbol's code in input order, concatenates the
    /// digits and packs them with the front-padding scheme.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCode`] naming the first symbol that has
    /// no code; nothing is emitted in that case.
    pub fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut digits = Vec::new();
        for &symbol in data {
            let code = self
                .codes
                .get(symbol)
                .ok_or(Error::InvalidCode { symbol })?;
            digits.extend_from_slice(code);
        }
        Ok(bits::pack(&digits))
    }

    /// Decode a packed byte buffer back into symbols.
    ///
    /// Unpacks the digits and walks the tree: `0` descends left, `1`
    /// descends right, and each leaf emits its symbol and resets the
    /// walk to the root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TruncatedStream`] if the digits end mid-code,
    /// with the offset of the unfinished code's first digit.
    pub fn decode(&self, packed: &[u8]) -> Result<Vec<u8>> {
        let digits = bits::unpack(packed);
        let mut output = Vec::new();
        let mut node = &self.root;
        let mut depth = 0usize;

        for &digit in &digits {
            if let Node::Internal { left, right, .. } = node {
                node = if digit == 0 { left } else { right };
                depth += 1;
            }
            if let Node::Leaf { symbol, .. } = node {
                output.push(*symbol);
                node = &self.root;
                depth = 0;
            }
        }

        if depth != 0 {
            return Err(Error::TruncatedStream {
                position: digits.len() - depth,
            });
        }
        Ok(output)
    }

    /// Encode the file at `source` into `destination`.
    ///
    /// The packed buffer is assembled in memory and written with
    /// create-or-truncate semantics in one operation, so a failed
    /// encode leaves no partially written destination.
    ///
    /// # Errors
    ///
    /// The errors of [`HuffmanCodec::encode`], plus [`Error::Io`] for
    /// read or write failures.
    pub fn encode_file(&self, source: impl AsRef<Path>, destination: impl AsRef<Path>) -> Result<()> {
        let packed = self.encode(&fs::read(source)?)?;
        fs::write(destination, packed)?;
        Ok(())
    }

    /// Decode the encoded file at `source` into `destination`.
    ///
    /// # Errors
    ///
    /// The errors of [`HuffmanCodec::decode`], plus [`Error::Io`] for
    /// read or write failures.
    pub fn decode_file(&self, source: impl AsRef<Path>, destination: impl AsRef<Path>) -> Result<()> {
        let decoded = self.decode(&fs::read(source)?)?;
        fs::write(destination, decoded)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_sample_scenario_bytes() {
        // aabbbcc encodes as 10 10 0 0 0 11 11, front-padded with 00001.
        let codec = HuffmanCodec::from_bytes(b"aabbbcc").unwrap();
        let packed = codec.encode(b"aabbbcc").unwrap();
        assert_eq!(packed, vec![0b0000_1101, 0b0000_1111]);
        assert_eq!(codec.decode(&packed).unwrap(), b"aabbbcc");
    }

    #[test]
    fn test_single_symbol_roundtrip() {
        let codec = HuffmanCodec::from_bytes(b"aaaa").unwrap();
        let packed = codec.encode(b"aaaa").unwrap();
        assert_eq!(packed, vec![0b0001_1111]);
        assert_eq!(codec.decode(&packed).unwrap(), b"aaaa");
    }

    #[test]
    fn test_roundtrip_length_one() {
        let codec = HuffmanCodec::from_bytes(b"z").unwrap();
        let packed = codec.encode(b"z").unwrap();
        assert_eq!(codec.decode(&packed).unwrap(), b"z");
    }

    #[test]
    fn test_encode_rejects_unknown_symbol() {
        let codec = HuffmanCodec::from_bytes(b"ab").unwrap();
        let err = codec.encode(b"abc").unwrap_err();
        assert!(matches!(err, Error::InvalidCode { symbol } if symbol == b'c'));
    }

    #[test]
    fn test_decode_detects_truncated_stream() {
        let codec = HuffmanCodec::from_bytes(b"aabbbcc").unwrap();
        // A lone 1 digit stops inside a's two-digit code.
        let packed = bits::pack(&[1]);
        let err = codec.decode(&packed).unwrap_err();
        assert!(matches!(err, Error::TruncatedStream { position: 0 }));
    }

    #[test]
    fn test_decode_empty_buffer_yields_no_symbols() {
        let codec = HuffmanCodec::from_bytes(b"ab").unwrap();
        assert_eq!(codec.decode(&[]).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(
            HuffmanCodec::from_bytes(b""),
            Err(Error::EmptyInput)
        ));
    }

    #[test]
    fn test_identical_distributions_encode_identically() {
        // Same multiset in a different order: same tree, same codes,
        // same bytes for the same message.
        let a = HuffmanCodec::from_bytes(b"aabbbcc").unwrap();
        let b = HuffmanCodec::from_bytes(b"bbcaacb").unwrap();
        assert_eq!(a.tree(), b.tree());
        assert_eq!(
            a.encode(b"aabbbcc").unwrap(),
            b.encode(b"aabbbcc").unwrap()
        );
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("source.txt");
        let encoded = dir.path().join("source.huff");
        let decoded = dir.path().join("decoded.txt");

        let text = b"it was the best of times, it was the worst of times";
        fs::write(&source, text).unwrap();

        let codec = HuffmanCodec::from_file(&source).unwrap();
        codec.encode_file(&source, &encoded).unwrap();
        codec.decode_file(&encoded, &decoded).unwrap();

        assert_eq!(fs::read(&decoded).unwrap(), text);
        // The packed file pays one padding byte but still compresses.
        assert!(fs::read(&encoded).unwrap().len() < text.len());
    }

    #[test]
    fn test_missing_source_file_surfaces_io_error() {
        let codec = HuffmanCodec::from_bytes(b"ab").unwrap();
        let dir = tempdir().unwrap();
        let err = codec
            .encode_file(dir.path().join("absent.txt"), dir.path().join("out.huff"))
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
