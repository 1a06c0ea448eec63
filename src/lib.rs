//! # Huffman Coding
//!
//! *Minimum-redundancy prefix codes from symbol frequencies.*
//!
//! ## Intuition First
//!
//! Imagine abbreviating the words you use most. "The" becomes "t", while
//! "sesquipedalian" keeps its full spelling. Messages get shorter on average
//! because the short abbreviations are the ones you reach for constantly.
//!
//! Huffman coding does exactly this with bits: frequent symbols receive short
//! codes, rare symbols receive long ones. The codes are chosen so that no code
//! is a prefix of another, which lets a decoder split the bit stream back into
//! symbols without any separators.
//!
//! ## The Problem
//!
//! Fixed-width encodings spend the same number of bits on every symbol, no
//! matter how skewed the distribution. An input that is 90% one symbol still
//! pays full width for it. A variable-length code can approach the entropy of
//! the distribution, but only if it can be decoded unambiguously.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the fundamental limit
//! 1949  Fano        Top-down code construction (suboptimal)
//! 1952  Huffman     Bottom-up greedy merge: provably optimal prefix codes
//! 1976  van Leeuwen Two-queue construction in O(n) from sorted frequencies
//! 1985  Knuth       Dynamic Huffman coding (adaptive variant)
//! 1996  Moffat      In-place code length computation
//! ```
//!
//! David Huffman's key insight, famously produced for a term paper at MIT,
//! was to build the tree bottom-up: repeatedly merge the two lightest
//! subtrees, so the rarest symbols end up deepest.
//!
//! ## Mathematical Formulation
//!
//! Given symbols $s \in S$ with probabilities $p_s$, a prefix code assigns
//! each symbol a code of length $\ell_s$ satisfying Kraft's inequality
//! $\sum_s 2^{-\ell_s} \le 1$. Huffman's greedy merge minimizes the expected
//! length
//!
//! ```text
//! L = \sum_s p_s \ell_s
//! ```
//!
//! over all prefix codes, coming within one bit of the entropy
//! $H = -\sum_s p_s \log_2 p_s$.
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(n)$ tree construction from a sorted frequency list via the
//!   two-queue merge; $O(1)$ amortized per emitted bit when encoding.
//! - **Space**: $O(n)$ for the tree and code table, with $n \le 128$ here.
//!
//! ## Failure Modes
//!
//! 1. **Skew Ceiling**: code lengths are whole bits, so a symbol with
//!    probability 0.99 still costs a full bit per occurrence (arithmetic
//!    coding and ANS do better).
//! 2. **Stale Model**: the decoder must hold the same tree the encoder used;
//!    the packed format carries no code table.
//!
//! ## Implementation Notes
//!
//! This crate provides the full pipeline over a fixed 128-symbol alphabet:
//! - **freq**: frequency analysis with a canonical, fully deterministic sort.
//! - **tree**: linear-time two-queue construction of one specific optimal tree.
//! - **code**: per-symbol bit codes derived in a single traversal.
//! - **bits**: byte packing with a front-padding sentinel.
//! - **codec**: the coordinator tying the stages together, with file I/O.
//!
//! ## References
//!
//! - Huffman, D. (1952). "A Method for the Construction of Minimum-Redundancy Codes."
//! - van Leeuwen, J. (1976). "On the construction of Huffman trees."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bits;
pub mod code;
pub mod codec;
pub mod error;
pub mod freq;
pub mod tree;

pub use code::CodeTable;
pub use codec::HuffmanCodec;
pub use error::Error;
pub use freq::{SymbolFreq, ALPHABET_SIZE};
pub use tree::Node;
