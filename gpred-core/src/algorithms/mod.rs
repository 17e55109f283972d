//! Core gene-finding algorithms.
//!
//! ## Modules
//!
//! - [`codons`]: start codon search and in-frame stop codon search
//! - [`shine_dalgarno`]: ribosome binding site check upstream of a start
//! - [`scanner`]: the cursor loop assembling and accepting genes
//!
//! ## Algorithm Overview
//!
//! Prediction runs once per strand:
//!
//! 1. **Start**: find the next start codon (ATT, ATG, GTG, TTG, CTG)
//! 2. **Stop**: pair it with the first stop codon (TAA, TAG, TGA) in the same frame
//! 3. **Length**: keep genes strictly longer than the minimum length
//! 4. **RBS**: require a Shine-Dalgarno motif 6 to `max_distance` bases upstream
//!
//! ```text
//!    [ window ]      start             stop
//! ---AGGAGG-------|--ATG------ ... ----TAG---
//!    s-max      s-6  s                 e  e+2
//! ```
//!
//! An accepted gene moves the cursor `min_gap` bases past its stop codon;
//! any rejection moves it a single base past the rejected start.

pub mod codons;
pub mod scanner;
pub mod shine_dalgarno;

pub use codons::{find_start, find_stop};
pub use scanner::{GenePredictor, ScanStats};
pub use shine_dalgarno::has_shine_dalgarno;
