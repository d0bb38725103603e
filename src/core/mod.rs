//! Core data types shared by every utility.
//!
//! - [`Record`]: one FASTA entry with its id, full header description, and sequence
//!
//! ## Header Layout
//!
//! | Header line                  | id     | description                |
//! |------------------------------|--------|----------------------------|
//! | `>chr1`                      | `chr1` | `chr1`                     |
//! | `>chr1 Homo sapiens chr 1`   | `chr1` | `chr1 Homo sapiens chr 1`  |
//! | `>  chr1 padded`             | `chr1` | `  chr1 padded`            |
//!
//! The description is written back verbatim, so annotation text survives a
//! read/write cycle.

pub mod record;
