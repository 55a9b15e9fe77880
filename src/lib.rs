//! # fasta-dict
//!
//! Create a SAM-style sequence dictionary from a FASTA file.
//!
//! Aligners and variant callers describe their reference with `@SQ` lines:
//! the name, length and MD5 checksum of each sequence, optionally with the
//! assembly, species, source URI and alternative names. `fasta-dict` derives
//! those lines directly from a (plain or gzip-compressed) FASTA file.
//!
//! ## Features
//!
//! - **Streaming**: one sequence in memory at a time
//! - **Transparent gzip**: compression is detected from content, bgzip included
//! - **Standard checksums**: MD5 over uppercased, printable bases only
//! - **Aliases**: optional `AN` tag mapping `chr1` <-> `1` and `chrM` <-> `MT`
//!
//! ## Example
//!
//! ```rust
//! use fasta_dict::core::config::RunConfig;
//! use fasta_dict::parsing::input::InputSource;
//! use fasta_dict::pipeline::build_dictionary;
//!
//! let fasta = b">chr1 first\nACGT\nacgt\n";
//! let config = RunConfig { alias: true, ..RunConfig::default() };
//!
//! let (out, count) = build_dictionary(&config, &InputSource::Stdin, &fasta[..], Vec::new()).unwrap();
//! assert_eq!(count, 1);
//!
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.starts_with("@HD\tVN:1.0\tSO:unsorted\n@SQ\tSN:chr1\tLN:8\t"));
//! assert!(text.ends_with("\tAN:1\n"));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: records, normalized sequences, digests and dictionary lines
//! - [`parsing`]: opening input and reading FASTA records
//! - [`output`]: writing the dictionary
//! - [`pipeline`]: wiring the stages together
//! - [`cli`]: command-line interface implementation

pub mod cli;
pub mod core;
pub mod output;
pub mod parsing;
pub mod pipeline;

// Re-export commonly used types for convenience
pub use core::config::RunConfig;
pub use core::dictionary::DictionaryLine;
pub use core::record::SequenceRecord;
pub use core::sequence::{NormalizedSequence, SequenceDigest};
pub use parsing::fasta::FastaRecords;
pub use parsing::input::InputSource;
pub use pipeline::{build_dictionary, DictError};
