//! Reading FASTA input.
//!
//! - [`input`]: open a path or standard input, transparently decompressing gzip
//! - [`fasta`]: decode the stream into a lazy sequence of records
//!
//! ## Example
//!
//! ```rust,no_run
//! use fasta_dict::parsing::fasta::FastaRecords;
//! use fasta_dict::parsing::input::InputSource;
//! use std::path::Path;
//!
//! let source = InputSource::from_arg(Path::new("reference.fa.gz"));
//! for record in FastaRecords::new(source.open().unwrap()) {
//!     let record = record.unwrap();
//!     println!("{}\t{}", record.name, record.sequence.len());
//! }
//! ```

pub mod fasta;
pub mod input;
