//! Core data types for building sequence dictionaries.
//!
//! - [`SequenceRecord`]: a FASTA record as read from the input
//! - [`NormalizedSequence`] / [`SequenceDigest`]: filtered, uppercased bases and their MD5
//! - [`DictionaryLine`]: one `@SQ` line with its required and optional tags
//! - [`RunConfig`]: settings for a dictionary run
//!
//! ## Alternative names
//!
//! With aliasing enabled, each `@SQ` line carries an `AN` tag that maps between
//! UCSC and NCBI naming:
//!
//! | Name   | AN            |
//! |--------|---------------|
//! | chr1   | 1             |
//! | 1      | chr1          |
//! | chrM   | M,chrMT,MT    |
//! | MT     | chrMT,chrM,M  |

pub mod config;
pub mod dictionary;
pub mod record;
pub mod sequence;

pub use config::RunConfig;
pub use dictionary::{alternative_names, DictionaryLine, HEADER_LINE};
pub use record::SequenceRecord;
pub use sequence::{NormalizedSequence, SequenceDigest};
