//! Writing sequence dictionaries.
//!
//! The output is plain SAM header text:
//!
//! ```text
//! @HD	VN:1.0	SO:unsorted
//! @SQ	SN:chr1	LN:248956422	M5:6aef897c3d6ff0c78aff06ac189178dd	UR:file:///ref/hg38.fa
//! ```

pub mod writer;

pub use writer::{DictWriter, OutputTarget};
