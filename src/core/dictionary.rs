use std::fmt;

use crate::core::sequence::{NormalizedSequence, SequenceDigest};

/// The `@HD` line written at the top of a dictionary.
pub const HEADER_LINE: &str = "@HD\tVN:1.0\tSO:unsorted";

/// UCSC-style chromosome prefix
const CHR_PREFIX: &str = "chr";

/// One `@SQ` line of a sequence dictionary.
///
/// Optional tags are written in the fixed order `AN`, `UR`, `AS`, `SP`
/// after the required `SN`, `LN` and `M5` tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryLine {
    /// Sequence name (SN tag)
    pub name: String,

    /// Normalized sequence length (LN tag)
    pub length: u64,

    /// MD5 of the normalized sequence (M5 tag)
    pub md5: SequenceDigest,

    /// Alternative names (AN tag); empty means the tag is omitted
    pub aliases: Vec<String>,

    /// URI where the sequence can be retrieved (UR tag)
    pub uri: Option<String>,

    /// Assembly identifier (AS tag)
    pub assembly: Option<String>,

    /// Species (SP tag)
    pub species: Option<String>,
}

impl DictionaryLine {
    pub fn new(name: impl Into<String>, sequence: &NormalizedSequence) -> Self {
        Self {
            name: name.into(),
            length: sequence.len(),
            md5: sequence.digest(),
            aliases: Vec::new(),
            uri: None,
            assembly: None,
            species: None,
        }
    }
}

impl fmt::Display for DictionaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "@SQ\tSN:{}\tLN:{}\tM5:{}",
            self.name, self.length, self.md5
        )?;
        if !self.aliases.is_empty() {
            write!(f, "\tAN:{}", self.aliases.join(","))?;
        }
        if let Some(uri) = &self.uri {
            write!(f, "\tUR:{uri}")?;
        }
        if let Some(assembly) = &self.assembly {
            write!(f, "\tAS:{assembly}")?;
        }
        if let Some(species) = &self.species {
            write!(f, "\tSP:{species}")?;
        }
        Ok(())
    }
}

/// Derive the AN tag values for a sequence name by adding or removing `chr`.
///
/// Mitochondrial names get both conventions: `M` also maps to `chrMT`/`MT`,
/// and `MT` also maps to `chrM`/`M`.
#[must_use]
pub fn alternative_names(name: &str) -> Vec<String> {
    let (base, first) = match name.strip_prefix(CHR_PREFIX) {
        Some(base) => (base, base.to_string()),
        None => (name, format!("{CHR_PREFIX}{name}")),
    };

    let mut names = vec![first];
    match base {
        "M" => names.extend(["chrMT".to_string(), "MT".to_string()]),
        "MT" => names.extend(["chrM".to_string(), "M".to_string()]),
        _ => {}
    }
    names
}
