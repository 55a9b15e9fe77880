use std::path::PathBuf;

use crate::core::dictionary::{alternative_names, DictionaryLine};
use crate::core::sequence::NormalizedSequence;

/// Settings for one dictionary run. Built once from the command line and
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Destination file; `None` writes to standard output
    pub output: Option<PathBuf>,

    /// Add an AN tag derived by adding/removing `chr`
    pub alias: bool,

    /// Write the `@HD` line
    pub header: bool,

    /// AS tag value
    pub assembly: Option<String>,

    /// SP tag value
    pub species: Option<String>,

    /// UR tag value; takes precedence over the input file's own URI
    pub uri: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output: None,
            alias: false,
            header: true,
            assembly: None,
            species: None,
            uri: None,
        }
    }
}

impl RunConfig {
    /// Resolve the UR value for this run given the input's own URI, if any.
    #[must_use]
    pub fn resolve_uri(&self, input_uri: Option<String>) -> Option<String> {
        self.uri.clone().or(input_uri)
    }

    /// Build the `@SQ` line for one normalized record.
    #[must_use]
    pub fn dictionary_line(
        &self,
        name: &str,
        sequence: &NormalizedSequence,
        uri: Option<&str>,
    ) -> DictionaryLine {
        let mut line = DictionaryLine::new(name, sequence);
        if self.alias {
            line.aliases = alternative_names(name);
        }
        line.uri = uri.map(str::to_string);
        line.assembly.clone_from(&self.assembly);
        line.species.clone_from(&self.species);
        line
    }
}
