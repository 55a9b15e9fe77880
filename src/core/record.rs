/// A single FASTA record as read from the input.
///
/// `sequence` holds the record's sequence lines concatenated with line
/// terminators removed; it has not been filtered or case-folded yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// First whitespace-delimited token of the definition line (SN tag in SAM)
    pub name: String,

    /// Remainder of the definition line, if any. Never written to the dictionary.
    pub description: Option<String>,

    /// Raw sequence bytes
    pub sequence: Vec<u8>,
}

impl SequenceRecord {
    /// Build a record from a definition line (with or without the leading `>`).
    ///
    /// The name ends at the first ASCII whitespace byte. Whitespace directly
    /// after `>` therefore yields an empty name. Header bytes need not be
    /// UTF-8; invalid sequences are replaced with U+FFFD.
    pub fn from_definition(definition: &[u8], sequence: Vec<u8>) -> Self {
        let text = definition.strip_prefix(b">").unwrap_or(definition);

        let (name, description) = match text.iter().position(|&b| is_space(b)) {
            Some(i) => {
                let rest = trim_spaces(&text[i + 1..]);
                let description =
                    (!rest.is_empty()).then(|| String::from_utf8_lossy(rest).into_owned());
                (&text[..i], description)
            }
            None => (text, None),
        };

        Self {
            name: String::from_utf8_lossy(name).into_owned(),
            description,
            sequence,
        }
    }
}

/// C `isspace`: ASCII whitespace plus vertical tab.
fn is_space(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0b
}

fn trim_spaces(mut bytes: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = bytes {
        if !is_space(*first) {
            break;
        }
        bytes = rest;
    }
    while let [rest @ .., last] = bytes {
        if !is_space(*last) {
            break;
        }
        bytes = rest;
    }
    bytes
}
