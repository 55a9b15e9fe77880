//! The FASTA to dictionary pipeline.
//!
//! Records flow one at a time from the reader, through normalization and
//! digesting, to the writer. Nothing is retained between records.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, info};

use crate::core::config::RunConfig;
use crate::core::sequence::NormalizedSequence;
use crate::output::writer::{DictWriter, OutputTarget};
use crate::parsing::fasta::FastaRecords;
use crate::parsing::input::InputSource;

#[derive(Error, Debug)]
pub enum DictError {
    #[error("{path}: cannot open for reading")]
    InputOpen {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{path}: cannot open file for writing")]
    OutputOpen {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{path}: failed to read FASTA input")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{path}: failed to write dictionary")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Open the input and output described by `config` and write the dictionary.
///
/// The input is opened first, so a missing input never creates or truncates
/// the output file. Returns the number of `@SQ` lines written.
///
/// # Errors
///
/// Returns `DictError::InputOpen` or `DictError::OutputOpen` if either end
/// cannot be opened, and `DictError::Read` / `DictError::Write` for I/O
/// failures while streaming. A partially written output file is left in place.
pub fn run(config: &RunConfig, input: &InputSource) -> Result<usize, DictError> {
    let reader = input.open().map_err(|source| DictError::InputOpen {
        path: input.to_string(),
        source,
    })?;

    let target = OutputTarget::from_option(config.output.as_deref());
    let out = target.open().map_err(|source| DictError::OutputOpen {
        path: target.to_string(),
        source,
    })?;

    let (_, count) = build_dictionary(config, input, reader, out)?;
    info!(records = count, output = %target, "Wrote sequence dictionary");
    Ok(count)
}

/// Stream FASTA records from `reader` into dictionary lines on `out`.
///
/// `input` names the source for diagnostics and supplies the `UR` value when
/// no URI override is configured. Returns the flushed writer and the number
/// of `@SQ` lines written.
///
/// # Errors
///
/// Returns `DictError::InputOpen` if the input path cannot be resolved to a
/// URI, `DictError::Read` if the FASTA stream fails, and `DictError::Write`
/// if the output fails.
pub fn build_dictionary<R: BufRead, W: Write>(
    config: &RunConfig,
    input: &InputSource,
    reader: R,
    out: W,
) -> Result<(W, usize), DictError> {
    let input_uri = if config.uri.is_some() {
        None
    } else {
        input.file_uri().map_err(|source| DictError::InputOpen {
            path: input.to_string(),
            source,
        })?
    };
    let uri = config.resolve_uri(input_uri);

    let write_error = |source: io::Error| DictError::Write {
        path: OutputTarget::from_option(config.output.as_deref()).to_string(),
        source,
    };

    let mut writer = DictWriter::new(out);
    if config.header {
        writer.write_header().map_err(write_error)?;
    }

    for result in FastaRecords::new(reader) {
        let record = result.map_err(|source| DictError::Read {
            path: input.to_string(),
            source,
        })?;

        let sequence = NormalizedSequence::from_raw(record.sequence);
        let line = config.dictionary_line(&record.name, &sequence, uri.as_deref());
        debug!(name = %line.name, length = line.length, md5 = %line.md5, "Digested sequence");

        writer.write_line(&line).map_err(write_error)?;
    }

    let count = writer.lines_written();
    let out = writer.finish().map_err(write_error)?;
    Ok((out, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn dict_from_stdin(config: &RunConfig, fasta: &[u8]) -> String {
        let (out, _) = build_dictionary(config, &InputSource::Stdin, fasta, Vec::new()).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn md5_hex(bases: &[u8]) -> String {
        format!("{:x}", md5::compute(bases))
    }

    #[test]
    fn test_end_to_end_default() {
        let text = dict_from_stdin(&RunConfig::default(), b">seq1\nACGTacgt\n");
        assert_eq!(
            text,
            format!(
                "@HD\tVN:1.0\tSO:unsorted\n@SQ\tSN:seq1\tLN:8\tM5:{}\n",
                md5_hex(b"ACGTACGT")
            )
        );
    }

    #[test]
    fn test_no_header() {
        let config = RunConfig {
            header: false,
            ..RunConfig::default()
        };
        let text = dict_from_stdin(&config, b">chr1\nACGT\n>chr2\nGG\n");
        assert!(text.starts_with("@SQ\tSN:chr1\t"));
        assert!(!text.contains("@HD"));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_one_line_per_record_in_order() {
        let fasta = b">chr2\nAC\n>chr1\n\n>chrM\nN N N\n>chr10\nacgt";
        let (out, count) = build_dictionary(
            &RunConfig::default(),
            &InputSource::Stdin,
            &fasta[..],
            Vec::new(),
        )
        .unwrap();
        assert_eq!(count, 4);

        let text = String::from_utf8(out).unwrap();
        let names: Vec<_> = text
            .lines()
            .skip(1)
            .map(|l| l.split('\t').nth(1).unwrap())
            .collect();
        assert_eq!(names, ["SN:chr2", "SN:chr1", "SN:chrM", "SN:chr10"]);

        let lengths: Vec<_> = text
            .lines()
            .skip(1)
            .map(|l| l.split('\t').nth(2).unwrap())
            .collect();
        assert_eq!(lengths, ["LN:2", "LN:0", "LN:3", "LN:4"]);
    }

    #[test]
    fn test_all_optional_fields() {
        let config = RunConfig {
            alias: true,
            assembly: Some("GRCh38".to_string()),
            species: Some("Homo sapiens".to_string()),
            uri: Some("https://example.org/hg38.fa".to_string()),
            ..RunConfig::default()
        };
        let text = dict_from_stdin(&config, b">MT\nACGT\n");
        assert_eq!(
            text.lines().nth(1).unwrap(),
            "@SQ\tSN:MT\tLN:4\tM5:f1f8f4bf413b16ad135722aa4591043e\tAN:chrMT,chrM,M\
             \tUR:https://example.org/hg38.fa\tAS:GRCh38\tSP:Homo sapiens"
        );
    }

    #[test]
    fn test_non_utf8_description_is_not_fatal() {
        let text = dict_from_stdin(&RunConfig::default(), b">chr1 caf\xe9\nACGT\n>chr2\nGG\n");
        let names: Vec<_> = text
            .lines()
            .skip(1)
            .map(|l| l.split('\t').nth(1).unwrap())
            .collect();
        assert_eq!(names, ["SN:chr1", "SN:chr2"]);
    }

    #[test]
    fn test_stdin_has_no_uri() {
        let text = dict_from_stdin(&RunConfig::default(), b">chr1\nACGT\n");
        assert!(!text.contains("UR:"));
    }

    #[test]
    fn test_file_input_gets_file_uri() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b">chr1\nACGT\n").unwrap();
        temp.flush().unwrap();

        let input = InputSource::Path(temp.path().to_path_buf());
        let reader = input.open().unwrap();
        let (out, _) =
            build_dictionary(&RunConfig::default(), &input, reader, Vec::new()).unwrap();
        let text = String::from_utf8(out).unwrap();

        let canonical = std::fs::canonicalize(temp.path()).unwrap();
        assert!(text.ends_with(&format!("\tUR:file://{}\n", canonical.display())));
    }

    #[test]
    fn test_digest_ignores_case_and_line_wrapping() {
        let config = RunConfig {
            header: false,
            ..RunConfig::default()
        };
        let wrapped = dict_from_stdin(&config, b">chr1\nacgt\nAC\nGT\n");
        let single = dict_from_stdin(&config, b">chr1\nACGTACGT\n");
        assert_eq!(wrapped, single);
    }

    #[test]
    fn test_run_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.dict");
        let config = RunConfig {
            output: Some(output.clone()),
            ..RunConfig::default()
        };

        let input = InputSource::Path(PathBuf::from("/nonexistent/ref.fa"));
        let err = run(&config, &input).unwrap_err();
        assert!(matches!(err, DictError::InputOpen { .. }));
        assert_eq!(err.to_string(), "/nonexistent/ref.fa: cannot open for reading");
        assert!(!output.exists());
    }

    #[test]
    fn test_run_unwritable_output() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b">chr1\nACGT\n").unwrap();
        temp.flush().unwrap();

        let config = RunConfig {
            output: Some(PathBuf::from("/nonexistent/dir/out.dict")),
            ..RunConfig::default()
        };
        let err = run(&config, &InputSource::Path(temp.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, DictError::OutputOpen { .. }));
        assert_eq!(
            err.to_string(),
            "/nonexistent/dir/out.dict: cannot open file for writing"
        );
    }

    #[test]
    fn test_run_to_file() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b">chr1\nACGT\n>chr2\nGGGG\n").unwrap();
        temp.flush().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("ref.dict");
        let config = RunConfig {
            output: Some(output.clone()),
            uri: Some("ref.fa".to_string()),
            ..RunConfig::default()
        };

        let count = run(&config, &InputSource::Path(temp.path().to_path_buf())).unwrap();
        assert_eq!(count, 2);

        let text = std::fs::read_to_string(&output).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().skip(1).all(|l| l.ends_with("\tUR:ref.fa")));
    }
}
