//! Streaming FASTA reader.
//!
//! Records are produced one at a time so that only a single sequence is held
//! in memory, which matters for multi-gigabase references.
//!
//! Input is read as whole lines of bytes: a `>` only starts a record when it
//! is the first byte of a line, and header text does not have to be UTF-8.
//!
//! Parsing is permissive:
//! - lines before the first `>` definition are skipped
//! - a definition without a name token yields a record with an empty name
//! - blank lines inside a sequence are ignored
//! - a final record without a trailing newline is still returned

use std::io::{self, BufRead};
use std::mem;

use tracing::{debug, warn};

use crate::core::record::SequenceRecord;

const DEFINITION_PREFIX: u8 = b'>';

/// A lazy, forward-only iterator over the records of a FASTA stream.
pub struct FastaRecords<R> {
    inner: R,
    /// Definition line of the record about to be read
    definition: Vec<u8>,
    /// `definition` holds a header already consumed while reading the previous sequence
    has_definition: bool,
    line: Vec<u8>,
    line_number: usize,
}

impl<R: BufRead> FastaRecords<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            definition: Vec::new(),
            has_definition: false,
            line: Vec::new(),
            line_number: 0,
        }
    }

    /// Read one line into `self.line`, without its terminator.
    /// Returns `false` at end of input.
    fn read_line(&mut self) -> io::Result<bool> {
        self.line.clear();
        if self.inner.read_until(b'\n', &mut self.line)? == 0 {
            return Ok(false);
        }
        self.line_number += 1;
        if self.line.last() == Some(&b'\n') {
            self.line.pop();
            if self.line.last() == Some(&b'\r') {
                self.line.pop();
            }
        }
        Ok(true)
    }

    /// Advance to the next definition line, skipping anything before it.
    /// Returns `false` at end of input.
    fn next_definition(&mut self) -> io::Result<bool> {
        if mem::take(&mut self.has_definition) {
            return Ok(true);
        }
        while self.read_line()? {
            if self.line.first() == Some(&DEFINITION_PREFIX) {
                mem::swap(&mut self.definition, &mut self.line);
                return Ok(true);
            }
            debug!(
                line = self.line_number,
                "Skipping line outside of a FASTA record"
            );
        }
        Ok(false)
    }

    /// Concatenate sequence lines up to the next definition line or end of input.
    fn read_sequence(&mut self) -> io::Result<Vec<u8>> {
        let mut sequence = Vec::new();
        while self.read_line()? {
            if self.line.first() == Some(&DEFINITION_PREFIX) {
                mem::swap(&mut self.definition, &mut self.line);
                self.has_definition = true;
                break;
            }
            sequence.extend_from_slice(&self.line);
        }
        Ok(sequence)
    }

    fn read_record(&mut self) -> io::Result<Option<SequenceRecord>> {
        if !self.next_definition()? {
            return Ok(None);
        }

        let mut record = SequenceRecord::from_definition(&self.definition, Vec::new());
        if record.name.is_empty() {
            warn!(
                definition = %String::from_utf8_lossy(&self.definition),
                "FASTA definition line has no sequence name"
            );
        }

        record.sequence = self.read_sequence()?;
        Ok(Some(record))
    }
}

impl<R: BufRead> Iterator for FastaRecords<R> {
    type Item = io::Result<SequenceRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record().transpose()
    }
}
