use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::core::dictionary::{DictionaryLine, HEADER_LINE};

/// Where the dictionary is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    pub fn from_option(path: Option<&Path>) -> Self {
        match path {
            Some(path) => OutputTarget::File(path.to_path_buf()),
            None => OutputTarget::Stdout,
        }
    }

    /// Open the target for writing. Files are created or truncated.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file cannot be created.
    pub fn open(&self) -> io::Result<Box<dyn Write>> {
        match self {
            OutputTarget::Stdout => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
            OutputTarget::File(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Stdout => f.write_str("<stdout>"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Writes dictionary lines to any [`Write`] sink.
pub struct DictWriter<W: Write> {
    inner: W,
    lines_written: usize,
}

impl<W: Write> DictWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            lines_written: 0,
        }
    }

    /// Write the `@HD` line. Must be called before any `@SQ` line.
    ///
    /// # Errors
    ///
    /// Returns the underlying write error.
    pub fn write_header(&mut self) -> io::Result<()> {
        debug_assert_eq!(self.lines_written, 0, "@HD must be the first line");
        writeln!(self.inner, "{HEADER_LINE}")
    }

    /// # Errors
    ///
    /// Returns the underlying write error.
    pub fn write_line(&mut self, line: &DictionaryLine) -> io::Result<()> {
        writeln!(self.inner, "{line}")?;
        self.lines_written += 1;
        Ok(())
    }

    /// Number of `@SQ` lines written so far.
    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Flush and return the inner writer.
    ///
    /// # Errors
    ///
    /// Returns the error raised while flushing.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sequence::NormalizedSequence;

    fn sq(name: &str, sequence: &[u8]) -> DictionaryLine {
        DictionaryLine::new(name, &NormalizedSequence::from_raw(sequence.to_vec()))
    }

    #[test]
    fn test_header_then_lines() {
        let mut writer = DictWriter::new(Vec::new());
        writer.write_header().unwrap();
        writer.write_line(&sq("chr1", b"ACGT")).unwrap();
        writer.write_line(&sq("chr2", b"")).unwrap();
        assert_eq!(writer.lines_written(), 2);

        let text = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert_eq!(
            text,
            "@HD\tVN:1.0\tSO:unsorted\n\
             @SQ\tSN:chr1\tLN:4\tM5:f1f8f4bf413b16ad135722aa4591043e\n\
             @SQ\tSN:chr2\tLN:0\tM5:d41d8cd98f00b204e9800998ecf8427e\n"
        );
    }

    #[test]
    fn test_without_header() {
        let mut writer = DictWriter::new(Vec::new());
        writer.write_line(&sq("chr1", b"ACGT")).unwrap();
        let text = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert!(text.starts_with("@SQ\t"));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_output_target() {
        assert_eq!(OutputTarget::from_option(None), OutputTarget::Stdout);
        assert_eq!(
            OutputTarget::from_option(Some(Path::new("out.dict"))),
            OutputTarget::File(PathBuf::from("out.dict"))
        );
        assert_eq!(OutputTarget::Stdout.to_string(), "<stdout>");
    }

    #[test]
    fn test_file_target_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.dict");
        std::fs::write(&path, "stale content that is longer than the new one\n").unwrap();

        let target = OutputTarget::File(path.clone());
        let mut writer = DictWriter::new(target.open().unwrap());
        writer.write_header().unwrap();
        drop(writer.finish().unwrap());

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "@HD\tVN:1.0\tSO:unsorted\n"
        );
    }

    #[test]
    fn test_file_target_unwritable() {
        let target = OutputTarget::File(PathBuf::from("/nonexistent/dir/out.dict"));
        assert!(target.open().is_err());
    }
}
