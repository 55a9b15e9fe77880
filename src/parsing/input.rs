//! Opening FASTA input from a file or standard input.
//!
//! Compression is detected from content rather than the file extension: a
//! stream starting with the gzip magic bytes is decoded (all members, so
//! bgzip output works too), anything else is passed through unchanged.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;

/// Command-line value meaning "read standard input"
pub const STDIN_ARG: &str = "-";

/// gzip magic bytes
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Where FASTA input comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    Path(PathBuf),
}

impl InputSource {
    /// Interpret a command-line argument, treating `-` as standard input.
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == STDIN_ARG {
            InputSource::Stdin
        } else {
            InputSource::Path(arg.to_path_buf())
        }
    }

    /// Open the source as a buffered, transparently decompressed stream.
    ///
    /// # Errors
    ///
    /// Returns the I/O error from opening the file or peeking its first bytes.
    pub fn open(&self) -> io::Result<Box<dyn BufRead>> {
        match self {
            InputSource::Stdin => open_reader(io::stdin().lock()),
            InputSource::Path(path) => open_reader(File::open(path)?),
        }
    }

    /// The `file://` URI of the input, with the path made absolute and canonical.
    /// Standard input has no URI.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the path cannot be canonicalized.
    pub fn file_uri(&self) -> io::Result<Option<String>> {
        match self {
            InputSource::Stdin => Ok(None),
            InputSource::Path(path) => {
                let absolute = std::fs::canonicalize(path)?;
                Ok(Some(format!("file://{}", absolute.display())))
            }
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str(STDIN_ARG),
            InputSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Wrap a raw byte stream, inserting a gzip decoder when the content is compressed.
///
/// # Errors
///
/// Returns the I/O error raised while reading the start of the stream.
pub fn open_reader<R: Read + 'static>(mut inner: R) -> io::Result<Box<dyn BufRead>> {
    let mut magic = [0u8; GZIP_MAGIC.len()];
    let filled = read_prefix(&mut inner, &mut magic)?;

    // Put the sniffed bytes back in front of the rest of the stream
    let stream = Cursor::new(magic[..filled].to_vec()).chain(inner);
    if magic[..filled] == GZIP_MAGIC {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(stream))))
    } else {
        Ok(Box::new(BufReader::new(stream)))
    }
}

/// Read until `buf` is full or the stream ends; pipes may deliver a single
/// byte per read. Returns the number of bytes read.
fn read_prefix<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
