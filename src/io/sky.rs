use std::fs;
use std::io::{self, BufRead, BufReader, Read};
use std::num::ParseFloatError;
use std::path::Path;

use log::{debug, warn};
use thiserror::Error;

/// The token that introduces the metadata line of a sky file. The
/// whitespace-separated floats after it are delay times for
/// wavelength-domain files and wavelengths for time-domain files.
pub const HEADER_MARKER: &str = "#EX";

#[derive(Debug, Error)]
pub enum SkyParserError {
    #[error("Failed to parse a number in line {0:?}: {1}")]
    InvalidNumber(String, #[source] ParseFloatError),
    #[error("Expected two columns in line {0:?}")]
    MissingColumns(String),
    #[error("Encountered an IO error: {0}")]
    IOError(
        #[from]
        #[source]
        io::Error,
    ),
}

/// The raw content of a sky file: the header floats and the two-column
/// numeric body, column 0 as the independent axis and column 1 as the
/// signal. What the axis and header mean is decided by the record kind
/// that wraps this, see [`crate::record`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SkyRecord {
    pub header: Vec<f64>,
    pub axis: Vec<f64>,
    pub signal: Vec<f64>,
}

/**
A parser that reads sky-format files, the flat-text output of the fs_kHz
femtosecond absorption measurement program. Each file holds a single trace:
a block of `#`-prefixed header lines, one of which starts with [`HEADER_MARKER`]
and carries the metadata floats, followed by a whitespace-delimited numeric
body of at least two columns. Columns beyond the second are ignored.

The parser is set up to handle any amount of surrounding whitespace and blank
lines for robustness. A missing metadata line is not an error; the header
field of the returned record is simply left empty.
*/
pub struct SkyReaderType<R: Read> {
    /// The raw reader
    handle: BufReader<R>,
}

const BUFFER_SIZE: usize = 8192;

impl<R: Read> SkyReaderType<R> {
    /// Create a new [`SkyReaderType`] instance, wrapping the [`io::Read`]
    /// handle provided with an [`io::BufReader`].
    pub fn new(source: R) -> SkyReaderType<R> {
        Self::with_buffer_capacity(source, BUFFER_SIZE)
    }

    pub fn with_buffer_capacity(source: R, capacity: usize) -> SkyReaderType<R> {
        SkyReaderType {
            handle: BufReader::with_capacity(capacity, source),
        }
    }

    /// Consume the stream and parse the single record it contains.
    pub fn read_record(&mut self) -> Result<SkyRecord, SkyParserError> {
        let mut record = SkyRecord::default();
        let mut saw_header = false;
        let mut line = String::new();
        loop {
            line.clear();
            let z = self.handle.read_line(&mut line)?;
            if z == 0 {
                break;
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue; // Ignore empty lines
            }
            if trimmed.starts_with(HEADER_MARKER) {
                record.header = Self::parse_header_values(trimmed, &line)?;
                saw_header = true;
                continue;
            }
            if trimmed.starts_with('#') {
                // other header lines carry no machine-readable content
                debug!("Skipping header line {trimmed:?}");
                continue;
            }
            let mut columns = trimmed.split_whitespace();
            match (columns.next(), columns.next()) {
                (Some(x), Some(y)) => {
                    record.axis.push(
                        x.parse()
                            .map_err(|e| SkyParserError::InvalidNumber(line.clone(), e))?,
                    );
                    record.signal.push(
                        y.parse()
                            .map_err(|e| SkyParserError::InvalidNumber(line.clone(), e))?,
                    );
                }
                _ => return Err(SkyParserError::MissingColumns(line)),
            }
        }
        if !saw_header {
            warn!("No {HEADER_MARKER} metadata line found, leaving the header empty");
        }
        Ok(record)
    }

    /// Parse the whitespace-separated floats after the marker token.
    fn parse_header_values(trimmed: &str, line: &str) -> Result<Vec<f64>, SkyParserError> {
        trimmed
            .split_whitespace()
            .skip(1)
            .map(|token| {
                token
                    .parse()
                    .map_err(|e| SkyParserError::InvalidNumber(line.to_string(), e))
            })
            .collect()
    }
}

impl SkyReaderType<fs::File> {
    /// Open a sky file from the file system.
    pub fn open_path<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::new(fs::File::open(path)?))
    }
}

/// A [`SkyReaderType`] reading from the file system.
pub type SkyReader = SkyReaderType<fs::File>;

/// Open `path` and parse the single record it contains.
pub fn read_sky_file<P: AsRef<Path>>(path: P) -> Result<SkyRecord, SkyParserError> {
    SkyReaderType::open_path(path)?.read_record()
}
