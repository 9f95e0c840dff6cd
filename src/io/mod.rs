//! Reading sky-format flat-text data files and the file-naming conventions
//! that carry each record's name and index.

pub mod filename;
pub mod sky;

pub use crate::io::filename::{
    base_name, index_from_extension, index_from_underscore, IndexParseError,
};
pub use crate::io::sky::{
    read_sky_file, SkyParserError, SkyReader, SkyReaderType, SkyRecord, HEADER_MARKER,
};
