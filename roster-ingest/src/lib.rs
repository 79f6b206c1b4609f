//! # roster-ingest
//!
//! CSV ingestion for the Roster importer: parse a delimited UTF-8 file into a
//! [`RawTable`], then [`validate`] it into records carrying exactly the 15
//! required attributes, synthesizing the avatar URL when the input lacks that
//! column.

pub mod error;
pub mod reader;
pub mod table;
pub mod validate;

pub use error::IngestError;
pub use reader::{parse_str, read_path};
pub use table::RawTable;
pub use validate::validate;
