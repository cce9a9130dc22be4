//#![warn(missing_docs)]

//! A crate for listing the chunks of a PNG file.
//!
//! The [`png`] module walks the chunk stream. Each chunk comes out as a
//! [`ChunkRecord`](png::ChunkRecord) with its type, length, and declared CRC,
//! without the payload ever being read (unless you ask for `tEXt` text).
//!
//! The [`chunk_table`] and [`report`] modules are what the `pngchunks` binary
//! uses to turn those records into lines of console output.

mod error;
pub use error::*;

mod int_endian;
pub use int_endian::*;

mod parser_helpers;
pub(crate) use parser_helpers::*;

pub mod chunk_table;

pub mod png;

pub mod report;
