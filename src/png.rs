//! Module for walking the chunk stream of PNG data.
//!
//! * [Portable Network Graphics Specification (Third Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/png/
//!
//! A PNG datastream is an 8 byte signature followed by a series of "chunks".
//! Every chunk has the same framing:
//!
//! | field  | size          | notes                                  |
//! |--------|---------------|----------------------------------------|
//! | length | 4             | big-endian, counts only the payload    |
//! | type   | 4             | ascii letters, the case bits mean things |
//! | data   | `length`      | depends on the type                    |
//! | CRC    | 4             | big-endian, covers the type and data   |
//!
//! The last chunk of a well formed PNG is always `IEND`.
//!
//! ## Library Design Assumptions
//!
//! Unlike a full image decoder, this module only cares about the framing.
//! It works directly on a [`Read`](std::io::Read) + [`Seek`](std::io::Seek)
//! stream and never holds more than one chunk's worth of data at a time.
//! Chunk payloads are skipped over with a seek, so even a very large `IDAT`
//! costs nothing to step past.
//!
//! The one exception is `tEXt`, which can optionally be read into memory so
//! that the text can be shown to a user.
//!
//! ## Parsing Errors
//!
//! The first 8 bytes *are* checked, see [`check_png_signature`]. After that
//! the decoder is very permissive:
//!
//! * The declared CRC of each chunk is reported, not verified.
//! * Chunk ordering rules and duplicate chunk rules are ignored.
//! * Chunk types are not required to be ascii letters.
//!
//! What it won't let slide is a stream that stops in the middle of a chunk.
//! Running out of bytes exactly between two chunks is a normal end of the
//! stream, while running out of bytes anywhere else is
//! [`Truncated`](crate::PngChunkError::Truncated).

mod chunk_type;
pub use chunk_type::*;

mod decoder;
pub use decoder::*;

mod record;
pub use record::*;

mod signature;
pub use signature::*;

mod text;
pub use text::*;
