//! Hand-assembled ZIP container support.
//!
//! This module builds a stored (uncompressed) ZIP archive from named byte
//! payloads without any archive library: an append-only little-endian byte
//! buffer, a table-driven CRC-32, and the writer that lays out local
//! headers, the central directory, and the end record.

mod byte_writer;
mod crc32;
mod zip;

pub use crc32::crc32;
pub use zip::{ArchiveEntry, write_archive};

pub(crate) use byte_writer::ByteWriter;
