//! Stored-method ZIP archive writer.
//!
//! Lays out the container exactly as consumers expect it: one local file
//! header + name + payload per entry in input order, then the central
//! directory, then the end-of-central-directory record. Entries are always
//! stored uncompressed, and all multi-byte integers are little-endian.

use tracing::debug;

use super::{ByteWriter, crc32};

const LOCAL_FILE_HEADER_SIGNATURE: u32 = 0x0403_4B50;
const CENTRAL_DIRECTORY_SIGNATURE: u32 = 0x0201_4B50;
const END_OF_CENTRAL_DIRECTORY_SIGNATURE: u32 = 0x0605_4B50;

const VERSION_MADE_BY: u16 = 20;
const VERSION_NEEDED: u16 = 20;
const METHOD_STORED: u16 = 0;

/// One named payload destined for an archive.
///
/// Names are POSIX-style relative paths, e.g. `"xl/workbook.xml"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// The entry's path inside the archive.
    pub name: String,
    /// The entry's payload bytes.
    pub data: Vec<u8>,
}

impl ArchiveEntry {
    /// Creates an entry from a name and payload.
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}

/// Builds a ZIP archive from the given entries, in order.
///
/// There is no error path: any entry list, including an empty one,
/// produces a structurally valid archive. Every entry is stored
/// uncompressed, so the compressed and uncompressed size fields always
/// carry the same value.
///
/// # Example
///
/// ```
/// use wage_report_engine::archive::{write_archive, ArchiveEntry};
///
/// let bytes = write_archive(&[ArchiveEntry::new("hello.txt", b"hi".to_vec())]);
/// assert_eq!(&bytes[0..4], &[0x50, 0x4b, 0x03, 0x04]);
///
/// let empty = write_archive(&[]);
/// assert_eq!(&empty[0..4], &[0x50, 0x4b, 0x05, 0x06]);
/// ```
pub fn write_archive(entries: &[ArchiveEntry]) -> Vec<u8> {
    let mut out = ByteWriter::new();
    let mut recorded: Vec<(u32, u32)> = Vec::with_capacity(entries.len());

    for entry in entries {
        let offset = out.len() as u32;
        let checksum = crc32(&entry.data);
        let name = entry.name.as_bytes();
        let size = entry.data.len() as u32;

        out.write_u32_le(LOCAL_FILE_HEADER_SIGNATURE);
        out.write_u16_le(VERSION_NEEDED);
        out.write_u16_le(0); // general-purpose flags
        out.write_u16_le(METHOD_STORED);
        out.write_u16_le(0); // modification time
        out.write_u16_le(0); // modification date
        out.write_u32_le(checksum);
        out.write_u32_le(size); // compressed size
        out.write_u32_le(size); // uncompressed size
        out.write_u16_le(name.len() as u16);
        out.write_u16_le(0); // extra field length
        out.write_bytes(name);
        out.write_bytes(&entry.data);

        recorded.push((checksum, offset));
    }

    let central_offset = out.len() as u32;
    for (entry, &(checksum, offset)) in entries.iter().zip(&recorded) {
        let name = entry.name.as_bytes();
        let size = entry.data.len() as u32;

        out.write_u32_le(CENTRAL_DIRECTORY_SIGNATURE);
        out.write_u16_le(VERSION_MADE_BY);
        out.write_u16_le(VERSION_NEEDED);
        out.write_u16_le(0); // general-purpose flags
        out.write_u16_le(METHOD_STORED);
        out.write_u16_le(0); // modification time
        out.write_u16_le(0); // modification date
        out.write_u32_le(checksum);
        out.write_u32_le(size);
        out.write_u32_le(size);
        out.write_u16_le(name.len() as u16);
        out.write_u16_le(0); // extra field length
        out.write_u16_le(0); // comment length
        out.write_u16_le(0); // disk number start
        out.write_u16_le(0); // internal attributes
        out.write_u32_le(0); // external attributes
        out.write_u32_le(offset);
        out.write_bytes(name);
    }
    let central_size = out.len() as u32 - central_offset;

    out.write_u32_le(END_OF_CENTRAL_DIRECTORY_SIGNATURE);
    out.write_u16_le(0); // this disk
    out.write_u16_le(0); // disk holding the central directory
    out.write_u16_le(entries.len() as u16); // entries on this disk
    out.write_u16_le(entries.len() as u16); // entries total
    out.write_u32_le(central_size);
    out.write_u32_le(central_offset);
    out.write_u16_le(0); // comment length

    debug!(
        entries = entries.len(),
        bytes = out.len(),
        "wrote archive"
    );
    out.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_u16(bytes: &[u8], at: usize) -> u16 {
        u16::from_le_bytes([bytes[at], bytes[at + 1]])
    }

    fn read_u32(bytes: &[u8], at: usize) -> u32 {
        u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
    }

    #[test]
    fn test_empty_archive_is_a_bare_end_record() {
        let bytes = write_archive(&[]);
        assert_eq!(bytes.len(), 22);
        assert_eq!(read_u32(&bytes, 0), END_OF_CENTRAL_DIRECTORY_SIGNATURE);
        assert_eq!(read_u16(&bytes, 8), 0); // entry count
        assert_eq!(read_u32(&bytes, 12), 0); // central directory size
        assert_eq!(read_u32(&bytes, 16), 0); // central directory offset
    }

    #[test]
    fn test_local_header_layout() {
        let bytes = write_archive(&[ArchiveEntry::new("a.txt", b"hello".to_vec())]);

        assert_eq!(read_u32(&bytes, 0), LOCAL_FILE_HEADER_SIGNATURE);
        assert_eq!(read_u16(&bytes, 4), VERSION_NEEDED);
        assert_eq!(read_u16(&bytes, 8), METHOD_STORED);
        assert_eq!(read_u32(&bytes, 14), crc32(b"hello"));
        assert_eq!(read_u32(&bytes, 18), 5); // compressed size
        assert_eq!(read_u32(&bytes, 22), 5); // uncompressed size
        assert_eq!(read_u16(&bytes, 26), 5); // name length
        assert_eq!(&bytes[30..35], b"a.txt");
        assert_eq!(&bytes[35..40], b"hello");
    }

    #[test]
    fn test_end_record_counts_and_offsets() {
        let entries = vec![
            ArchiveEntry::new("a", b"xx".to_vec()),
            ArchiveEntry::new("bb", b"y".to_vec()),
        ];
        let bytes = write_archive(&entries);

        // Local portions: (30 + 1 + 2) + (30 + 2 + 1) = 66 bytes.
        let end = bytes.len() - 22;
        assert_eq!(read_u32(&bytes, end), END_OF_CENTRAL_DIRECTORY_SIGNATURE);
        assert_eq!(read_u16(&bytes, end + 8), 2);
        assert_eq!(read_u16(&bytes, end + 10), 2);
        assert_eq!(read_u32(&bytes, end + 16), 66); // central directory offset

        // Central records are 46 bytes plus the name.
        let central_size = read_u32(&bytes, end + 12) as usize;
        assert_eq!(central_size, 46 + 1 + 46 + 2);
    }

    #[test]
    fn test_central_records_reference_local_offsets() {
        let entries = vec![
            ArchiveEntry::new("a", b"xx".to_vec()),
            ArchiveEntry::new("bb", b"y".to_vec()),
        ];
        let bytes = write_archive(&entries);

        let central_offset = {
            let end = bytes.len() - 22;
            read_u32(&bytes, end + 16) as usize
        };
        assert_eq!(read_u32(&bytes, central_offset), CENTRAL_DIRECTORY_SIGNATURE);
        assert_eq!(read_u32(&bytes, central_offset + 42), 0); // first local offset

        let second = central_offset + 46 + 1;
        assert_eq!(read_u32(&bytes, second), CENTRAL_DIRECTORY_SIGNATURE);
        assert_eq!(read_u32(&bytes, second + 42), 33); // 30 + name(1) + data(2)
    }
}
