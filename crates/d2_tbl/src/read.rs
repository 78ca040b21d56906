//! Types for reading string table files
//!

use byteorder::{LittleEndian, ReadBytesExt};
use std::{
    collections::HashMap,
    io::{Read, Seek, SeekFrom},
};
use tracing::debug;

use crate::error::{Error, Result};

/// Size of one hash node record on disk.
const HASH_NODE_SIZE: u64 = 17;

/// Upper bound on a single key or value string. Real tables stay far below this;
/// hitting it means the string region is corrupt and has no NUL terminator.
const MAX_STRING_LEN: usize = 0xFFFF;

/// TBL file reader
///
/// ```no_run
/// use std::io::prelude::*;
///
/// fn list_entries(reader: impl Read + Seek) -> d2_tbl::error::Result<()> {
///     let tbl = d2_tbl::StringTableReader::new(reader)?;
///
///     for (key, value) in tbl.get_entries() {
///         println!("{}: {}", &key, &value);
///     }
///
///     Ok(())
/// }
/// ```
pub struct StringTableReader {
    entries: HashMap<String, String>,
}

impl StringTableReader {
    /// Read a TBL file and parse its entries.
    pub fn new<R: Read + Seek>(mut reader: R) -> Result<StringTableReader> {
        // CRC of the header, which the game itself never validates
        reader.seek(SeekFrom::Current(2))?;
        let count = reader.read_u16::<LittleEndian>()?;
        // hash table size (4), one unknown byte, string region start (4),
        // miss tolerance (4), string region end (4): none are needed to
        // walk the element index
        reader.seek(SeekFrom::Current(17))?;

        let mut elements = Vec::with_capacity(count as usize);
        for _ in 0..count {
            elements.push(reader.read_u16::<LittleEndian>()?);
        }

        // The hash node array begins right after the element index
        let node_start = reader.stream_position()?;

        let mut entries = HashMap::with_capacity(count as usize);
        for element in elements {
            // used flag (1), index number (2) and key hash (4) precede the offsets
            let node = node_start + u64::from(element) * HASH_NODE_SIZE;
            reader.seek(SeekFrom::Start(node + 7))?;

            let key_offset = reader.read_u32::<LittleEndian>()?;
            let value_offset = reader.read_u32::<LittleEndian>()?;
            // the trailing u16 value length goes unused, strings are NUL terminated

            let key = read_string(&mut reader, key_offset)?;
            let value = read_string(&mut reader, value_offset)?;
            entries.insert(key, value);
        }

        debug!("read {} string table entries", entries.len());

        Ok(StringTableReader { entries })
    }

    /// Number of entries contained in this TBL.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this TBL file contains no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a reference to the entries in this file
    pub fn get_entries(&self) -> &HashMap<String, String> {
        &self.entries
    }

    /// Consume the reader and return the parsed entries
    pub fn into_entries(self) -> HashMap<String, String> {
        self.entries
    }

    /// Try to get a value from this file by its key
    pub fn by_key(&self, key: impl AsRef<str>) -> Option<&str> {
        self.entries.get(key.as_ref()).map(|v| v.as_str())
    }
}

/// Read a NUL-terminated string at an absolute offset, excluding the terminator.
///
/// Table values are Windows code page text, so decoding is lossy rather than strict.
fn read_string<R: Read + Seek>(reader: &mut R, offset: u32) -> Result<String> {
    reader.seek(SeekFrom::Start(u64::from(offset)))?;

    let mut raw: Vec<u8> = Vec::new();
    loop {
        let byte = reader.read_u8()?;
        if byte == b'\0' {
            break;
        }
        if raw.len() == MAX_STRING_LEN {
            return Err(Error::UnterminatedString { offset });
        }
        raw.push(byte);
    }

    Ok(String::from_utf8_lossy(&raw).into_owned())
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use crate::error::{Error, Result};
    use crate::read::StringTableReader;

    /// Assemble a well-formed TBL image: one hash node per entry in slot
    /// order, with `positions` as the element index contents.
    fn build_tbl(entries: &[(&str, &str)], positions: &[u16]) -> Vec<u8> {
        let node_start = 21 + positions.len() * 2;
        let string_start = node_start + entries.len() * 17;

        let mut strings: Vec<u8> = Vec::new();
        let mut offsets = Vec::new();
        for (key, value) in entries {
            let key_offset = (string_start + strings.len()) as u32;
            strings.extend_from_slice(key.as_bytes());
            strings.push(0);
            let value_offset = (string_start + strings.len()) as u32;
            strings.extend_from_slice(value.as_bytes());
            strings.push(0);
            offsets.push((key_offset, value_offset));
        }

        let mut data = Vec::new();
        data.extend_from_slice(&[0x00, 0x00]); // crc
        data.extend_from_slice(&(positions.len() as u16).to_le_bytes());
        data.extend_from_slice(&(entries.len() as u32).to_le_bytes()); // hash table size
        data.push(0x00); // unknown
        data.extend_from_slice(&(string_start as u32).to_le_bytes());
        data.extend_from_slice(&1u32.to_le_bytes()); // miss tolerance
        data.extend_from_slice(&((string_start + strings.len()) as u32).to_le_bytes());
        for position in positions {
            data.extend_from_slice(&position.to_le_bytes());
        }
        for (i, (key_offset, value_offset)) in offsets.iter().enumerate() {
            data.push(0x01); // used
            data.extend_from_slice(&(i as u16).to_le_bytes());
            data.extend_from_slice(&0u32.to_le_bytes()); // hash
            data.extend_from_slice(&key_offset.to_le_bytes());
            data.extend_from_slice(&value_offset.to_le_bytes());
            data.extend_from_slice(&0u16.to_le_bytes()); // value length
        }
        data.extend_from_slice(&strings);
        data
    }

    #[test]
    fn read_single_entry() -> Result<()> {
        let input = build_tbl(&[("x4", "Cave")], &[0]);

        let tbl = StringTableReader::new(Cursor::new(input))?;
        assert_eq!(tbl.len(), 1);
        assert_eq!(tbl.by_key("x4"), Some("Cave"));

        Ok(())
    }

    #[test]
    fn read_empty_table() -> Result<()> {
        let input = build_tbl(&[], &[]);

        let tbl = StringTableReader::new(Cursor::new(input))?;
        assert!(tbl.is_empty());

        Ok(())
    }

    #[test]
    fn read_scrambled_element_index() -> Result<()> {
        // The element index points at nodes in an order unrelated to their
        // slot order, as the hash layout of real files does.
        let input = build_tbl(&[("first", "One"), ("second", "Two")], &[1, 0]);

        let tbl = StringTableReader::new(Cursor::new(input))?;
        assert_eq!(tbl.len(), 2);
        assert_eq!(tbl.by_key("first"), Some("One"));
        assert_eq!(tbl.by_key("second"), Some("Two"));

        Ok(())
    }

    #[test]
    fn duplicate_key_last_write_wins() -> Result<()> {
        let input = build_tbl(&[("x4", "Cave"), ("x4", "Cave Level 2")], &[0, 1]);

        let tbl = StringTableReader::new(Cursor::new(input))?;
        assert_eq!(tbl.len(), 1);
        assert_eq!(tbl.by_key("x4"), Some("Cave Level 2"));

        Ok(())
    }

    #[test]
    fn read_truncated_table() {
        let mut input = build_tbl(&[("x4", "Cave")], &[0]);
        input.truncate(input.len() / 2);

        let tbl = StringTableReader::new(Cursor::new(input));
        assert!(matches!(tbl, Err(Error::IOError(_))));
    }

    #[test]
    fn read_unterminated_string() {
        let mut input = build_tbl(&[("x4", "Cave")], &[0]);
        // Replace the final NUL with a runaway run of bytes longer than
        // any string a valid file could hold.
        input.pop();
        input.extend(std::iter::repeat(b'x').take(0x10000 + 1));

        let tbl = StringTableReader::new(Cursor::new(input));
        assert!(matches!(tbl, Err(Error::UnterminatedString { .. })));
    }
}
