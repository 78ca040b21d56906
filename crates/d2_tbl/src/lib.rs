//! # TBL Format Documentation
//!
//! This crate provides utilities to read and extract data from the **TBL** string table format
//! used by the game *Diablo II*. A TBL file is a hash-indexed key/value string store holding
//! the localized text of the game. TBL files are typically identified with the `.tbl` extension.
//!
//! ## File Structure
//!
//! A TBL file consists of a header, an element index, an array of fixed-size hash nodes, and a
//! string region holding NUL-terminated key and value strings.
//!
//! | Offset (bytes) | Field                  | Description                                                |
//! |----------------|------------------------|------------------------------------------------------------|
//! | 0x0000         | CRC                    | 2 bytes: Checksum of the header, not validated             |
//! | 0x0002         | Element Count          | 2 bytes: Number of key/value pairs in this file            |
//! | 0x0004         | Hash Table Size        | 4 bytes: Number of slots in the hash node array            |
//! | 0x0008         | Unknown                | 1 byte: Purpose unknown                                    |
//! | 0x0009         | Index Start            | 4 bytes: Offset of the first byte of the string region     |
//! | 0x000D         | Miss Tolerance         | 4 bytes: Probe limit used by the game's hash lookup        |
//! | 0x0011         | Index End              | 4 bytes: Offset just past the last byte of the string region |
//! | 0x0015         | Element Index          | (Element Count * 2) bytes: One u16 slot number per element |
//!
//! ### Element Index
//!
//! Each entry in the element index is the ordinal slot of that element within the hash node
//! array, not a byte offset. The array of hash nodes starts immediately after the element index.
//!
//! ### Hash Nodes
//!
//! Each hash node is a fixed 17-byte record:
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | Used                   | 1 byte: Set to 1 when the slot holds an element         |
//! | 0x0001         | Index                  | 2 bytes: The element's position in the element index    |
//! | 0x0003         | Hash                   | 4 bytes: Hash of the key string                         |
//! | 0x0007         | Key Offset             | 4 bytes: Offset of the key string from the file start   |
//! | 0x000B         | Value Offset           | 4 bytes: Offset of the value string from the file start |
//! | 0x000F         | Value Length           | 2 bytes: Length of the value string, unused here        |
//!
//! The game resolves keys through the hash and the miss tolerance; this reader instead walks
//! every element through the element index, which reaches every used node regardless of its
//! hash bucket. Key and value strings are NUL terminated, so the stored value length is ignored.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.tbl`
//! - **Endianness**: Little-endian for all multi-byte integers
//!

pub mod error;
pub mod read;

pub use read::StringTableReader;
