//! Types for reading tab-delimited record files
//!

use std::{collections::HashMap, fs::File, io::Read, path::Path};

use crate::error::Result;

/// One row of a data file, keyed by trimmed column name.
pub type Record = HashMap<String, String>;

/// Read a tab-delimited file into a sequence of records.
///
/// The first row is the header; every other row maps trimmed column name to
/// trimmed field value. A row with the wrong number of fields fails the
/// whole read.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut csv = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_reader(reader);

    let header: Vec<String> = csv
        .headers()?
        .iter()
        .map(|name| name.trim().to_string())
        .collect();

    let mut records = Vec::new();
    for row in csv.records() {
        let row = row?;

        let mut record = Record::with_capacity(header.len());
        for (name, value) in header.iter().zip(row.iter()) {
            record.insert(name.clone(), value.trim().to_string());
        }
        records.push(record);
    }

    Ok(records)
}

/// Open a data file from disk and read its records.
pub fn read_records_path(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let file = File::open(path)?;
    read_records(file)
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use crate::error::{Error, Result};
    use crate::read::read_records;

    #[test]
    fn read_trimmed_records() -> Result<()> {
        let input = "Id\t Name \tspawnable\n1\t Den of Evil\t1\n2\tCave \t0\n";

        let records = read_records(Cursor::new(input))?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["Id"], "1");
        assert_eq!(records[0]["Name"], "Den of Evil");
        assert_eq!(records[1]["Name"], "Cave");
        assert_eq!(records[1]["spawnable"], "0");

        Ok(())
    }

    #[test]
    fn read_header_only() -> Result<()> {
        let records = read_records(Cursor::new("Id\tName\n"))?;
        assert!(records.is_empty());

        Ok(())
    }

    #[test]
    fn read_short_row() {
        let input = "Id\tName\tspawnable\n1\tCave\n";

        let records = read_records(Cursor::new(input));
        assert!(matches!(records, Err(Error::CsvError(_))));
    }
}
