// src/csv.rs
use std::io::{self, Write};

use crate::record::RiderRecord;
use crate::specs::fields::FieldSet;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Delimited export of a record sequence.
/// - `fields`: the projection the records were built with (header row + column order)
/// - null values become empty cells
pub fn to_export_string(
    fields: &FieldSet,
    records: &[RiderRecord],
    include_headers: bool,
    sep: char,
) -> io::Result<String> {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        write_row(&mut buf, &fields.names(), sep)?;
    }
    for r in records {
        write_row(&mut buf, &r.to_row(), sep)?;
    }

    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RiderSource;
    use crate::specs::fields::Field;

    #[test]
    fn quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &[s!("a"), s!("b,c"), s!("say \"hi\"")], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a,\"b,c\",\"say \"\"hi\"\"\"\n");
    }

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::StorageFull, "full"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_errors_propagate() {
        let err = write_row(FullDisk, &[s!("a")], ',').unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::StorageFull);
    }

    #[test]
    fn export_with_headers_and_nulls() {
        let fs: FieldSet = [Field::RiderName, Field::TeamName, Field::RiderNumber].into_iter().collect();
        let recs = vec![
            RiderRecord::project(&fs, &RiderSource {
                rider_name: Some(s!("ONE Alpha")),
                team_name: Some(s!("Alpha, Racing")),
                rider_number: Some(1),
                ..Default::default()
            }),
            RiderRecord::project(&fs, &RiderSource { rider_name: Some(s!("SOLO")), ..Default::default() }),
        ];
        let out = to_export_string(&fs, &recs, true, ',').unwrap();
        assert_eq!(out, "rider_name,team_name,rider_number\nONE Alpha,\"Alpha, Racing\",1\nSOLO,,\n");

        let tsv = to_export_string(&fs, &recs, false, '\t').unwrap();
        assert_eq!(tsv, "ONE Alpha\tAlpha, Racing\t1\nSOLO\t\t\n");
    }
}
