//! Batch PIN migration: reads a members CSV carrying a plaintext `PIN`
//! column, writes an otherwise identical CSV with `PIN` removed and a
//! `PIN_Hash` column appended.

use crate::auth::pin::pin_hash;
use crate::errors::{PortalError, PortalResult};
use crate::model::member::{COL_PIN, COL_PIN_HASH};
use csv::{Reader, StringRecord, Writer};
use std::path::Path;

/// Transforms `infile` into `outfile`, hashing every PIN with `salt`.
/// Returns the number of records written.
///
/// Fails without writing partial output when the `PIN` column is absent, and
/// after a full scan when any record has a blank PIN; bad records are
/// reported together by MemberID (or 1-based row number) so the operator can
/// fix them in one pass.
pub fn hash_pin_table(infile: &Path, outfile: &Path, salt: &str) -> PortalResult<usize> {
    let mut reader = Reader::from_path(infile)?;

    let headers = reader.headers()?.clone();
    let pin_idx = headers
        .iter()
        .position(|h| h.trim() == COL_PIN)
        .ok_or_else(|| PortalError::MissingColumns {
            columns: vec![COL_PIN.to_string()],
        })?;
    let id_idx = headers.iter().position(|h| h.trim() == "MemberID");

    let records: Vec<StringRecord> = reader.records().collect::<Result<_, _>>()?;

    // Scan for unusable rows before writing anything.
    let bad_rows: Vec<String> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.get(pin_idx).unwrap_or("").trim().is_empty())
        .map(|(i, record)| row_label(record, id_idx, i))
        .collect();
    if !bad_rows.is_empty() {
        return Err(PortalError::RowsWithoutPin { rows: bad_rows });
    }

    let mut writer = Writer::from_path(outfile)?;

    let mut out_header: Vec<&str> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != pin_idx)
        .map(|(_, h)| h)
        .collect();
    out_header.push(COL_PIN_HASH);
    writer.write_record(&out_header)?;

    for record in &records {
        let pin = record.get(pin_idx).unwrap_or("").trim();
        let mut row: Vec<String> = record
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != pin_idx)
            .map(|(_, cell)| cell.to_string())
            .collect();
        row.push(pin_hash(salt, pin));
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(records.len())
}

fn row_label(record: &StringRecord, id_idx: Option<usize>, index: usize) -> String {
    match id_idx.and_then(|i| record.get(i)).map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => format!("row {}", index + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).expect("create csv");
        write!(file, "{content}").expect("write csv");
        path
    }

    #[test]
    fn test_pin_column_replaced_by_hash() {
        let dir = TempDir::new().unwrap();
        let infile = write_csv(
            &dir,
            "in.csv",
            "MemberID,Email,PIN\nM001,a@example.com,482913\nM002,b@example.com,7777\n",
        );
        let outfile = dir.path().join("out.csv");

        let n = hash_pin_table(&infile, &outfile, "dojo-salt").unwrap();
        assert_eq!(n, 2);

        let out = fs::read_to_string(&outfile).unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next().unwrap(), "MemberID,Email,PIN_Hash");
        let first = lines.next().unwrap();
        assert!(first.starts_with("M001,a@example.com,"));
        assert!(first.ends_with(&pin_hash("dojo-salt", "482913")));
        assert!(!out.contains("482913"));
    }

    #[test]
    fn test_missing_pin_column_names_it() {
        let dir = TempDir::new().unwrap();
        let infile = write_csv(&dir, "in.csv", "MemberID,Email\nM001,a@example.com\n");
        let outfile = dir.path().join("out.csv");

        let err = hash_pin_table(&infile, &outfile, "s").unwrap_err();
        match err {
            PortalError::MissingColumns { columns } => assert_eq!(columns, vec!["PIN"]),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!outfile.exists());
    }

    #[test]
    fn test_blank_pins_reported_by_member_id() {
        let dir = TempDir::new().unwrap();
        let infile = write_csv(
            &dir,
            "in.csv",
            "MemberID,PIN\nM001,1234\nM002,\nM003,   \n",
        );
        let outfile = dir.path().join("out.csv");

        let err = hash_pin_table(&infile, &outfile, "s").unwrap_err();
        match err {
            PortalError::RowsWithoutPin { rows } => assert_eq!(rows, vec!["M002", "M003"]),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!outfile.exists());
    }

    #[test]
    fn test_blank_pin_without_member_id_reports_row_number() {
        let dir = TempDir::new().unwrap();
        let infile = write_csv(&dir, "in.csv", "Email,PIN\na@example.com,\n");
        let outfile = dir.path().join("out.csv");

        let err = hash_pin_table(&infile, &outfile, "s").unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_hashed_output_verifies_with_original_pin() {
        use crate::auth::verify::find_member;
        use crate::model::member::{Member, MEMBER_COLUMNS};
        use crate::model::table::Table;

        let dir = TempDir::new().unwrap();
        let header = format!("{},PIN\n", MEMBER_COLUMNS.join(","));
        let row = "M001,Aiko,aiko@example.com,2025,20,4,16,2025-06-01,482913\n";
        let infile = write_csv(&dir, "in.csv", &format!("{header}{row}"));
        let outfile = dir.path().join("out.csv");

        hash_pin_table(&infile, &outfile, "dojo-salt").unwrap();

        let mut reader = Reader::from_path(&outfile).unwrap();
        let mut values = vec![reader
            .headers()
            .unwrap()
            .iter()
            .map(String::from)
            .collect::<Vec<_>>()];
        for record in reader.records() {
            values.push(record.unwrap().iter().map(String::from).collect());
        }

        let table = Table::new(values).unwrap();
        let members = Member::from_table(&table).unwrap();

        assert!(find_member(&members, "aiko@example.com", "482913", "dojo-salt").is_ok());
        assert!(find_member(&members, "aiko@example.com", "482914", "dojo-salt").is_err());
    }
}
