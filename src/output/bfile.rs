// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! OEIS b-files: one `<n> <a(n)>` line per term, offset 1, no header.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Write `values` as b-file lines `1 v1`, `2 v2`, … to `out`.
pub fn write_bfile_to<W: Write>(out: &mut W, values: &[usize]) -> Result<()> {
    for (idx, value) in values.iter().enumerate() {
        writeln!(out, "{} {}", idx + 1, value)?;
    }
    Ok(())
}

/// Create (or truncate) the file at `path` and write `values` as a b-file.
pub fn write_bfile(path: &Path, values: &[usize]) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_bfile_to(&mut out, values)?;
    out.flush()?;
    info!(path = %path.display(), terms = values.len(), "wrote b-file");
    Ok(())
}

/// Parse b-file text back into the value sequence.
///
/// Blank lines and `#` comment lines are skipped. The index column must run
/// 1, 2, 3, … without gaps.
pub fn parse_bfile<R: BufRead>(reader: R) -> Result<Vec<usize>> {
    let mut values = Vec::new();
    for (line_idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let line_no = line_idx + 1;
        let malformed = || Error::MalformedBFileLine {
            line: line_no,
            content: line.clone(),
        };
        let mut fields = trimmed.split_whitespace();
        let (Some(index), Some(value), None) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(malformed());
        };
        let index: usize = index.parse().map_err(|_| malformed())?;
        let value: usize = value.parse().map_err(|_| malformed())?;
        let expected = values.len() + 1;
        if index != expected {
            return Err(Error::BFileOffset {
                line: line_no,
                expected,
                found: index,
            });
        }
        values.push(value);
    }
    Ok(values)
}

/// Read the b-file at `path`.
pub fn read_bfile(path: &Path) -> Result<Vec<usize>> {
    parse_bfile(BufReader::new(File::open(path)?))
}
