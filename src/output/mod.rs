// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text renderings of sweep results.
//!
//! All writers take any [`Write`] so that the binaries can target stdout and
//! tests can target a `Vec<u8>`.

pub mod bfile;

pub use bfile::{parse_bfile, read_bfile, write_bfile, write_bfile_to};

use crate::driver::{SweepRow, VerificationReport};
use crate::geometry::SolutionTriple;
use crate::rule::a_rule;
use std::io::{self, Write};

pub const TABLE_HEADER: &str = "n :  d_angle_fast  |  a_rule   check";

/// Side-by-side table of count and rule with an OK/DIFF marker per row.
pub fn write_table<W: Write>(out: &mut W, rows: &[SweepRow]) -> io::Result<()> {
    writeln!(out, "{}", TABLE_HEADER)?;
    for row in rows {
        write_table_row(out, row)?;
    }
    Ok(())
}

pub fn write_table_row<W: Write>(out: &mut W, row: &SweepRow) -> io::Result<()> {
    let check = if row.matches() { "OK" } else { "DIFF" };
    writeln!(
        out,
        "{:3}: {:12}  |  {:6}   {}",
        row.n, row.count, row.rule, check
    )
}

/// `n,value` lines for n = 1, 2, ….
pub fn write_csv<W: Write>(out: &mut W, values: &[usize]) -> io::Result<()> {
    for (idx, value) in values.iter().enumerate() {
        writeln!(out, "{},{}", idx + 1, value)?;
    }
    Ok(())
}

/// All values on one comma-separated line, preceded by a caption.
pub fn write_oeis_line<W: Write>(out: &mut W, values: &[usize]) -> io::Result<()> {
    writeln!(out, "OEIS data (offset 1):")?;
    writeln!(out, "{}", oeis_line(values))
}

pub fn oeis_line(values: &[usize]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Count, sorted triples and the rule's value for a single n.
///
/// `triples` may be in discovery order; they are sorted before printing.
pub fn write_triple_listing<W: Write>(
    out: &mut W,
    n: usize,
    tolerance: f64,
    triples: &[SolutionTriple],
) -> io::Result<()> {
    let mut sorted = triples.to_vec();
    sorted.sort_unstable();
    writeln!(out)?;
    writeln!(
        out,
        "Solution triples for n={} (tol={}): count = {}",
        n,
        format_tolerance(tolerance),
        sorted.len()
    )?;
    for triple in &sorted {
        writeln!(out, "{}", triple)?;
    }
    writeln!(out, "Rule a_rule({}) = {}", n, a_rule(n))
}

/// Verifier report: one `DIFF` line per mismatch, or a single `OK` line.
pub fn write_verification<W: Write>(out: &mut W, report: &VerificationReport) -> io::Result<()> {
    if report.is_ok() {
        return writeln!(
            out,
            "OK: d_angle_fast(n) == a_rule(n) for n=1..{}",
            report.max_n
        );
    }
    for row in &report.mismatches {
        writeln!(
            out,
            "DIFF at n={}: fast={}, rule={}",
            row.n, row.count, row.rule
        )?;
    }
    Ok(())
}

/// Shortest round-trip rendering of a tolerance in the conventional float
/// style: positional for exponents in [-4, 16), otherwise scientific with a
/// signed, at least two-digit exponent (`0.001`, `1e-09`, `1e+16`).
pub fn format_tolerance(tolerance: f64) -> String {
    if !tolerance.is_finite() {
        return tolerance.to_string();
    }
    if tolerance == 0.0 {
        return "0.0".to_string();
    }
    let scientific = format!("{:e}", tolerance);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
    }
    let positional = tolerance.to_string();
    if positional.contains('.') {
        positional
    } else {
        format!("{}.0", positional)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_table() {
        let rows = [
            SweepRow {
                n: 1,
                count: 1,
                rule: 1,
            },
            SweepRow {
                n: 9,
                count: 25,
                rule: 37,
            },
        ];
        let text = render(|out| write_table(out, &rows));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], TABLE_HEADER);
        assert_eq!(lines[1], "  1:            1  |       1   OK");
        assert_eq!(lines[2], "  9:           25  |      37   DIFF");
    }

    #[test]
    fn test_csv() {
        let text = render(|out| write_csv(out, &[1, 0, 7]));
        assert_eq!(text, "1,1\n2,0\n3,7\n");
    }

    #[test]
    fn test_oeis_line() {
        let text = render(|out| write_oeis_line(out, &[1, 0, 7, 0, 13]));
        assert_eq!(text, "OEIS data (offset 1):\n1, 0, 7, 0, 13\n");
        assert_eq!(oeis_line(&[]), "");
    }

    #[test]
    fn test_verification_ok() {
        let report = VerificationReport {
            max_n: 200,
            mismatches: Vec::new(),
        };
        let text = render(|out| write_verification(out, &report));
        assert_eq!(text, "OK: d_angle_fast(n) == a_rule(n) for n=1..200\n");
    }

    #[test]
    fn test_verification_lists_every_diff() {
        let report = VerificationReport {
            max_n: 7,
            mismatches: vec![
                SweepRow {
                    n: 5,
                    count: 1,
                    rule: 13,
                },
                SweepRow {
                    n: 7,
                    count: 7,
                    rule: 19,
                },
            ],
        };
        let text = render(|out| write_verification(out, &report));
        assert_eq!(
            text,
            "DIFF at n=5: fast=1, rule=13\nDIFF at n=7: fast=7, rule=19\n"
        );
    }

    #[test]
    fn test_format_tolerance() {
        assert_eq!(format_tolerance(1e-12), "1e-12");
        assert_eq!(format_tolerance(1e-9), "1e-09");
        assert_eq!(format_tolerance(2.5e-10), "2.5e-10");
        assert_eq!(format_tolerance(1e-5), "1e-05");
        assert_eq!(format_tolerance(1e-4), "0.0001");
        assert_eq!(format_tolerance(1e-3), "0.001");
        assert_eq!(format_tolerance(1.0), "1.0");
        assert_eq!(format_tolerance(1e16), "1e+16");
        assert_eq!(format_tolerance(0.0), "0.0");
    }

    #[test]
    fn test_triple_listing_shows_tolerance() {
        let text = render(|out| write_triple_listing(out, 1, 1e-9, &[]));
        assert!(text.contains("(tol=1e-09): count = 0"));
    }

    #[test]
    fn test_triple_listing_is_sorted() {
        let triples = [
            SolutionTriple::new(3, 2, 2),
            SolutionTriple::new(1, 3, 2),
            SolutionTriple::new(2, 2, 2),
        ];
        let text = render(|out| write_triple_listing(out, 3, 1e-12, &triples));
        assert_eq!(
            text,
            "\nSolution triples for n=3 (tol=1e-12): count = 3\n\
             (1, 3, 2)\n(2, 2, 2)\n(3, 2, 2)\n\
             Rule a_rule(3) = 7\n"
        );
    }
}
