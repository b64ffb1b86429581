//! CSV export for optimization run records.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::opt::types::RunRecord;

/// Schema v1 column header for CSV run export.
const HEADER: &str = "run,before_a_kw,before_b_kw,before_c_kw,\
                      after_a_kw,after_b_kw,after_c_kw,\
                      total_savings_kw,peak_reduction_kw,savings_percent,floor_hits";

/// Exports run records to a CSV file at the given path.
///
/// Writes a header row followed by one data row per run using the
/// schema v1 column layout. Produces deterministic output for identical
/// inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(records: &[RunRecord], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(records, buf)
}

/// Writes run records as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(records: &[RunRecord], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    // Header
    wtr.write_record(HEADER.split(',').map(str::trim))?;

    // Data rows
    for r in records {
        let before = r.before.values();
        let after = r.after.values();
        wtr.write_record(&[
            r.run.to_string(),
            before[0].to_string(),
            before[1].to_string(),
            before[2].to_string(),
            after[0].to_string(),
            after[1].to_string(),
            after[2].to_string(),
            r.metrics.total_savings_kw.to_string(),
            r.metrics.peak_reduction_kw.to_string(),
            format!("{:.2}", r.metrics.savings_percent),
            r.floor_hits.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opt::metrics::compute_metrics;
    use crate::opt::types::LoadVector;

    fn make_record(run: usize) -> RunRecord {
        let before = LoadVector::new([60, 80, 45]);
        let after = LoadVector::new([40, 60, 35]);
        RunRecord {
            run,
            metrics: compute_metrics(&before, &after),
            before,
            after,
            floor_hits: 0,
        }
    }

    #[test]
    fn header_matches_schema_v1() {
        let records = vec![make_record(0)];
        let mut buf = Vec::new();
        write_csv(&records, &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let first_line = output.as_deref().unwrap_or("").lines().next().unwrap_or("");
        assert_eq!(
            first_line,
            "run,before_a_kw,before_b_kw,before_c_kw,\
             after_a_kw,after_b_kw,after_c_kw,\
             total_savings_kw,peak_reduction_kw,savings_percent,floor_hits"
        );
    }

    #[test]
    fn row_count_matches_record_count() {
        let records: Vec<RunRecord> = (0..8).map(make_record).collect();
        let mut buf = Vec::new();
        write_csv(&records, &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let lines: Vec<&str> = output.as_deref().unwrap_or("").lines().collect();
        // 1 header + 8 data rows
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn deterministic_output() {
        let records: Vec<RunRecord> = (0..5).map(make_record).collect();
        let mut buf1 = Vec::new();
        let mut buf2 = Vec::new();
        write_csv(&records, &mut buf1).ok();
        write_csv(&records, &mut buf2).ok();
        assert_eq!(buf1, buf2);
    }

    #[test]
    fn round_trip_parseable() {
        let records: Vec<RunRecord> = (0..3).map(make_record).collect();
        let mut buf = Vec::new();
        write_csv(&records, &mut buf).ok();

        let mut rdr = csv::ReaderBuilder::new().from_reader(buf.as_slice());
        let headers = rdr.headers().cloned().ok();
        assert_eq!(headers.as_ref().map(csv::StringRecord::len), Some(11));

        let mut row_count = 0;
        for record in rdr.records() {
            let rec = record.ok();
            assert!(rec.is_some(), "every row should parse");
            let rec = rec.as_ref();
            // kW columns parse as i64
            for i in 1..9 {
                let val: Result<i64, _> = rec.unwrap()[i].parse();
                assert!(val.is_ok(), "column {i} should parse as i64");
            }
            // savings_percent parses as f64
            let pct: Result<f64, _> = rec.unwrap()[9].parse();
            assert!(pct.is_ok(), "savings_percent column should parse as f64");
            row_count += 1;
        }
        assert_eq!(row_count, 3);
    }

    #[test]
    fn percent_column_keeps_two_decimals() {
        let records = vec![make_record(0)];
        let mut buf = Vec::new();
        write_csv(&records, &mut buf).ok();
        let output = String::from_utf8(buf).unwrap_or_default();
        let data_line = output.lines().nth(1).unwrap_or("");
        assert!(data_line.contains("27.03"), "line was: {data_line}");
    }
}
