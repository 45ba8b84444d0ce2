//! Logical-record reassembly on top of the `csv` tokenizer.

use std::fmt;

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};
use tracing::debug;

/// Comma-separated reader with quoting off. The default terminator splits
/// on `\n`, `\r\n` and a lone `\r`.
fn reader(text: &str) -> csv::Reader<&[u8]> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(text.trim_start_matches('\u{feff}').as_bytes())
}

fn is_blank(record: &StringRecord) -> bool {
    record.len() == 1 && record[0].trim().is_empty()
}

/// Iterator over the data records of a payload, header excluded.
///
/// The header fixes the expected column count. A record with fewer fields
/// is joined to the following non-blank records until it is wide enough:
/// its last field and the next record's first field meet with a single
/// space. A record that is still short when the input runs out is dropped
/// and counted in [`LogicalRecords::dropped`].
///
/// ```rust
/// use qb_matchup::ingest::LogicalRecords;
///
/// let text = "id,name,team\n7,Patrick\nMahomes,KC\n";
/// let rows: Vec<Vec<String>> = LogicalRecords::new(text).collect();
/// assert_eq!(rows, vec![vec!["7", "Patrick Mahomes", "KC"]]);
/// ```
pub struct LogicalRecords<'a> {
    header: Vec<String>,
    rows: StringRecordsIntoIter<&'a [u8]>,
    dropped: usize,
}

impl<'a> LogicalRecords<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut records = Self {
            header: Vec::new(),
            rows: reader(text).into_records(),
            dropped: 0,
        };
        records.header = records
            .next_record()
            .map(|header| header.iter().map(str::to_string).collect())
            .unwrap_or_default();
        records
    }

    /// Raw header cells, in column order.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn expected_columns(&self) -> usize {
        self.header.len()
    }

    /// Records discarded so far because they never reached the header width.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Next non-blank physical record.
    fn next_record(&mut self) -> Option<StringRecord> {
        loop {
            match self.rows.next()? {
                Ok(record) if is_blank(&record) => continue,
                Ok(record) => return Some(record),
                Err(e) => {
                    self.dropped += 1;
                    debug!(error = %e, "skipping unreadable record");
                }
            }
        }
    }
}

impl fmt::Debug for LogicalRecords<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogicalRecords")
            .field("header", &self.header)
            .field("dropped", &self.dropped)
            .finish_non_exhaustive()
    }
}

impl Iterator for LogicalRecords<'_> {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let expected = self.expected_columns();
        let first = self.next_record()?;
        let line = first.position().map(|pos| pos.line());
        let mut fields: Vec<String> = first.iter().map(str::to_string).collect();

        while fields.len() < expected {
            let Some(next) = self.next_record() else {
                self.dropped += 1;
                debug!(
                    line = ?line,
                    fields = fields.len(),
                    expected, "dropping short record at end of payload"
                );
                return None;
            };

            let mut rest = next.iter();
            if let (Some(last), Some(head)) = (fields.last_mut(), rest.next()) {
                last.push(' ');
                last.push_str(head);
            }
            fields.extend(rest.map(str::to_string));
        }

        Some(fields)
    }
}
