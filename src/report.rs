use std::path::Path;

use crate::errors::{FreqError, Result};
use crate::frequency::FreqTable;

pub const DEFAULT_TOP_N : usize = 2000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportRow {
    pub word : String,
    pub frequency : u64,
}

/// Sorts by descending frequency, drops blank words and keeps the first `top_n` rows.
/// Equal frequencies stay in the table's first-insertion order.
pub fn build_report(table : FreqTable, top_n : usize) -> Vec<ReportRow>
{
    let mut rows = table.into_entries();
    rows.sort_by(|(_, a), (_, b)| b.cmp(a));
    rows.into_iter()
        .filter(|(word, _)| !word.trim().is_empty())
        .take(top_n)
        .map(|(word, frequency)| ReportRow{word, frequency})
        .collect()
}

/// Truncates and rewrites the file at `path`.
pub fn write_report(path : &Path, rows : &[ReportRow]) -> Result<()>
{
    let write_err = |source| FreqError::Write{path : path.to_path_buf(), source};
    let mut writer = csv::Writer::from_path(path).map_err(write_err)?;
    writer.write_record(&["Word", "Frequency"]).map_err(write_err)?;
    for row in rows
    {
        writer.write_record(&[row.word.as_str(), row.frequency.to_string().as_str()]).map_err(write_err)?;
    }
    writer.flush().map_err(|err| write_err(csv::Error::from(err)))?;
    Ok(())
}
