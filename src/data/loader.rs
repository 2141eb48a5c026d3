use std::path::Path;
use std::thread;

use crossbeam_channel::{bounded, Receiver};
use tracing::{info, warn};

use super::record::{normalize, RawRow};
use super::{DataError, Dataset};

const REQUIRED: [&str; 6] = ["Title", "Director", "Subject", "Awards", "Popularity", "Length"];

/// Header-driven column positions; extra columns in the file are ignored.
struct ColumnIndex {
    title: usize,
    director: usize,
    subject: usize,
    awards: usize,
    popularity: usize,
    length: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, DataError> {
        let find = |name: &'static str| -> Result<usize, DataError> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(DataError::MissingColumn(name))
        };
        Ok(Self {
            title: find(REQUIRED[0])?,
            director: find(REQUIRED[1])?,
            subject: find(REQUIRED[2])?,
            awards: find(REQUIRED[3])?,
            popularity: find(REQUIRED[4])?,
            length: find(REQUIRED[5])?,
        })
    }

    fn field(record: &csv::StringRecord, idx: usize) -> String {
        record.get(idx).unwrap_or_default().to_string()
    }

    fn row(&self, record: &csv::StringRecord) -> RawRow {
        RawRow {
            title: Self::field(record, self.title),
            director: Self::field(record, self.director),
            subject: Self::field(record, self.subject),
            awards: Self::field(record, self.awards),
            popularity: Self::field(record, self.popularity),
            length: Self::field(record, self.length),
        }
    }
}

/// One-shot synchronous load: read, normalize, derive option lists.
pub fn load_dataset(path: &Path) -> Result<Dataset, DataError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut raw = Vec::new();
    for result in reader.records() {
        raw.push(columns.row(&result?));
    }

    let total = raw.len();
    let records = normalize(raw);
    let dropped = total - records.len();
    info!(
        path = %path.display(),
        kept = records.len(),
        "dataset loaded"
    );
    if dropped > 0 {
        warn!(dropped, "rows dropped during normalization");
    }
    Ok(Dataset::new(records))
}

/// Spawn the loader worker. The load is the only suspending operation in
/// the app: the UI thread polls the returned channel each frame and draws
/// nothing but a spinner until the result arrives.
pub fn spawn_loader(path: std::path::PathBuf) -> Receiver<Result<Dataset, DataError>> {
    let (tx, rx) = bounded::<Result<Dataset, DataError>>(1);
    thread::Builder::new()
        .name("loader".into())
        .spawn(move || {
            let _ = tx.send(load_dataset(&path));
        })
        .expect("spawn loader");
    rx
}
