//! Filesystem report store.
//!
//! Artifacts are named `{subject}_{context}_{YYYY-MM-DD}.md` and
//! `{subject}_{context}_{YYYY-MM-DD}_data.json`. An existing file is never
//! overwritten: `-1`, `-2`, ... is appended before the extension instead.

use chrono::{Local, NaiveDate};
use research_application::{ReportStore, ReportStoreError};
use research_domain::util::file_safe;
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Upper bound on collision suffixes tried for one name
const MAX_SUFFIX: u32 = 10_000;

/// Writes research artifacts under a single output directory.
pub struct FileReportStore {
    dir: PathBuf,
    /// Fixed date for artifact names; today's local date when unset
    date: Option<NaiveDate>,
}

impl FileReportStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            date: None,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn stem(&self, subject: &str, context: &str) -> String {
        let date = self.date.unwrap_or_else(|| Local::now().date_naive());
        format!(
            "{}_{}_{}",
            file_safe(subject),
            file_safe(context),
            date.format("%Y-%m-%d")
        )
    }

    /// Create `{stem}{suffix}.{extension}` without clobbering an existing file.
    fn create_unique(&self, stem: &str, extension: &str) -> Result<(PathBuf, File), ReportStoreError> {
        std::fs::create_dir_all(&self.dir)?;

        for n in 0..MAX_SUFFIX {
            let name = if n == 0 {
                format!("{}.{}", stem, extension)
            } else {
                format!("{}-{}.{}", stem, n, extension)
            };
            let path = self.dir.join(name);
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((path, file)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Err(std::io::Error::new(
            ErrorKind::AlreadyExists,
            format!("no free file name for {} in {}", stem, self.dir.display()),
        )
        .into())
    }

    fn write(&self, stem: &str, extension: &str, bytes: &[u8]) -> Result<PathBuf, ReportStoreError> {
        let (path, file) = self.create_unique(stem, extension)?;
        write_or_discard(&path, file, bytes)?;
        debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(path)
    }
}

/// Write `bytes` to a freshly created file; remove it again if the write fails
/// so a partial artifact never occupies the name.
fn write_or_discard(path: &Path, mut sink: impl Write, bytes: &[u8]) -> std::io::Result<()> {
    let result = sink.write_all(bytes).and_then(|()| sink.flush());
    if let Err(e) = &result {
        warn!("Write to {} failed: {}", path.display(), e);
        drop(sink);
        if let Err(remove_err) = std::fs::remove_file(path) {
            warn!("Could not remove partial file {}: {}", path.display(), remove_err);
        }
    }
    result
}

impl ReportStore for FileReportStore {
    fn save_report(
        &self,
        subject: &str,
        context: &str,
        content: &str,
    ) -> Result<PathBuf, ReportStoreError> {
        self.write(&self.stem(subject, context), "md", content.as_bytes())
    }

    fn save_data(
        &self,
        subject: &str,
        context: &str,
        data: &serde_json::Value,
    ) -> Result<PathBuf, ReportStoreError> {
        let bytes = serde_json::to_vec_pretty(data)?;
        let stem = format!("{}_data", self.stem(subject, context));
        self.write(&stem, "json", &bytes)
    }
}
