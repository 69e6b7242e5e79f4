//! Import counters.

use std::fmt;

/// Why a record was not uploaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    AlreadyImported,
    /// Parliamentary record without a legislative term.
    Ineligible,
    /// The content hash resolved to a crawler manifest (`*.json`).
    ManifestKey,
    /// No archived file for the content hash.
    NotArchived,
    /// The archive could not be read.
    ArchiveError,
    UnsupportedDataset,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SkipReason::AlreadyImported => "already_imported",
            SkipReason::Ineligible => "ineligible",
            SkipReason::ManifestKey => "manifest_key",
            SkipReason::NotArchived => "not_archived",
            SkipReason::ArchiveError => "archive_error",
            SkipReason::UnsupportedDataset => "unsupported_dataset",
        };
        f.write_str(label)
    }
}

/// Final state of one record in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    Imported,
    Skipped(SkipReason),
    UploadFailed,
}

/// Per-dataset or per-run counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub datasets: usize,
    pub datasets_skipped: usize,
    pub seen: usize,
    pub imported: usize,
    pub already_imported: usize,
    pub ineligible: usize,
    pub manifest_keys: usize,
    pub not_archived: usize,
    pub archive_errors: usize,
    pub unsupported: usize,
    pub failed_uploads: usize,
    /// Uploads whose imported flag could not be persisted.
    pub unsaved: usize,
}

impl ImportStats {
    pub fn record(&mut self, outcome: RecordOutcome) {
        self.seen += 1;
        match outcome {
            RecordOutcome::Imported => self.imported += 1,
            RecordOutcome::UploadFailed => self.failed_uploads += 1,
            RecordOutcome::Skipped(reason) => match reason {
                SkipReason::AlreadyImported => self.already_imported += 1,
                SkipReason::Ineligible => self.ineligible += 1,
                SkipReason::ManifestKey => self.manifest_keys += 1,
                SkipReason::NotArchived => self.not_archived += 1,
                SkipReason::ArchiveError => self.archive_errors += 1,
                SkipReason::UnsupportedDataset => self.unsupported += 1,
            },
        }
    }

    pub fn skipped(&self) -> usize {
        self.already_imported
            + self.ineligible
            + self.manifest_keys
            + self.not_archived
            + self.archive_errors
            + self.unsupported
    }

    pub fn merge(&mut self, other: &ImportStats) {
        self.datasets += other.datasets;
        self.datasets_skipped += other.datasets_skipped;
        self.seen += other.seen;
        self.imported += other.imported;
        self.already_imported += other.already_imported;
        self.ineligible += other.ineligible;
        self.manifest_keys += other.manifest_keys;
        self.not_archived += other.not_archived;
        self.archive_errors += other.archive_errors;
        self.unsupported += other.unsupported;
        self.failed_uploads += other.failed_uploads;
        self.unsaved += other.unsaved;
    }

    /// Emit the counters as one structured log line.
    pub fn log(&self, scope: &str) {
        tracing::info!(
            scope,
            datasets = self.datasets,
            datasets_skipped = self.datasets_skipped,
            seen = self.seen,
            imported = self.imported,
            skipped = self.skipped(),
            already_imported = self.already_imported,
            ineligible = self.ineligible,
            manifest_keys = self.manifest_keys,
            not_archived = self.not_archived,
            archive_errors = self.archive_errors,
            unsupported = self.unsupported,
            failed_uploads = self.failed_uploads,
            unsaved = self.unsaved,
            "Import statistics"
        );
    }
}
