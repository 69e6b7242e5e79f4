//! Dataset families: how the documents of a dataset are named and filed.

use dokukratie_core::{MetadataRecord, UploadPayload};

use crate::mapping::classify_document_type;

/// State parliaments crawled by dokukratie, by their dataset code.
pub const STATES: [&str; 16] = [
    "bb", "be", "bw", "by", "hb", "he", "hh", "mv", "ni", "nw", "rp", "sh", "sl", "sn", "st", "th",
];

/// Folder label between the legislative term and the document type.
const DRUCKSACHE: &str = "Drucksache";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFamily {
    /// Documents filed in one folder per publisher. Names carry the document
    /// reference; with `prefix_publisher` the file name also carries the
    /// publisher.
    PublisherFolders { prefix_publisher: bool },
    /// Parliamentary papers filed as `<term>. Wahlperiode/Drucksache/<type>`.
    LegislativeTerm,
}

const PUBLISHER_DATASETS: [(&str, DatasetFamily); 2] = [
    (
        "sehrgutachten",
        DatasetFamily::PublisherFolders {
            prefix_publisher: false,
        },
    ),
    (
        "de_vsberichte",
        DatasetFamily::PublisherFolders {
            prefix_publisher: true,
        },
    ),
];

/// Family of a dataset, or `None` if its documents cannot be imported.
pub fn family_for(dataset: &str) -> Option<DatasetFamily> {
    if let Some((_, family)) = PUBLISHER_DATASETS.iter().find(|(name, _)| *name == dataset) {
        return Some(*family);
    }
    STATES
        .iter()
        .any(|state| *state == dataset)
        .then_some(DatasetFamily::LegislativeTerm)
}

impl DatasetFamily {
    pub fn ensure_reference_in_name(&self) -> bool {
        matches!(self, DatasetFamily::PublisherFolders { .. })
    }

    /// Folder names from the collection root down to the document's parent.
    /// `None` when the record lacks what the layout needs.
    pub fn folder_path(
        &self,
        record: &MetadataRecord,
        payload: &UploadPayload,
    ) -> Option<Vec<String>> {
        match self {
            DatasetFamily::PublisherFolders { .. } => {
                payload.publisher.as_ref().map(|p| vec![p.clone()])
            }
            DatasetFamily::LegislativeTerm => {
                let term = record.get_text("legislative_term")?;
                Some(vec![
                    format!("{}. Wahlperiode", term),
                    DRUCKSACHE.to_string(),
                    classify_document_type(record).to_string(),
                ])
            }
        }
    }

    /// Family-specific file name rule, applied after the payload is built.
    pub fn apply_file_name_rule(&self, payload: &mut UploadPayload) {
        let DatasetFamily::PublisherFolders {
            prefix_publisher: true,
        } = self
        else {
            return;
        };
        let (Some(publisher), Some(file_name)) =
            (payload.publisher.as_deref(), payload.file_name.as_deref())
        else {
            return;
        };
        if !file_name.contains(publisher) {
            payload.file_name = Some(format!("{} - {}", publisher, file_name));
        }
    }
}
