//! Collection resolution: one backend collection per catalog dataset.

use dokukratie_api_client::{with_retries, ApiError, ApiResult, DocumentBackend};
use dokukratie_core::constants::{COLLECTION_PREFIX, DEFAULT_CATEGORY, LANGUAGE_PREFIX};
use dokukratie_core::models::{Collection, CollectionData};
use dokukratie_core::Dataset;

/// Foreign id of a dataset's collection: the language prefix is stripped and
/// the namespace prefix ensured, so `by` and `de_by` both map to
/// `de_dokukratie_by`.
pub fn collection_foreign_id(dataset_name: &str) -> String {
    let name = dataset_name
        .strip_prefix(LANGUAGE_PREFIX)
        .unwrap_or(dataset_name);
    if name.starts_with(COLLECTION_PREFIX) {
        name.to_string()
    } else {
        format!("{}{}", COLLECTION_PREFIX, name)
    }
}

/// Collection metadata derived from the catalog entry. Always carries a
/// category; `frequency` is only set when the dataset or the default has one.
pub fn collection_data(dataset: &Dataset, default_frequency: Option<&str>) -> CollectionData {
    let publisher = dataset.publisher.as_ref();

    let summary = [dataset.description.as_deref(), dataset.summary.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("\n\n")
        .trim()
        .to_string();

    CollectionData {
        label: dataset.label().to_string(),
        summary: (!summary.is_empty()).then_some(summary),
        publisher: publisher.and_then(|p| p.name.clone()),
        publisher_url: publisher.and_then(|p| p.url.clone()),
        countries: publisher.and_then(|p| p.country.clone()).into_iter().collect(),
        data_url: dataset.data.as_ref().and_then(|d| d.url.clone()),
        category: Some(
            dataset
                .category
                .clone()
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        ),
        frequency: dataset
            .frequency
            .clone()
            .or_else(|| default_frequency.map(str::to_string)),
        foreign_id: None,
    }
}

/// Find or create the collection of `dataset` and return its backend id.
///
/// An existing collection is updated without touching its category; a new one
/// is created with category and foreign id.
pub async fn ensure_collection(
    backend: &dyn DocumentBackend,
    dataset: &Dataset,
    default_frequency: Option<&str>,
) -> ApiResult<String> {
    let foreign_id = collection_foreign_id(&dataset.name);
    let mut data = collection_data(dataset, default_frequency);
    let policy = backend.retry_policy();

    let existing = with_retries(&policy, "get_collection", || {
        backend.get_collection_by_foreign_id(&foreign_id)
    })
    .await?;

    match existing.as_ref().and_then(Collection::collection_id) {
        Some(collection_id) => {
            data.category = None;
            with_retries(&policy, "update_collection", || {
                backend.update_collection(collection_id, &data)
            })
            .await?;
            tracing::info!(
                dataset = %dataset.name,
                foreign_id = %foreign_id,
                collection_id,
                "Updated collection"
            );
            Ok(collection_id.to_string())
        }
        None => {
            data.foreign_id = Some(foreign_id.clone());
            let created = with_retries(&policy, "create_collection", || {
                backend.create_collection(&data)
            })
            .await?;
            let collection_id = created.collection_id().ok_or_else(|| {
                ApiError::Decode(format!("created collection {} has no id", foreign_id))
            })?;
            tracing::info!(
                dataset = %dataset.name,
                foreign_id = %foreign_id,
                collection_id,
                "Created collection"
            );
            Ok(collection_id.to_string())
        }
    }
}
