//! Dataset catalogs.
//!
//! A catalog is an ordered, immutable slice of [`DatasetDescriptor`]s. Catalog
//! order is the canonical order used when composing requests, so the same
//! selection always renders the same text regardless of click order.

mod builtin;
mod model;

pub use builtin::{GLOBAL_DATASETS, TAMPA_BAY_DATASETS};
pub use model::{DatasetDescriptor, DomainCategory, GeoPoint};

use std::collections::BTreeSet;

/// Looks up a dataset by id.
pub fn find<'a>(catalog: &'a [DatasetDescriptor], id: &str) -> Option<&'a DatasetDescriptor> {
    catalog.iter().find(|d| d.id == id)
}

/// Returns `true` when `id` names a dataset in `catalog`.
pub fn contains(catalog: &[DatasetDescriptor], id: &str) -> bool {
    find(catalog, id).is_some()
}

/// Resolves a set of ids against a catalog, in catalog order.
///
/// Ids that do not exist in the catalog are dropped.
pub fn resolve<'a, S>(catalog: &'a [DatasetDescriptor], ids: &BTreeSet<S>) -> Vec<&'a DatasetDescriptor>
where
    S: AsRef<str> + Ord,
{
    catalog
        .iter()
        .filter(|d| ids.iter().any(|id| id.as_ref() == d.id))
        .collect()
}

/// Distinct domains of `datasets`, in first-appearance order.
pub fn domains(datasets: &[&DatasetDescriptor]) -> Vec<DomainCategory> {
    let mut seen = Vec::new();
    for dataset in datasets {
        if !seen.contains(&dataset.domain) {
            seen.push(dataset.domain);
        }
    }
    seen
}
