use serde::Serialize;

use crate::core::dataset::{NO_DESCRIPTION, severity_label};
use crate::core::selection::Selection;
use crate::data::store::DataStore;

/// Rendered content of the region detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionDetail {
    pub name: String,
    pub severity: String,
    pub description: String,
}

impl RegionDetail {
    /// The panel's markup block.
    #[must_use]
    pub fn to_html(&self) -> String {
        format!(
            concat!(
                "<div class=\"region-item\">",
                "<div class=\"tags\">",
                "<span class=\"tag region-name\">{name}</span>",
                "<span class=\"tag sensitivity-level\">{severity}</span>",
                "</div>",
                "<div class=\"basic-info\">",
                "<p class=\"region-description\">{description}</p>",
                "</div>",
                "</div>"
            ),
            name = self.name,
            severity = self.severity,
            description = self.description,
        )
    }
}

/// Projects the selection into panel content.
///
/// Returns `None` when no region is selected or the region is unknown to
/// both the description directory and the datasets. The severity label is
/// derived from the description text, most severe keyword first; a region
/// without a description entry falls back to the no-description text.
#[must_use]
pub fn render_detail(selection: &Selection, store: &DataStore) -> Option<RegionDetail> {
    let name = selection.region.as_deref()?;

    let description = store
        .directory()
        .and_then(|directory| directory.get(name))
        .map(|region| region.description.as_str());

    if description.is_none() && !store.has_region(name) {
        return None;
    }

    Some(RegionDetail {
        name: name.to_owned(),
        severity: severity_label(description.unwrap_or_default()).to_owned(),
        description: description.unwrap_or(NO_DESCRIPTION).to_owned(),
    })
}
