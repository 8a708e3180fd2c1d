use std::collections::BTreeSet;

use serde::Serialize;

use super::domain::{Facet, FacetOption, FacetOptions};

/// Checked option identifiers per facet. Owned by a single page instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetSelection {
    types: BTreeSet<String>,
    categories: BTreeSet<String>,
}

/// One checkbox as presented in the filter column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetChoice {
    pub id: String,
    pub label: String,
    pub checked: bool,
}

impl FacetSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-check the given options, e.g. from query parameters.
    pub fn with_selected<I, S>(mut self, facet: Facet, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_mut(facet).extend(ids.into_iter().map(Into::into));
        self
    }

    /// Flip membership of `id`; returns whether it is now selected.
    pub fn toggle(&mut self, facet: Facet, id: &str) -> bool {
        let set = self.set_mut(facet);
        if set.remove(id) {
            false
        } else {
            set.insert(id.to_string());
            true
        }
    }

    pub fn reset(&mut self) {
        self.types.clear();
        self.categories.clear();
    }

    pub fn is_selected(&self, facet: Facet, id: &str) -> bool {
        self.selected(facet).contains(id)
    }

    pub fn selected(&self, facet: Facet) -> &BTreeSet<String> {
        match facet {
            Facet::JobType => &self.types,
            Facet::Category => &self.categories,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.categories.is_empty()
    }

    /// Configured options for `facet`, each paired with its checked flag.
    pub fn choices(&self, facet: Facet, options: &FacetOptions) -> Vec<FacetChoice> {
        options
            .for_facet(facet)
            .iter()
            .map(|FacetOption { id, label }| FacetChoice {
                id: id.clone(),
                label: label.clone(),
                checked: self.is_selected(facet, id),
            })
            .collect()
    }

    fn set_mut(&mut self, facet: Facet) -> &mut BTreeSet<String> {
        match facet {
            Facet::JobType => &mut self.types,
            Facet::Category => &mut self.categories,
        }
    }
}
