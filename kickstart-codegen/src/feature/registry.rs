//! Read-only catalogue of features.

use indexmap::IndexMap;

use super::{Feature, FeatureGroup};
use crate::{Error, Result};

/// Mapping from feature id to definition, in declaration order.
///
/// Declaration order is the tie-break key of the resolver, so registries
/// declare foundational features first.
pub struct FeatureRegistry<C> {
    pub(super) features: IndexMap<&'static str, Feature<C>>,
    duplicates: Vec<&'static str>,
}

impl<C> FeatureRegistry<C> {
    /// Build a registry. Duplicate ids keep their first declaration and are
    /// reported by [`FeatureRegistry::validate`].
    pub fn new(features: impl IntoIterator<Item = Feature<C>>) -> Self {
        let mut map = IndexMap::new();
        let mut duplicates = Vec::new();
        for feature in features {
            if map.contains_key(feature.id) {
                duplicates.push(feature.id);
            } else {
                map.insert(feature.id, feature);
            }
        }
        Self {
            features: map,
            duplicates,
        }
    }

    /// Check the declarations: ids are unique and every prerequisite exists.
    pub fn validate(&self) -> Result<()> {
        if let Some(id) = self.duplicates.first() {
            return Err(Error::DuplicateFeature { id: id.to_string() });
        }
        for feature in self.features.values() {
            for prerequisite in feature.prerequisites {
                if !self.features.contains_key(prerequisite) {
                    return Err(Error::UnknownPrerequisite {
                        feature: feature.id.to_string(),
                        prerequisite: prerequisite.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Feature<C>> {
        self.features.get(id)
    }

    /// Iterate over all features in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Feature<C>> {
        self.features.values()
    }

    /// Features offered for selection.
    pub fn public(&self) -> impl Iterator<Item = &Feature<C>> {
        self.iter().filter(|feature| !feature.is_internal())
    }

    /// Features of one group.
    pub fn group(&self, group: FeatureGroup) -> impl Iterator<Item = &Feature<C>> {
        self.iter().filter(move |feature| feature.group == group)
    }

    pub(super) fn index_of(&self, id: &str) -> Result<usize> {
        self.features
            .get_index_of(id)
            .ok_or_else(|| Error::UnknownFeature {
                id: id.to_string(),
                available: self.public().map(|f| f.id.to_string()).collect(),
            })
    }
}
