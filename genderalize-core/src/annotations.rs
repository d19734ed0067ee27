//! Sentence-scoped gender annotations

use crate::gender::{label_of, Gender};

/// Gender annotation per token index
///
/// Owned by the call that produced it. An unmatched token is `None`, which
/// renders as the empty label `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenderAnnotations {
    genders: Vec<Option<Gender>>,
}

impl GenderAnnotations {
    /// `len` unset annotations
    pub fn unset(len: usize) -> Self {
        Self {
            genders: vec![None; len],
        }
    }

    /// Annotations from an explicit per-token list
    pub fn from_genders(genders: Vec<Option<Gender>>) -> Self {
        Self { genders }
    }

    /// Set a token's gender if it is still unset
    pub(crate) fn stamp(&mut self, index: usize, gender: Gender) {
        if let Some(slot) = self.genders.get_mut(index) {
            if slot.is_none() {
                *slot = Some(gender);
            }
        }
    }

    /// Gender of the token at `index`
    pub fn gender(&self, index: usize) -> Option<Gender> {
        self.genders.get(index).copied().flatten()
    }

    /// Label of the token at `index`, `""` when unset
    pub fn label(&self, index: usize) -> &'static str {
        label_of(self.gender(index))
    }

    /// Labels of all tokens in order
    pub fn labels(&self) -> Vec<&'static str> {
        self.genders.iter().map(|g| label_of(*g)).collect()
    }

    /// Whether the token at `index` is masculine or feminine
    pub fn is_gendered(&self, index: usize) -> bool {
        self.gender(index).is_some_and(Gender::is_gendered)
    }

    /// Annotations in token order
    pub fn iter(&self) -> impl Iterator<Item = Option<Gender>> + '_ {
        self.genders.iter().copied()
    }

    /// Number of annotated tokens
    pub fn len(&self) -> usize {
        self.genders.len()
    }

    /// Whether there are no tokens
    pub fn is_empty(&self) -> bool {
        self.genders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_by_default() {
        let annotations = GenderAnnotations::unset(3);
        assert_eq!(annotations.labels(), vec!["", "", ""]);
        assert_eq!(annotations.gender(5), None);
        assert_eq!(annotations.label(5), "");
    }

    #[test]
    fn test_stamp_only_once() {
        let mut annotations = GenderAnnotations::unset(2);
        annotations.stamp(0, Gender::Feminine);
        annotations.stamp(0, Gender::Masculine);
        annotations.stamp(7, Gender::Masculine);
        assert_eq!(annotations.gender(0), Some(Gender::Feminine));
        assert_eq!(annotations.gender(1), None);
    }

    #[test]
    fn test_neuter_is_not_gendered() {
        let annotations =
            GenderAnnotations::from_genders(vec![Some(Gender::Neuter), Some(Gender::Masculine)]);
        assert!(!annotations.is_gendered(0));
        assert!(annotations.is_gendered(1));
    }
}
