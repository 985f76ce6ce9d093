use std::collections::BTreeSet;

/// Which catalog a selection or listing refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FactorKind {
    Risk,
    Prevention,
}

/// The ids a user has ticked in one session.
///
/// Owned by the presentation layer; the scoring functions only ever see a
/// shared reference. Sets are ordered so every fold over them visits ids in
/// the same sequence no matter how they were toggled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub risks: BTreeSet<String>,
    pub preventions: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from id lists, e.g. command-line arguments.
    /// Duplicates collapse; ids are not checked against any catalog.
    pub fn from_ids<R, P>(risks: R, preventions: P) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            risks: risks.into_iter().map(Into::into).collect(),
            preventions: preventions.into_iter().map(Into::into).collect(),
        }
    }

    fn set_mut(&mut self, kind: FactorKind) -> &mut BTreeSet<String> {
        match kind {
            FactorKind::Risk => &mut self.risks,
            FactorKind::Prevention => &mut self.preventions,
        }
    }

    pub fn ids(&self, kind: FactorKind) -> &BTreeSet<String> {
        match kind {
            FactorKind::Risk => &self.risks,
            FactorKind::Prevention => &self.preventions,
        }
    }

    /// Add the id if absent, remove it if present. Returns whether the id is
    /// selected afterwards.
    pub fn toggle(&mut self, kind: FactorKind, id: &str) -> bool {
        let set = self.set_mut(kind);
        if set.remove(id) {
            false
        } else {
            set.insert(id.to_string());
            true
        }
    }

    pub fn is_selected(&self, kind: FactorKind, id: &str) -> bool {
        self.ids(kind).contains(id)
    }

    pub fn clear(&mut self, kind: FactorKind) {
        self.set_mut(kind).clear();
    }

    pub fn clear_all(&mut self) {
        self.risks.clear();
        self.preventions.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.risks.is_empty() && self.preventions.is_empty()
    }
}
