//! Expand/collapse and checkbox state keyed by project id

use std::collections::BTreeSet;

use timekeep_domain::ProjectView;

/// Set of project ids, independent of the tree it refers to
///
/// Expand state and selection state are two separate sets. Ids that no
/// longer exist in the tree are harmless; bulk operations resolve the
/// selection against the visible nodes first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeSet {
    ids: BTreeSet<String>,
}

impl NodeSet {
    /// Empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is expanded or selected, depending on the set
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Add `id`; returns whether it was newly inserted
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.ids.insert(id.into())
    }

    /// Drop `id`; returns whether it was present
    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    /// Flip membership; returns whether the id is now present
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    /// Add every root id (the tree's "expand all" control)
    pub fn expand_all<I, S>(&mut self, root_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids.extend(root_ids.into_iter().map(Into::into));
    }

    /// Collapse everything or deselect everything
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Number of member ids, including ids no longer in the tree
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when nothing is expanded or selected
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Members in id order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Members that appear somewhere in `view`, in view order
    pub fn visible_in(&self, view: &[ProjectView]) -> Vec<String> {
        view.iter().flat_map(ProjectView::ids).filter(|id| self.contains(id)).collect()
    }

    /// Members missing from `view`
    pub fn hidden_in(&self, view: &[ProjectView]) -> Vec<String> {
        let visible: BTreeSet<String> = view.iter().flat_map(ProjectView::ids).collect();
        self.ids.iter().filter(|id| !visible.contains(*id)).cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for NodeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { ids: iter.into_iter().map(Into::into).collect() }
    }
}
