//! Arena-backed project tree
//!
//! Nodes live in a map keyed by project id; parent and child links are ids,
//! so expand/select sets keyed by the same ids stay valid across rebuilds and
//! re-filtering.

use std::collections::{HashMap, HashSet};

use timekeep_domain::{Project, ProjectRecord, ProjectView, Result, TimekeepError};

use super::progress_percentage;

#[derive(Debug, Clone)]
pub(crate) struct Node {
    /// Project data with `children` always empty; structure lives in the links
    pub(crate) project: Project,
    pub(crate) parent: Option<String>,
    pub(crate) children: Vec<String>,
}

/// Strict tree of projects with unique ids
#[derive(Debug, Clone, Default)]
pub struct ProjectTree {
    pub(crate) nodes: HashMap<String, Node>,
    pub(crate) roots: Vec<String>,
}

impl ProjectTree {
    /// Build from owned nested projects
    pub fn from_nested(projects: Vec<Project>) -> Result<Self> {
        let mut tree = Self::default();
        for project in projects {
            tree.insert_subtree(project, None)?;
        }
        Ok(tree)
    }

    /// Build from flat records linked by `parent_id`
    ///
    /// Rejects duplicate ids, unknown parents and parent cycles. Siblings keep
    /// their input order.
    pub fn from_flat(records: Vec<ProjectRecord>) -> Result<Self> {
        let mut tree = Self::default();
        let mut links = Vec::with_capacity(records.len());

        for ProjectRecord { parent_id, project } in records {
            let id = project.id.clone();
            tree.insert_subtree(project, None)?;
            tree.roots.retain(|root| *root != id);
            links.push((id, parent_id));
        }

        for (id, parent_id) in links {
            match parent_id {
                None => tree.roots.push(id),
                Some(parent) => {
                    let parent_node = tree.nodes.get_mut(&parent).ok_or_else(|| {
                        TimekeepError::validation(
                            "parent_id",
                            format!("project {id} has unknown parent {parent}"),
                        )
                    })?;
                    parent_node.children.push(id.clone());
                    if let Some(node) = tree.nodes.get_mut(&id) {
                        node.parent = Some(parent);
                    }
                }
            }
        }

        tree.reject_cycles()?;
        Ok(tree)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Project data of one node, without its children
    pub fn get(&self, id: &str) -> Option<&Project> {
        self.nodes.get(id).map(|node| &node.project)
    }

    pub fn parent_of(&self, id: &str) -> Option<&str> {
        self.nodes.get(id).and_then(|node| node.parent.as_deref())
    }

    pub fn root_ids(&self) -> &[String] {
        &self.roots
    }

    pub fn children_of(&self, id: &str) -> &[String] {
        self.nodes.get(id).map(|node| node.children.as_slice()).unwrap_or_default()
    }

    /// The node and all of its descendants, depth-first
    pub fn subtree_ids(&self, id: &str) -> Vec<String> {
        let mut out = Vec::new();
        let mut stack = vec![id.to_string()];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.get(&current) {
                stack.extend(node.children.iter().rev().cloned());
                out.push(current);
            }
        }
        out
    }

    /// Own hours plus every descendant's
    pub fn rolled_up_hours(&self, id: &str) -> Result<f64> {
        if !self.contains(id) {
            return Err(TimekeepError::NotFound(format!("project {id}")));
        }
        Ok(self.subtree_ids(id).iter().filter_map(|sid| self.get(sid)).map(|p| p.total_hours).sum())
    }

    /// Filtered render view
    ///
    /// Children are filtered first; a node survives when its name, client or
    /// description contains `search` (case-insensitive) or any child
    /// survived. An empty search keeps every node.
    pub fn view(&self, search: &str) -> Vec<ProjectView> {
        let needle = search.trim().to_lowercase();
        let rolled = self.rolled_up_by_id();
        let mut built: HashMap<&str, ProjectView> = HashMap::new();

        for (id, depth) in self.postorder() {
            let Some(node) = self.nodes.get(id) else { continue };
            let children: Vec<ProjectView> =
                node.children.iter().filter_map(|child| built.remove(child.as_str())).collect();

            let project = &node.project;
            if children.is_empty() && !needle.is_empty() && !matches_search(project, &needle) {
                continue;
            }
            built.insert(
                id,
                ProjectView {
                    id: project.id.clone(),
                    name: project.name.clone(),
                    client: project.client.clone(),
                    description: project.description.clone(),
                    status: project.status,
                    total_hours: project.total_hours,
                    budget_hours: project.budget_hours,
                    rolled_up_hours: rolled.get(id).copied().unwrap_or(project.total_hours),
                    progress_percentage: progress_percentage(
                        project.total_hours,
                        project.budget_hours,
                    ),
                    depth,
                    children,
                },
            );
        }

        self.roots.iter().filter_map(|id| built.remove(id.as_str())).collect()
    }

    /// Rebuild owned nested projects
    pub fn to_nested(&self) -> Vec<Project> {
        let mut built: HashMap<&str, Project> = HashMap::new();
        for (id, _) in self.postorder() {
            let Some(node) = self.nodes.get(id) else { continue };
            let mut project = node.project.clone();
            project.children =
                node.children.iter().filter_map(|child| built.remove(child.as_str())).collect();
            built.insert(id, project);
        }
        self.roots.iter().filter_map(|id| built.remove(id.as_str())).collect()
    }

    /// Every reachable node with its depth, children before their parent
    fn postorder(&self) -> Vec<(&str, usize)> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<(&str, usize, bool)> =
            self.roots.iter().rev().map(|id| (id.as_str(), 0, false)).collect();

        while let Some((id, depth, expanded)) = stack.pop() {
            if expanded {
                out.push((id, depth));
                continue;
            }
            let Some(node) = self.nodes.get(id) else { continue };
            stack.push((id, depth, true));
            let below = node.children.iter().rev().map(|child| (child.as_str(), depth + 1, false));
            stack.extend(below);
        }
        out
    }

    /// Rolled-up hours of every node, computed bottom-up in one pass
    fn rolled_up_by_id(&self) -> HashMap<&str, f64> {
        let mut rolled: HashMap<&str, f64> = HashMap::with_capacity(self.nodes.len());
        for (id, _) in self.postorder() {
            let Some(node) = self.nodes.get(id) else { continue };
            let below: f64 =
                node.children.iter().filter_map(|child| rolled.get(child.as_str()).copied()).sum();
            rolled.insert(id, node.project.total_hours + below);
        }
        rolled
    }

    fn insert_subtree(&mut self, project: Project, parent: Option<String>) -> Result<()> {
        let mut pending = vec![(project, parent)];

        while let Some((mut project, parent)) = pending.pop() {
            let id = project.id.clone();
            if self.nodes.contains_key(&id) {
                return Err(TimekeepError::validation("id", format!("duplicate project id {id}")));
            }
            let children = std::mem::take(&mut project.children);

            match &parent {
                Some(parent_id) => {
                    if let Some(parent_node) = self.nodes.get_mut(parent_id) {
                        parent_node.children.push(id.clone());
                    }
                }
                None => self.roots.push(id.clone()),
            }
            self.nodes.insert(id.clone(), Node { project, parent, children: Vec::new() });

            // reversed so the first child is linked first
            pending.extend(children.into_iter().rev().map(|child| (child, Some(id.clone()))));
        }
        Ok(())
    }

    fn reject_cycles(&self) -> Result<()> {
        let reachable: HashSet<String> =
            self.roots.iter().flat_map(|root| self.subtree_ids(root)).collect();
        if reachable.len() == self.nodes.len() {
            return Ok(());
        }
        let mut cyclic: Vec<&str> =
            self.nodes.keys().filter(|id| !reachable.contains(*id)).map(String::as_str).collect();
        cyclic.sort_unstable();
        Err(TimekeepError::validation(
            "parent_id",
            format!("projects form a parent cycle: {}", cyclic.join(", ")),
        ))
    }
}

fn matches_search(project: &Project, needle: &str) -> bool {
    [&project.name, &project.client, &project.description]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
