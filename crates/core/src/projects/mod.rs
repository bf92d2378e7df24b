//! Project hierarchy: arena tree, filtered views, selection, bulk and task edits

mod bulk;
mod selection;
mod tasks;
mod tree;

pub use bulk::BulkOperation;
pub use selection::NodeSet;
pub use tree::ProjectTree;
use timekeep_domain::{Project, ProjectView, Result};

/// Share of the budget consumed, capped at 100 and 0 for an empty budget
pub fn progress_percentage(total_hours: f64, budget_hours: f64) -> f64 {
    if budget_hours <= 0.0 {
        return 0.0;
    }
    (total_hours * 100.0 / budget_hours).clamp(0.0, 100.0)
}

/// Validate nested projects and return the view filtered by `search`
pub fn build_project_tree(projects: &[Project], search: &str) -> Result<Vec<ProjectView>> {
    Ok(ProjectTree::from_nested(projects.to_vec())?.view(search))
}
