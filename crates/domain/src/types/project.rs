//! Projects, their tasks and team, and the render-ready tree view

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Active,
    Planning,
    OnHold,
    Completed,
    Cancelled,
}

impl_domain_status_conversions!(ProjectStatus {
    Active => "active",
    Planning => "planning",
    OnHold => "on-hold",
    Completed => "completed",
    Cancelled => "cancelled",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl_domain_status_conversions!(TaskStatus {
    Pending => "pending",
    InProgress => "in-progress",
    Completed => "completed",
});

/// Member of a project team, unique by `member_id` within one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub member_id: String,
    pub name: String,
    pub role: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectTask {
    pub id: String,
    pub name: String,
    pub estimation: f64,
    pub category: String,
    pub status: TaskStatus,
}

/// A billable project, exclusively owning its tasks, team and sub-projects
///
/// `children` forms a strict tree and ids are unique across the whole tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub client: String,
    pub status: ProjectStatus,
    pub billing_rate: f64,
    pub currency: String,
    pub budget_hours: f64,
    pub total_hours: f64,
    #[serde(default)]
    pub team_members: Vec<TeamMember>,
    #[serde(default)]
    pub tasks: Vec<ProjectTask>,
    pub created_at: Option<NaiveDate>,
    #[serde(default)]
    pub children: Vec<Project>,
}

impl Project {
    /// Estimated hours over every task
    pub fn total_estimation(&self) -> f64 {
        self.tasks.iter().map(|task| task.estimation).sum()
    }

    /// Estimated hours of completed tasks only
    pub fn completed_estimation(&self) -> f64 {
        self.tasks
            .iter()
            .filter(|task| task.status == TaskStatus::Completed)
            .map(|task| task.estimation)
            .sum()
    }

    pub fn task(&self, task_id: &str) -> Option<&ProjectTask> {
        self.tasks.iter().find(|task| task.id == task_id)
    }
}

/// Flat input form: a project plus the id of its parent, if any
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub parent_id: Option<String>,
    #[serde(flatten)]
    pub project: Project,
}

/// Render-ready node of a filtered project tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectView {
    pub id: String,
    pub name: String,
    pub client: String,
    pub description: String,
    pub status: ProjectStatus,
    pub total_hours: f64,
    pub budget_hours: f64,
    /// Own hours plus every descendant's, filtered or not
    pub rolled_up_hours: f64,
    pub progress_percentage: f64,
    pub depth: usize,
    pub children: Vec<ProjectView>,
}

impl ProjectView {
    /// Ids of this node and every visible descendant, depth-first
    pub fn ids(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(view) = stack.pop() {
            out.push(view.id.clone());
            stack.extend(view.children.iter().rev());
        }
        out
    }
}
