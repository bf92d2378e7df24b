//! Task edits on a single project of the tree

use timekeep_common::{RangeValidator, StringValidator, Validator};
use timekeep_domain::{Project, ProjectTask, Result, TimekeepError};
use tracing::debug;

use super::tree::ProjectTree;
use crate::validation::ValidationResultExt;

impl ProjectTree {
    /// Append a task; its id must be new within the project
    pub fn add_task(&mut self, project_id: &str, task: ProjectTask) -> Result<()> {
        validate_task(&task)?;
        let project = self.project_mut(project_id)?;
        if project.task(&task.id).is_some() {
            return Err(TimekeepError::StateConflict(format!(
                "task {} already exists on project {project_id}",
                task.id
            )));
        }
        debug!(project_id, task_id = %task.id, "Task added");
        project.tasks.push(task);
        Ok(())
    }

    /// Replace the task with the same id, keeping its position
    pub fn update_task(&mut self, project_id: &str, task: ProjectTask) -> Result<()> {
        validate_task(&task)?;
        let project = self.project_mut(project_id)?;
        let slot = project
            .tasks
            .iter_mut()
            .find(|existing| existing.id == task.id)
            .ok_or_else(|| task_not_found(project_id, &task.id))?;
        debug!(project_id, task_id = %task.id, "Task updated");
        *slot = task;
        Ok(())
    }

    /// Remove and return a task
    pub fn remove_task(&mut self, project_id: &str, task_id: &str) -> Result<ProjectTask> {
        let project = self.project_mut(project_id)?;
        let index = project
            .tasks
            .iter()
            .position(|task| task.id == task_id)
            .ok_or_else(|| task_not_found(project_id, task_id))?;
        debug!(project_id, task_id, "Task removed");
        Ok(project.tasks.remove(index))
    }

    fn project_mut(&mut self, id: &str) -> Result<&mut Project> {
        self.nodes
            .get_mut(id)
            .map(|node| &mut node.project)
            .ok_or_else(|| TimekeepError::NotFound(format!("project {id}")))
    }
}

fn task_not_found(project_id: &str, task_id: &str) -> TimekeepError {
    TimekeepError::NotFound(format!("task {task_id} on project {project_id}"))
}

fn validate_task(task: &ProjectTask) -> Result<()> {
    let required = StringValidator::new().not_empty();
    let mut validator = Validator::new();
    validator.validate_field("id", &task.id, &required);
    validator.validate_field("name", &task.name, &required);
    validator.validate_field("estimation", &task.estimation, &RangeValidator::empty().min(0.0));
    validator.finish().into_domain()
}
