//! Bulk operations over the visible project selection

use serde::{Deserialize, Serialize};
use timekeep_common::{RangeValidator, StringValidator, Validator};
use timekeep_domain::{BulkOutcome, ProjectStatus, ProjectView, Result, TeamMember, TimekeepError};
use tracing::info;

use super::selection::NodeSet;
use super::tree::ProjectTree;
use crate::validation::ValidationResultExt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "kebab-case")]
pub enum BulkOperation {
    ChangeStatus { status: ProjectStatus },
    UpdateBilling { billing_rate: f64, currency: String },
    AddTeamMember { member: TeamMember },
    RemoveTeamMember { member_id: String },
    /// Removes each selected project together with its whole subtree
    Delete,
}

impl BulkOperation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ChangeStatus { .. } => "change-status",
            Self::UpdateBilling { .. } => "update-billing",
            Self::AddTeamMember { .. } => "add-team-member",
            Self::RemoveTeamMember { .. } => "remove-team-member",
            Self::Delete => "delete",
        }
    }

    fn validate(&self) -> Result<()> {
        let required = StringValidator::new().not_empty();
        let non_negative = RangeValidator::empty().min(0.0);
        let mut validator = Validator::new();
        match self {
            Self::UpdateBilling { billing_rate, currency } => {
                validator.validate_field("billing_rate", billing_rate, &non_negative);
                validator.validate_field("currency", currency, &required);
            }
            Self::AddTeamMember { member } => {
                validator.validate_field("member_id", &member.member_id, &required);
            }
            Self::RemoveTeamMember { member_id } => {
                validator.validate_field("member_id", member_id, &required);
            }
            Self::ChangeStatus { .. } | Self::Delete => {}
        }
        validator.finish().into_domain()
    }
}

impl ProjectTree {
    /// Apply `operation` to every selected project visible in `visible`
    ///
    /// Selected ids missing from the view are reported as failures and left
    /// untouched. Items are processed in view order, so a deleted parent
    /// takes its selected descendants with it and they count as succeeded.
    pub fn apply_bulk(
        &mut self,
        operation: &BulkOperation,
        selection: &NodeSet,
        visible: &[ProjectView],
    ) -> Result<BulkOutcome> {
        operation.validate()?;

        let mut outcome = BulkOutcome::default();
        for id in selection.visible_in(visible) {
            match self.apply_one(operation, &id) {
                Ok(()) => outcome.record_success(id),
                Err(err) => outcome.record_failure(id, err),
            }
        }
        for id in selection.hidden_in(visible) {
            let err = TimekeepError::StateConflict(format!("project {id} is not visible"));
            outcome.record_failure(id, err);
        }

        info!(
            operation = operation.name(),
            succeeded = outcome.succeeded.len(),
            failed = outcome.failed.len(),
            "Bulk project operation finished"
        );
        Ok(outcome)
    }

    fn apply_one(&mut self, operation: &BulkOperation, id: &str) -> Result<()> {
        if matches!(operation, BulkOperation::Delete) {
            if self.contains(id) {
                self.remove_subtree(id);
            }
            return Ok(());
        }

        let node = self
            .nodes
            .get_mut(id)
            .ok_or_else(|| TimekeepError::NotFound(format!("project {id}")))?;
        let project = &mut node.project;

        match operation {
            BulkOperation::ChangeStatus { status } => project.status = *status,
            BulkOperation::UpdateBilling { billing_rate, currency } => {
                project.billing_rate = *billing_rate;
                project.currency.clone_from(currency);
            }
            BulkOperation::AddTeamMember { member } => {
                if project.team_members.iter().any(|m| m.member_id == member.member_id) {
                    return Err(TimekeepError::StateConflict(format!(
                        "{} is already on project {id}",
                        member.member_id
                    )));
                }
                project.team_members.push(member.clone());
            }
            BulkOperation::RemoveTeamMember { member_id } => {
                let before = project.team_members.len();
                project.team_members.retain(|m| m.member_id != *member_id);
                if project.team_members.len() == before {
                    return Err(TimekeepError::NotFound(format!(
                        "{member_id} is not on project {id}"
                    )));
                }
            }
            BulkOperation::Delete => {}
        }
        Ok(())
    }

    fn remove_subtree(&mut self, id: &str) {
        let parent = self.nodes.get(id).and_then(|node| node.parent.clone());
        match parent {
            Some(parent_id) => {
                if let Some(parent_node) = self.nodes.get_mut(&parent_id) {
                    parent_node.children.retain(|child| child != id);
                }
            }
            None => self.roots.retain(|root| root != id),
        }
        for removed in self.subtree_ids(id) {
            self.nodes.remove(&removed);
        }
    }
}
