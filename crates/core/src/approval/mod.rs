//! Timesheet approval workflow
//!
//! - [`state_machine`]: pure pending/approved/rejected transitions
//! - [`policy`]: violations evaluated on every read
//! - [`service`]: the command handler writing through the [`ports`]

pub mod policy;
pub mod ports;
pub mod service;
pub mod state_machine;

pub use policy::PolicyEvaluator;
pub use service::ApprovalService;
