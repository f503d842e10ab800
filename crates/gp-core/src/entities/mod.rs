//! Entity structs for all GovPro domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! export and schema validation. State lives in memory only; these types are
//! the shape it is exported in.

mod analysis;
mod member;
mod role;
mod task;
mod template;

pub use analysis::AnalysisResult;
pub use member::TeamMember;
pub use role::RoleDefinition;
pub use task::{NewTask, Task};
pub use template::{WorkflowStepDefinition, WorkflowTemplate};

/// Identifier of a task. Unique across every project of a portfolio.
pub type TaskId = u64;

/// Identifier of a team member.
pub type MemberId = u64;

/// Identifier of a project.
pub type ProjectId = u64;
