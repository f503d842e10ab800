//! # gp-workflow
//!
//! In-memory workflow state machine for GovPro proposal projects.
//!
//! A [`Portfolio`] owns every project and exactly one of them is active.
//! Each [`Project`] carries its team, its [`TaskStore`] and the id of the
//! workflow template it follows. Step statuses are never stored; they are
//! re-derived from the tasks on every read (see [`derive`]).
//!
//! All mutation is synchronous and single-writer. Failed operations return a
//! [`WorkflowError`] and leave state untouched.

pub mod block;
pub mod board;
pub mod derive;
pub mod due;
pub mod error;
pub mod ids;
pub mod notify;
pub mod portfolio;
pub mod project;
pub mod roles;
pub mod seed;
pub mod store;
pub mod templates;
pub mod updates;

pub use block::{BlockFlow, BlockState};
pub use board::{BoardController, DropOutcome};
pub use derive::{StepStatusMap, derive_statuses, step_status};
pub use due::DueClock;
pub use error::WorkflowError;
pub use ids::IdSequence;
pub use notify::{Notifier, RecordingNotifier, TracingNotifier};
pub use portfolio::{MemberProfile, Portfolio};
pub use project::{Project, ProjectWorkspace};
pub use roles::RoleRegistry;
pub use store::TaskStore;
pub use templates::{StepEdit, TemplateRegistry};
pub use updates::task::{TaskUpdate, TaskUpdateBuilder};
