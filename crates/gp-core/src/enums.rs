//! Status enums and provider selectors for GovPro.
//!
//! All enums serialize with the wire names the browser client used, so exported
//! JSON stays compatible: `snake_case` for most, `TaskStatus` keeps the
//! compact `todo | inprogress | blocked | done` form and `AiProvider` uses
//! `kebab-case`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Status of a task on the Kanban board.
///
/// ```text
/// todo ⇄ inprogress ⇄ done
///   └──── (reason) ───→ blocked ──→ todo | inprogress | done
/// ```
///
/// Any lane may move to any other lane. Entering `blocked` is the only
/// transition that requires extra input (a non-empty reason).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum TaskStatus {
    #[serde(rename = "todo")]
    Todo,
    #[serde(rename = "inprogress")]
    InProgress,
    #[serde(rename = "blocked")]
    Blocked,
    #[serde(rename = "done")]
    Done,
}

impl TaskStatus {
    /// Board lanes in their fixed render order.
    pub const LANES: [Self; 4] = [Self::Todo, Self::InProgress, Self::Blocked, Self::Done];

    /// Whether entering this status needs a block reason.
    #[must_use]
    pub const fn requires_reason(self) -> bool {
        matches!(self, Self::Blocked)
    }

    /// `todo` and `inprogress` count as active work for step summaries.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Todo | Self::InProgress)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inprogress",
            Self::Blocked => "blocked",
            Self::Done => "done",
        }
    }

    /// Human-readable lane title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Blocked => "Blocked",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// StepStatus
// ---------------------------------------------------------------------------

/// Aggregate status of one workflow step, derived from the tasks filed
/// against it. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Upcoming,
    Todo,
    Current,
    Blocked,
    Complete,
}

impl StepStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Todo => "todo",
            Self::Current => "current",
            Self::Blocked => "blocked",
            Self::Complete => "complete",
        }
    }

    /// Whether the connector line below this step renders as filled.
    #[must_use]
    pub const fn fills_connector(self) -> bool {
        matches!(self, Self::Complete | Self::Blocked)
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// BoardScope
// ---------------------------------------------------------------------------

/// Which tasks the Kanban board shows. Display-only; never affects drag rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BoardScope {
    #[default]
    Team,
    Mine,
}

impl BoardScope {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Team => "team",
            Self::Mine => "mine",
        }
    }
}

impl fmt::Display for BoardScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DueUrgency
// ---------------------------------------------------------------------------

/// How close a task is to its due date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DueUrgency {
    Overdue,
    DueSoon,
    #[default]
    Normal,
}

impl DueUrgency {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::DueSoon => "due_soon",
            Self::Normal => "normal",
        }
    }
}

impl fmt::Display for DueUrgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AiProvider
// ---------------------------------------------------------------------------

/// Backend used for document analysis and diagram generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum AiProvider {
    #[default]
    GoogleGemini,
    #[serde(rename = "openai")]
    OpenAi,
    Azure,
    #[serde(rename = "huggingface")]
    HuggingFace,
    Custom,
}

impl AiProvider {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GoogleGemini => "google-gemini",
            Self::OpenAi => "openai",
            Self::Azure => "azure",
            Self::HuggingFace => "huggingface",
            Self::Custom => "custom",
        }
    }

    /// Display label used in result banners.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GoogleGemini => "Google Gemini",
            Self::OpenAi => "OpenAI",
            Self::Azure => "Azure OpenAI",
            Self::HuggingFace => "Hugging Face",
            Self::Custom => "Custom Endpoint",
        }
    }
}

impl fmt::Display for AiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- Serde roundtrip tests ---

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(task_in_progress, TaskStatus, TaskStatus::InProgress, "inprogress");
    test_serde_roundtrip!(task_blocked, TaskStatus, TaskStatus::Blocked, "blocked");
    test_serde_roundtrip!(step_complete, StepStatus, StepStatus::Complete, "complete");
    test_serde_roundtrip!(step_upcoming, StepStatus, StepStatus::Upcoming, "upcoming");
    test_serde_roundtrip!(board_mine, BoardScope, BoardScope::Mine, "mine");
    test_serde_roundtrip!(due_soon, DueUrgency, DueUrgency::DueSoon, "due_soon");
    test_serde_roundtrip!(
        provider_gemini,
        AiProvider,
        AiProvider::GoogleGemini,
        "google-gemini"
    );
    test_serde_roundtrip!(provider_openai, AiProvider, AiProvider::OpenAi, "openai");
    test_serde_roundtrip!(
        provider_huggingface,
        AiProvider,
        AiProvider::HuggingFace,
        "huggingface"
    );

    #[test]
    fn lanes_render_in_fixed_order() {
        let names: Vec<_> = TaskStatus::LANES.iter().map(|s| s.as_str()).collect();
        assert_eq!(names, ["todo", "inprogress", "blocked", "done"]);
    }

    #[test]
    fn only_blocked_requires_reason() {
        assert!(TaskStatus::Blocked.requires_reason());
        assert!(!TaskStatus::Todo.requires_reason());
        assert!(!TaskStatus::InProgress.requires_reason());
        assert!(!TaskStatus::Done.requires_reason());
    }

    #[test]
    fn active_statuses() {
        assert!(TaskStatus::Todo.is_active());
        assert!(TaskStatus::InProgress.is_active());
        assert!(!TaskStatus::Blocked.is_active());
        assert!(!TaskStatus::Done.is_active());
    }

    #[test]
    fn connector_fill() {
        assert!(StepStatus::Complete.fills_connector());
        assert!(StepStatus::Blocked.fills_connector());
        assert!(!StepStatus::Current.fills_connector());
    }

    // --- Display / as_str tests ---

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", TaskStatus::InProgress), "inprogress");
        assert_eq!(format!("{}", StepStatus::Current), "current");
        assert_eq!(format!("{}", BoardScope::Team), "team");
        assert_eq!(format!("{}", DueUrgency::Overdue), "overdue");
        assert_eq!(format!("{}", AiProvider::Custom), "custom");
    }

    #[test]
    fn as_str_parses_back_through_serde() {
        for provider in [
            AiProvider::GoogleGemini,
            AiProvider::OpenAi,
            AiProvider::Azure,
            AiProvider::HuggingFace,
            AiProvider::Custom,
        ] {
            let parsed: AiProvider =
                serde_json::from_str(&format!("\"{}\"", provider.as_str())).unwrap();
            assert_eq!(parsed, provider);
        }
    }
}
