use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One stage of a workflow template.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WorkflowStepDefinition {
    /// Unique within its template.
    pub id: String,
    pub icon: String,
    pub title: String,
    pub description: String,
    /// Informational only. Terminality is the step's position.
    #[serde(default)]
    pub is_last: bool,
}

impl WorkflowStepDefinition {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        icon: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            icon: icon.into(),
            title: title.into(),
            description: description.into(),
            is_last: false,
        }
    }
}

/// Ordered pipeline of steps that a project's tasks move through.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WorkflowTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub steps: Vec<WorkflowStepDefinition>,
    /// Only custom templates may be edited or deleted.
    #[serde(default)]
    pub is_custom: bool,
}

impl WorkflowTemplate {
    #[must_use]
    pub fn step(&self, step_id: &str) -> Option<&WorkflowStepDefinition> {
        self.steps.iter().find(|step| step.id == step_id)
    }

    #[must_use]
    pub fn contains_step(&self, step_id: &str) -> bool {
        self.step(step_id).is_some()
    }

    /// Whether `step_id` is the final step by position.
    #[must_use]
    pub fn is_terminal(&self, step_id: &str) -> bool {
        self.steps.last().is_some_and(|step| step.id == step_id)
    }

    /// Re-stamp `is_last` so it matches position after an edit.
    pub fn normalize_last_marker(&mut self) {
        let count = self.steps.len();
        for (index, step) in self.steps.iter_mut().enumerate() {
            step.is_last = index + 1 == count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> WorkflowTemplate {
        WorkflowTemplate {
            id: "t".into(),
            name: "T".into(),
            description: String::new(),
            steps: vec![
                WorkflowStepDefinition::new("intake", "file", "Intake", ""),
                WorkflowStepDefinition::new("assignment", "users", "Assignment", ""),
            ],
            is_custom: true,
        }
    }

    #[test]
    fn terminality_is_positional() {
        let template = template();
        assert!(template.is_terminal("assignment"));
        assert!(!template.is_terminal("intake"));
        assert!(!template.is_terminal("missing"));
    }

    #[test]
    fn normalize_marks_only_last() {
        let mut template = template();
        template.steps[0].is_last = true;
        template.normalize_last_marker();
        assert!(!template.steps[0].is_last);
        assert!(template.steps[1].is_last);
    }
}
