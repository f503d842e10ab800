//! Workflow template registry.
//!
//! Built-in templates are read-only. Custom templates can be renamed,
//! re-described and have their steps added, edited or removed.

use gp_core::entities::{WorkflowStepDefinition, WorkflowTemplate};

use crate::error::WorkflowError;

const CUSTOM_PREFIX: &str = "custom-";
const STEP_PREFIX: &str = "step-";

/// Field edits for one step of a custom template.
#[derive(Debug, Clone, Default)]
pub struct StepEdit {
    pub icon: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: Vec<WorkflowTemplate>,
    next_custom: u64,
}

impl TemplateRegistry {
    /// Registry over the given templates. Ids must be unique.
    pub fn new(templates: Vec<WorkflowTemplate>) -> Result<Self, WorkflowError> {
        let mut registry = Self {
            templates: Vec::with_capacity(templates.len()),
            next_custom: 1,
        };
        for template in templates {
            registry.insert(template)?;
        }
        Ok(registry)
    }

    /// Add a fully formed template, e.g. one loaded from a file.
    pub fn insert(&mut self, mut template: WorkflowTemplate) -> Result<(), WorkflowError> {
        if self.get(&template.id).is_some() {
            return Err(WorkflowError::DuplicateTemplate(template.id));
        }
        ensure_unique_steps(&template)?;
        template.normalize_last_marker();
        if let Some(n) = template
            .id
            .strip_prefix(CUSTOM_PREFIX)
            .and_then(|n| n.parse::<u64>().ok())
        {
            self.next_custom = self.next_custom.max(n + 1);
        }
        self.templates.push(template);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, template_id: &str) -> Option<&WorkflowTemplate> {
        self.templates.iter().find(|t| t.id == template_id)
    }

    pub fn require(&self, template_id: &str) -> Result<&WorkflowTemplate, WorkflowError> {
        self.get(template_id)
            .ok_or_else(|| WorkflowError::UnknownTemplate(template_id.to_string()))
    }

    /// The template a project referencing `template_id` should render.
    ///
    /// A deleted template falls back to `fallback_id`, then to the first
    /// registered template.
    #[must_use]
    pub fn resolve(&self, template_id: &str, fallback_id: &str) -> Option<&WorkflowTemplate> {
        if let Some(template) = self.get(template_id) {
            return Some(template);
        }
        tracing::warn!(
            template_id,
            fallback_id,
            "workflow template missing, rendering fallback"
        );
        self.get(fallback_id).or_else(|| self.templates.first())
    }

    pub fn iter(&self) -> impl Iterator<Item = &WorkflowTemplate> {
        self.templates.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Create a custom template from the one-step skeleton.
    pub fn create_custom(
        &mut self,
        name: &str,
        description: &str,
    ) -> Result<&WorkflowTemplate, WorkflowError> {
        let name = non_empty(name, "Template name")?;
        let description = if description.trim().is_empty() {
            String::from("A new workflow for our team.")
        } else {
            description.trim().to_string()
        };

        let mut id = format!("{CUSTOM_PREFIX}{}", self.next_custom);
        while self.get(&id).is_some() {
            self.next_custom += 1;
            id = format!("{CUSTOM_PREFIX}{}", self.next_custom);
        }
        self.next_custom += 1;

        let mut template = WorkflowTemplate {
            id,
            name,
            description,
            steps: vec![WorkflowStepDefinition::new(
                format!("{STEP_PREFIX}1"),
                "edit",
                "New Step",
                "Describe this step.",
            )],
            is_custom: true,
        };
        template.normalize_last_marker();
        tracing::debug!(template_id = %template.id, "custom template created");
        self.templates.push(template);
        Ok(&self.templates[self.templates.len() - 1])
    }

    pub fn rename(&mut self, template_id: &str, name: &str) -> Result<(), WorkflowError> {
        let name = non_empty(name, "Template name")?;
        self.custom_mut(template_id)?.name = name;
        Ok(())
    }

    pub fn describe(&mut self, template_id: &str, description: &str) -> Result<(), WorkflowError> {
        self.custom_mut(template_id)?.description = description.trim().to_string();
        Ok(())
    }

    /// Append a step with a fresh `step-N` id and return that id.
    pub fn add_step(
        &mut self,
        template_id: &str,
        title: &str,
        description: &str,
    ) -> Result<String, WorkflowError> {
        let title = non_empty(title, "Step title")?;
        let template = self.custom_mut(template_id)?;

        let mut n = template.steps.len() + 1;
        let mut step_id = format!("{STEP_PREFIX}{n}");
        while template.contains_step(&step_id) {
            n += 1;
            step_id = format!("{STEP_PREFIX}{n}");
        }

        template.steps.push(WorkflowStepDefinition::new(
            step_id.clone(),
            "edit",
            title,
            description.trim(),
        ));
        template.normalize_last_marker();
        tracing::debug!(template_id, step_id = %step_id, "step added");
        Ok(step_id)
    }

    pub fn update_step(
        &mut self,
        template_id: &str,
        step_id: &str,
        edit: StepEdit,
    ) -> Result<(), WorkflowError> {
        let title = edit
            .title
            .as_deref()
            .map(|title| non_empty(title, "Step title"))
            .transpose()?;
        let template = self.custom_mut(template_id)?;
        let step = template
            .steps
            .iter_mut()
            .find(|step| step.id == step_id)
            .ok_or_else(|| WorkflowError::UnknownStep {
                template_id: template_id.to_string(),
                step_id: step_id.to_string(),
            })?;

        if let Some(title) = title {
            step.title = title;
        }
        if let Some(icon) = edit.icon {
            step.icon = icon;
        }
        if let Some(description) = edit.description {
            step.description = description.trim().to_string();
        }
        Ok(())
    }

    /// Remove a step. Tasks filed against it become orphans of this template.
    pub fn remove_step(&mut self, template_id: &str, step_id: &str) -> Result<(), WorkflowError> {
        let template = self.custom_mut(template_id)?;
        let index = template
            .steps
            .iter()
            .position(|step| step.id == step_id)
            .ok_or_else(|| WorkflowError::UnknownStep {
                template_id: template_id.to_string(),
                step_id: step_id.to_string(),
            })?;
        template.steps.remove(index);
        template.normalize_last_marker();
        tracing::debug!(template_id, step_id, "step removed");
        Ok(())
    }

    /// Delete a custom template.
    pub fn delete(&mut self, template_id: &str) -> Result<WorkflowTemplate, WorkflowError> {
        self.custom_mut(template_id)?;
        let index = self
            .templates
            .iter()
            .position(|t| t.id == template_id)
            .ok_or_else(|| WorkflowError::UnknownTemplate(template_id.to_string()))?;
        tracing::debug!(template_id, "custom template deleted");
        Ok(self.templates.remove(index))
    }

    fn custom_mut(&mut self, template_id: &str) -> Result<&mut WorkflowTemplate, WorkflowError> {
        let template = self
            .templates
            .iter_mut()
            .find(|t| t.id == template_id)
            .ok_or_else(|| WorkflowError::UnknownTemplate(template_id.to_string()))?;
        if !template.is_custom {
            return Err(WorkflowError::ImmutableTemplate(template_id.to_string()));
        }
        Ok(template)
    }
}

fn ensure_unique_steps(template: &WorkflowTemplate) -> Result<(), WorkflowError> {
    for (index, step) in template.steps.iter().enumerate() {
        if template.steps[..index].iter().any(|s| s.id == step.id) {
            return Err(WorkflowError::DuplicateStep {
                template_id: template.id.clone(),
                step_id: step.id.clone(),
            });
        }
    }
    Ok(())
}

fn non_empty(value: &str, field: &str) -> Result<String, WorkflowError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(WorkflowError::Validation(format!(
            "{field} is a required field"
        )));
    }
    Ok(value.to_string())
}
