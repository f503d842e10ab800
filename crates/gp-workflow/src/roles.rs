//! Role registry keyed by stable role id.

use gp_core::entities::RoleDefinition;

use crate::error::WorkflowError;

#[derive(Debug, Clone, Default)]
pub struct RoleRegistry {
    roles: Vec<RoleDefinition>,
}

impl RoleRegistry {
    #[must_use]
    pub const fn new(roles: Vec<RoleDefinition>) -> Self {
        Self { roles }
    }

    #[must_use]
    pub fn get(&self, role_id: &str) -> Option<&RoleDefinition> {
        self.roles.iter().find(|role| role.id == role_id)
    }

    pub fn require(&self, role_id: &str) -> Result<&RoleDefinition, WorkflowError> {
        self.get(role_id)
            .ok_or_else(|| WorkflowError::UnknownRole(role_id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoleDefinition> {
        self.roles.iter()
    }

    /// Register a role. Its id is derived from the name.
    pub fn add(&mut self, name: &str, persona: &str) -> Result<&RoleDefinition, WorkflowError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WorkflowError::Validation(String::from(
                "Role name is a required field",
            )));
        }
        let id = RoleDefinition::id_from_name(name);
        if self.get(&id).is_some() {
            return Err(WorkflowError::DuplicateRole(id));
        }
        tracing::debug!(role_id = %id, "role added");
        self.roles.push(RoleDefinition {
            id,
            name: name.to_string(),
            persona: persona.trim().to_string(),
        });
        Ok(&self.roles[self.roles.len() - 1])
    }

    /// Rename a role and replace its persona. The id never changes.
    pub fn update(&mut self, role_id: &str, name: &str, persona: &str) -> Result<(), WorkflowError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WorkflowError::Validation(String::from(
                "Role name is a required field",
            )));
        }
        let role = self
            .roles
            .iter_mut()
            .find(|role| role.id == role_id)
            .ok_or_else(|| WorkflowError::UnknownRole(role_id.to_string()))?;
        role.name = name.to_string();
        role.persona = persona.trim().to_string();
        Ok(())
    }

    /// Remove a role nobody holds. `holders` is the number of team members,
    /// across every project, whose `role_id` is this role.
    pub fn remove(&mut self, role_id: &str, holders: usize) -> Result<RoleDefinition, WorkflowError> {
        let index = self
            .roles
            .iter()
            .position(|role| role.id == role_id)
            .ok_or_else(|| WorkflowError::UnknownRole(role_id.to_string()))?;
        if holders > 0 {
            return Err(WorkflowError::RoleInUse {
                role_id: role_id.to_string(),
                members: holders,
            });
        }
        tracing::debug!(role_id, "role removed");
        Ok(self.roles.remove(index))
    }
}
