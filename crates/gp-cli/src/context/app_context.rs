use anyhow::Context;
use gp_ai::AiClient;
use gp_config::GovProConfig;
use gp_core::entities::MemberId;
use gp_core::enums::BoardScope;
use gp_workflow::{BoardController, Portfolio, Project};

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
///
/// Nothing is persisted: every invocation starts from the seeded portfolio.
#[derive(Debug)]
pub struct AppContext {
    pub portfolio: Portfolio,
    pub ai: AiClient,
    acting_as: Option<MemberId>,
}

impl AppContext {
    pub fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let config = GovProConfig::load_with_dotenv().context("failed to load govpro config")?;
        super::warn_misnamed_env();
        Self::from_config(config, flags)
    }

    pub fn from_config(config: GovProConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let ai = AiClient::new(config.ai.clone());
        let portfolio =
            Portfolio::seeded(config).context("failed to build the seeded portfolio")?;
        Ok(Self {
            portfolio,
            ai,
            acting_as: flags.acting_as,
        })
    }

    /// Make `project_id` the active project, if given, and return the active one.
    pub fn select_project(&mut self, project_id: Option<u64>) -> anyhow::Result<&Project> {
        if let Some(project_id) = project_id {
            self.portfolio.switch_project(project_id)?;
        }
        Ok(self.portfolio.active()?)
    }

    /// The member acting as the current user: `--as`, else the project owner.
    pub fn current_user(&self) -> anyhow::Result<MemberId> {
        let project = self.portfolio.active()?;
        let member_id = self.acting_as.unwrap_or_else(|| project.owner_id());
        project
            .require_member(member_id)
            .with_context(|| format!("--as {member_id} is not on project {}", project.id))?;
        Ok(member_id)
    }

    pub fn board_controller(&self, scope: BoardScope) -> anyhow::Result<BoardController> {
        Ok(BoardController::new(self.current_user()?, scope))
    }
}

#[cfg(test)]
mod tests {
    use gp_config::GovProConfig;
    use pretty_assertions::assert_eq;

    use super::AppContext;
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags(acting_as: Option<u64>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: false,
            verbose: false,
            acting_as,
        }
    }

    #[test]
    fn current_user_defaults_to_the_owner() {
        let ctx = AppContext::from_config(GovProConfig::default(), &flags(None)).unwrap();
        assert_eq!(ctx.current_user().unwrap(), 1);
    }

    #[test]
    fn acting_member_must_be_on_the_team() {
        let mut ctx = AppContext::from_config(GovProConfig::default(), &flags(Some(3))).unwrap();
        assert!(ctx.current_user().is_err());

        ctx.select_project(Some(2)).unwrap();
        assert_eq!(ctx.current_user().unwrap(), 3);
    }

    #[test]
    fn unknown_project_is_an_error() {
        let mut ctx = AppContext::from_config(GovProConfig::default(), &flags(None)).unwrap();
        assert!(ctx.select_project(Some(99)).is_err());
        assert_eq!(ctx.portfolio.active_project_id(), 1);
    }
}
