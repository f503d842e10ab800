//! Built-in templates, roles and the two demo projects.

use chrono::{DateTime, Duration, Utc};
use gp_core::entities::{
    MemberId, NewTask, RoleDefinition, Task, TeamMember, WorkflowStepDefinition, WorkflowTemplate,
};
use gp_core::enums::TaskStatus;

use crate::ids::IdSequence;
use crate::project::Project;

pub const STANDARD_RFI: &str = "standard-rfi";
pub const COMPLEX_RFP: &str = "complex-rfp";

fn step(id: &str, icon: &str, title: &str, description: &str) -> WorkflowStepDefinition {
    WorkflowStepDefinition::new(id, icon, title, description)
}

#[must_use]
pub fn templates() -> Vec<WorkflowTemplate> {
    let mut templates = vec![
        WorkflowTemplate {
            id: STANDARD_RFI.into(),
            name: "Standard RFI Response".into(),
            description: "A standard workflow for responding to Requests for Information.".into(),
            steps: vec![
                step(
                    "intake",
                    "file",
                    "Document Intake & Analysis",
                    "RFI document uploaded and initial AI analysis completed.",
                ),
                step(
                    "assignment",
                    "users",
                    "Team Assignment",
                    "Assign Writers, Technical Solutions, and Reviewers to the project.",
                ),
                step(
                    "drafting",
                    "edit",
                    "Drafting & Content Creation",
                    "Writers and Technical team collaborate on the initial draft.",
                ),
                step(
                    "review",
                    "review",
                    "Strategic Review (Pink Team)",
                    "Review panel assesses the draft for strategic alignment.",
                ),
                step(
                    "contracts",
                    "contracts",
                    "Contracts & Compliance Review",
                    "Contracts team reviews for legal and compliance issues.",
                ),
            ],
            is_custom: false,
        },
        WorkflowTemplate {
            id: COMPLEX_RFP.into(),
            name: "Complex RFP".into(),
            description:
                "A detailed workflow for complex Requests for Proposal with multiple volumes."
                    .into(),
            steps: vec![
                step("kickoff", "users", "Kickoff Meeting", "Formal kickoff with all stakeholders."),
                step(
                    "tech-volume",
                    "diagram",
                    "Technical Volume",
                    "Development of the technical solution and narrative.",
                ),
                step(
                    "management-volume",
                    "dashboard",
                    "Management Volume",
                    "Development of the project management plan.",
                ),
                step("cost-volume", "summary", "Cost Volume", "Development of the cost proposal."),
                step(
                    "red-team",
                    "review",
                    "Red Team Review",
                    "Final adversarial review of all volumes.",
                ),
                step(
                    "submission",
                    "upload",
                    "Final Submission",
                    "Final formatting and submission of the proposal.",
                ),
            ],
            is_custom: false,
        },
    ];
    for template in &mut templates {
        template.normalize_last_marker();
    }
    templates
}

fn role(id: &str, name: &str, persona: &str) -> RoleDefinition {
    RoleDefinition {
        id: id.into(),
        name: name.into(),
        persona: persona.into(),
    }
}

#[must_use]
pub fn roles() -> Vec<RoleDefinition> {
    vec![
        role(
            "capture_manager",
            "Capture Manager",
            "You are a Capture Manager following Shipley Associates best practices. Focus on \
             overall strategy, win themes, team composition, and resource allocation. Provide a \
             high-level executive summary.",
        ),
        role(
            "writer",
            "Writer",
            "You are a Proposal Writer following Shipley Associates best practices. Focus on \
             compliance, narrative structure, tone of voice, and identifying sections that \
             require specific subject matter expert input.",
        ),
        role(
            "technical_solutions",
            "Technical Solutions",
            "You are a Technical Solutions Architect. Focus on technical requirements, solution \
             feasibility, identifying necessary technologies, potential innovations, and \
             implementation challenges.",
        ),
        role(
            "strategic_reviewer",
            "Strategic Reviewer",
            "You are a Strategic Reviewer (e.g., Pink Team/Red Team lead). Critically evaluate \
             the RFI against our company's strategic goals, competitive positioning, and \
             probability of winning. Identify weaknesses and strategic gaps.",
        ),
        role(
            "program_manager",
            "Program Manager",
            "You are a Program Manager. Focus on project scope, timeline, deliverables, \
             potential staffing needs, and identifying project management risks based on the \
             RFI.",
        ),
        role(
            "contracts_team",
            "Contracts Team",
            "You are a Contracts Specialist. Focus on contractual obligations, terms and \
             conditions, potential legal risks, compliance requirements (FAR/DFARS clauses), and \
             data rights issues.",
        ),
    ]
}

fn member(id: MemberId, name: &str, role_id: &str, email: &str, title: &str) -> TeamMember {
    TeamMember {
        id,
        name: name.into(),
        role_id: role_id.into(),
        avatar: TeamMember::initials(name),
        email: email.into(),
        title: title.into(),
        can_manage_roles: false,
    }
}

/// The portfolio owner, seeded into every new project.
#[must_use]
pub fn owner() -> TeamMember {
    TeamMember {
        can_manage_roles: true,
        ..member(
            1,
            "Alex Johnson",
            "capture_manager",
            "alex.j@govpro.com",
            "Lead Capture Manager",
        )
    }
}

fn seeded(id: u64, new: NewTask, updates: &[&str]) -> Task {
    let mut task = Task::from_new(id, new);
    task.updates = updates.iter().map(ToString::to_string).collect();
    task
}

/// "Project Phoenix RFI" and "CyberGuard RFP", due dates relative to `now`.
#[must_use]
pub fn projects(now: DateTime<Utc>, ids: &IdSequence) -> Vec<Project> {
    let phoenix = Project::new(
        1,
        "Project Phoenix RFI",
        "Response to the Request for Information for the Phoenix cloud migration initiative.",
        STANDARD_RFI,
        owner(),
        ids.clone(),
    )
    .with_roster(
        vec![member(
            2,
            "Brenda Smith",
            "writer",
            "brenda.s@govpro.com",
            "Senior Proposal Writer",
        )],
        vec![
            seeded(
                101,
                NewTask::new("Finalize Win Themes", 1, "assignment")
                    .description("Finalize win themes for the proposal based on executive feedback.")
                    .status(TaskStatus::InProgress)
                    .due(now + Duration::days(3), Some("America/New_York".into())),
                &[],
            ),
            seeded(
                102,
                NewTask::new("Draft Section C", 2, "drafting")
                    .description("Draft the full technical approach for Section C.")
                    .due(now + Duration::days(1), Some("America/Los_Angeles".into())),
                &[],
            ),
        ],
    );

    let cyberguard = Project::new(
        2,
        "CyberGuard RFP",
        "Full proposal for the CyberGuard security infrastructure contract.",
        COMPLEX_RFP,
        owner(),
        ids.clone(),
    )
    .with_roster(
        vec![
            member(
                3,
                "Charles Lee",
                "technical_solutions",
                "charles.l@govpro.com",
                "Solutions Architect",
            ),
            member(
                4,
                "Diana Ross",
                "strategic_reviewer",
                "diana.r@govpro.com",
                "Director of Strategy",
            ),
        ],
        vec![
            seeded(
                103,
                NewTask::new("Review Compliance Matrix", 4, "red-team")
                    .description(
                        "Perform a line-by-line review of the compliance matrix against the RFP.",
                    )
                    .blocked("Waiting for legal clarification on clause 5.2.")
                    .due(now - Duration::days(2), Some("UTC".into())),
                &[],
            ),
            seeded(
                104,
                NewTask::new("Create Architecture Diagram", 3, "tech-volume")
                    .description(
                        "Create the primary system architecture diagram for the technical volume.",
                    )
                    .status(TaskStatus::Done),
                &["Initial draft complete, pending review."],
            ),
        ],
    );

    vec![phoenix, cyberguard]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::derive_statuses;
    use gp_core::enums::StepStatus;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_templates_are_read_only_and_terminated() {
        for template in templates() {
            assert!(!template.is_custom);
            assert!(template.steps.last().unwrap().is_last);
            assert_eq!(template.steps.iter().filter(|s| s.is_last).count(), 1);
        }
    }

    #[test]
    fn seeded_tasks_keep_block_invariant() {
        let projects = projects(Utc::now(), &IdSequence::default());
        for project in &projects {
            assert!(project.tasks().iter().all(Task::block_invariant_holds));
        }
    }

    #[test]
    fn seeded_ids_advance_shared_sequence() {
        let ids = IdSequence::default();
        let _ = projects(Utc::now(), &ids);
        assert_eq!(ids.peek(), 105);
    }

    #[test]
    fn cyberguard_red_team_is_blocked() {
        let projects = projects(Utc::now(), &IdSequence::default());
        let complex = templates().remove(1);
        let statuses = derive_statuses(&complex, projects[1].tasks().as_slice());
        assert_eq!(statuses.get("red-team"), Some(StepStatus::Blocked));
        assert_eq!(statuses.get("tech-volume"), Some(StepStatus::Complete));
        assert_eq!(statuses.get("kickoff"), Some(StepStatus::Upcoming));
    }

    #[test]
    fn every_member_role_exists() {
        let roles = roles();
        let projects = projects(Utc::now(), &IdSequence::default());
        for member in projects.iter().flat_map(|p| p.team()) {
            assert!(roles.iter().any(|r| r.id == member.role_id), "{}", member.role_id);
        }
    }
}
