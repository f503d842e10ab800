//! Prompt-template store.
//!
//! A fixed catalog of analysis templates. Up to [`MAX_SELECTED`] of them can
//! be combined into one custom prompt; `[Placeholder]` slots are filled from a
//! shared map and unfilled slots read `(not provided)`.

use std::collections::BTreeMap;

use crate::error::AiError;

/// Most templates one analysis can combine.
pub const MAX_SELECTED: usize = 3;

const NOT_PROVIDED: &str = "(not provided)";
const FUSED_HEADER: &str = "Perform the following analyses based on the document provided:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub template: &'static str,
}

pub const CATALOG: &[PromptTemplate] = &[
    PromptTemplate {
        id: "swot",
        title: "SWOT Analysis",
        description: "Analyze strengths, weaknesses, opportunities, and threats.",
        template: "Perform a SWOT analysis based on the document. Our company strengths are \
                   [Our Strengths]. Our main competitor is [Competitor A].",
    },
    PromptTemplate {
        id: "compliance",
        title: "Compliance Check",
        description: "Identify all explicit requirements and constraints.",
        template: "Create a compliance matrix from the document. List every explicit \
                   requirement, constraint, and deliverable mentioned.",
    },
    PromptTemplate {
        id: "summary",
        title: "Executive Summary",
        description: "Generate a high-level summary for leadership.",
        template: "Generate a one-page executive summary suitable for a CEO. Focus on the \
                   total contract value, key deadlines, and our strategic alignment with the \
                   opportunity.",
    },
    PromptTemplate {
        id: "tech_stack",
        title: "Tech Stack Identification",
        description: "Identify required technologies and platforms.",
        template: "Based on the technical requirements in the document, identify all \
                   mentioned or implied technologies, programming languages, cloud services, \
                   and software platforms. Our current primary tech stack is [Our Tech Stack].",
    },
];

#[must_use]
pub fn find(id: &str) -> Option<&'static PromptTemplate> {
    CATALOG.iter().find(|template| template.id == id)
}

impl PromptTemplate {
    #[must_use]
    pub fn placeholders(&self) -> Vec<&'static str> {
        placeholders(self.template)
    }

    /// Template text with every slot replaced from `fills`.
    #[must_use]
    pub fn fill(&self, fills: &BTreeMap<String, String>) -> String {
        let mut prompt = self.template.to_string();
        for name in self.placeholders() {
            let value = fills
                .get(name)
                .map(|value| value.as_str().trim())
                .filter(|value| !value.is_empty())
                .unwrap_or(NOT_PROVIDED);
            prompt = prompt.replacen(&format!("[{name}]"), value, 1);
        }
        prompt
    }
}

/// Names inside `[...]`, in order of appearance.
#[must_use]
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('[') {
        let after = &rest[open + 1..];
        let Some(close) = after.find(']') else { break };
        names.push(&after[..close]);
        rest = &after[close + 1..];
    }
    names
}

/// Resolve ids against the catalog. The result keeps catalog order and
/// drops duplicates.
///
/// # Errors
///
/// Returns [`AiError::Validation`] for an unknown id, an empty selection, or
/// more than [`MAX_SELECTED`] templates.
pub fn select<S: AsRef<str>>(ids: &[S]) -> Result<Vec<&'static PromptTemplate>, AiError> {
    if let Some(unknown) = ids.iter().map(AsRef::as_ref).find(|id| find(id).is_none()) {
        let known = CATALOG.iter().map(|t| t.id).collect::<Vec<_>>().join(", ");
        return Err(AiError::Validation(format!(
            "unknown prompt template '{unknown}' (expected one of: {known})"
        )));
    }
    let selected = CATALOG
        .iter()
        .filter(|template| ids.iter().any(|id| id.as_ref() == template.id))
        .collect::<Vec<_>>();
    if selected.is_empty() {
        return Err(AiError::Validation("select at least one prompt template".into()));
    }
    if selected.len() > MAX_SELECTED {
        return Err(AiError::Validation(format!(
            "at most {MAX_SELECTED} prompt templates can be combined, got {}",
            selected.len()
        )));
    }
    Ok(selected)
}

/// Fill each selected template and join them into one numbered prompt.
#[must_use]
pub fn fuse(selected: &[&PromptTemplate], fills: &BTreeMap<String, String>) -> String {
    let mut prompt = FUSED_HEADER.to_string();
    for (index, template) in selected.iter().enumerate() {
        prompt.push_str(&format!("\n\n--- Analysis {} ---\n", index + 1));
        prompt.push_str(&template.fill(fills));
    }
    prompt
}

/// [`select`] then [`fuse`].
///
/// # Errors
///
/// See [`select`].
pub fn compose<S: AsRef<str>>(
    ids: &[S],
    fills: &BTreeMap<String, String>,
) -> Result<String, AiError> {
    let selected = select(ids)?;
    tracing::debug!(templates = selected.len(), "composing prompt from templates");
    Ok(fuse(&selected, fills))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn fills(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn catalog_ids_are_unique_and_findable() {
        let ids = CATALOG.iter().map(|t| t.id).collect::<Vec<_>>();
        assert_eq!(ids, ["swot", "compliance", "summary", "tech_stack"]);
        assert_eq!(find("summary").map(|t| t.title), Some("Executive Summary"));
        assert!(find("pricing").is_none());
    }

    #[test]
    fn placeholders_in_order() {
        assert_eq!(
            find("swot").unwrap().placeholders(),
            ["Our Strengths", "Competitor A"]
        );
        assert!(find("compliance").unwrap().placeholders().is_empty());
        assert_eq!(placeholders("a [x] b [unclosed"), ["x"]);
    }

    #[test]
    fn unfilled_slots_read_not_provided() {
        let swot = find("swot").unwrap();
        let prompt = swot.fill(&fills(&[("Our Strengths", "FedRAMP High"), ("Competitor A", "  ")]));
        assert_eq!(
            prompt,
            "Perform a SWOT analysis based on the document. Our company strengths are \
             FedRAMP High. Our main competitor is (not provided)."
        );
    }

    #[test]
    fn select_keeps_catalog_order_and_caps_at_three() {
        let selected = select(&["tech_stack", "swot", "swot"]).unwrap();
        assert_eq!(selected.iter().map(|t| t.id).collect::<Vec<_>>(), ["swot", "tech_stack"]);

        let err = select(&["swot", "compliance", "summary", "tech_stack"]).unwrap_err();
        assert!(matches!(err, AiError::Validation(msg) if msg.contains("at most 3")));

        let err = select(&["pricing"]).unwrap_err();
        assert!(matches!(err, AiError::Validation(msg) if msg.contains("'pricing'")));

        assert!(select::<&str>(&[]).is_err());
    }

    #[test]
    fn fused_prompt_numbers_each_analysis() {
        let prompt = compose(
            &["compliance", "tech_stack"],
            &fills(&[("Our Tech Stack", "Rust on AWS")]),
        )
        .unwrap();
        assert_eq!(
            prompt,
            "Perform the following analyses based on the document provided:\n\n\
             --- Analysis 1 ---\n\
             Create a compliance matrix from the document. List every explicit requirement, \
             constraint, and deliverable mentioned.\n\n\
             --- Analysis 2 ---\n\
             Based on the technical requirements in the document, identify all mentioned or \
             implied technologies, programming languages, cloud services, and software \
             platforms. Our current primary tech stack is Rust on AWS."
        );
    }
}
