use agent::Result;
use agent::prompt::render;
use std::collections::HashMap;

const BEST_METHOD_PROMPT: &str = include_str!("prompts/best_method.md");

pub const SYSTEM_PROMPT: &str =
    "You are a method-finder. Produce a single rigorous one-pager with verifiable citations.";

pub const DEFAULT_RECENCY: &str = "365d";

#[derive(Clone, Debug, PartialEq)]
pub struct ResearchParams {
    pub topic: String,
    pub constraints: String,
    pub domains: String,
    pub recency: String,
}

impl ResearchParams {
    pub fn new(topic: impl Into<String>, constraints: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            constraints: constraints.into(),
            domains: String::new(),
            recency: DEFAULT_RECENCY.to_string(),
        }
    }

    pub fn build_prompt(&self) -> Result<String> {
        self.render_into(BEST_METHOD_PROMPT)
    }

    fn render_into(&self, template: &str) -> Result<String> {
        let values = HashMap::from([
            ("topic", self.topic.as_str()),
            ("constraints", self.constraints.as_str()),
            ("domains", self.domains.as_str()),
            ("recency", self.recency.as_str()),
        ]);

        Ok(render(template, &values)?)
    }
}

#[cfg(test)]
mod tests {
    use super::{BEST_METHOD_PROMPT, ResearchParams};
    use agent::Error;
    use agent::prompt::TemplateError;

    #[test]
    fn test_prompt_contains_params() -> agent::Result<()> {
        let params = ResearchParams {
            topic: "reduce p99 latency of a REST API".to_string(),
            constraints: "2 engineers, 4 weeks, Kubernetes".to_string(),
            domains: "sre.google, usenix.org".to_string(),
            recency: "180d".to_string(),
        };

        let prompt = params.build_prompt()?;

        assert!(prompt.starts_with("Goal: find the SINGLE best method to reduce p99 latency of a REST API\n"));
        assert!(prompt.contains("Constraints: 2 engineers, 4 weeks, Kubernetes\n"));
        assert!(prompt.contains("prefer recency < 180d and official standards"));
        assert!(prompt.contains("Search focus domains: sre.google, usenix.org\n"));
        assert!(prompt.contains("# Best Method: <name>"));
        assert!(!prompt.contains("{topic}"));

        Ok(())
    }

    #[test]
    fn test_defaults() -> agent::Result<()> {
        let params = ResearchParams::new("t", "c");
        assert_eq!(params.recency, "365d");
        assert_eq!(params.domains, "");

        let prompt = params.build_prompt()?;
        assert!(prompt.contains("prefer recency < 365d"));
        assert!(prompt.contains("Search focus domains: \n"));

        Ok(())
    }

    #[test]
    fn test_braces_in_params_are_kept_literally() -> agent::Result<()> {
        let params = ResearchParams::new("parse {json} fast", "no {recency} tricks");

        let prompt = params.build_prompt()?;
        assert!(prompt.contains("parse {json} fast"));
        assert!(prompt.contains("no {recency} tricks"));

        Ok(())
    }

    #[test]
    fn test_template_uses_every_param() {
        for placeholder in ["{topic}", "{constraints}", "{domains}", "{recency}"] {
            assert!(BEST_METHOD_PROMPT.contains(placeholder), "{placeholder}");
        }
    }

    #[test]
    fn test_unknown_placeholder_is_format_error() {
        let params = ResearchParams::new("t", "c");

        assert!(matches!(
            params.render_into("{topic} with at most {max_sources} sources"),
            Err(Error::Format(TemplateError::MissingValue { name, .. })) if name == "max_sources"
        ));
    }
}
