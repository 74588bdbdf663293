//! Placeholder substitution context for workflow templates.

use crate::domain::AppType;

/// Variable context for rendering workflow templates.
///
/// Rendering is exact-match literal replacement of `{{PROJECT_NAME}}` and
/// `{{APP_TYPE}}` - not templating-engine semantics. There is no escaping
/// and no recursive substitution; a template with no placeholders passes
/// through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    project_name: String,
    app_type: AppType,
}

impl RenderContext {
    pub fn new(project_name: impl Into<String>, app_type: AppType) -> Self {
        Self {
            project_name: project_name.into(),
            app_type,
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn app_type(&self) -> AppType {
        self.app_type
    }

    /// Replace every occurrence of the two placeholder tokens.
    pub fn render(&self, template: &str) -> String {
        template
            .replace("{{PROJECT_NAME}}", &self.project_name)
            .replace("{{APP_TYPE}}", self.app_type.as_str())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RenderContext {
        RenderContext::new("Demo", AppType::ReactFrontend)
    }

    #[test]
    fn replaces_both_tokens() {
        let out = ctx().render("name: {{PROJECT_NAME}}\ntype: {{APP_TYPE}}\n");
        assert_eq!(out, "name: Demo\ntype: react-frontend\n");
    }

    #[test]
    fn replaces_repeated_occurrences() {
        let out = ctx().render("{{PROJECT_NAME}}-{{PROJECT_NAME}}");
        assert_eq!(out, "Demo-Demo");
    }

    #[test]
    fn template_without_placeholders_is_unchanged() {
        let template = "on:\n  push:\n    branches: [main]\n";
        assert_eq!(ctx().render(template), template);
    }

    #[test]
    fn partial_tokens_are_left_alone() {
        assert_eq!(ctx().render("{{PROJECT_NAME}"), "{{PROJECT_NAME}");
    }
}
