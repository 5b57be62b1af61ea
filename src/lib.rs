//! Ahead-of-time validation of gateway path templates.
//!
//! A match template such as `/api/{version}/{resource=*}/{method=**}` is
//! checked for syntax and its variable names are collected; a rewrite
//! template such as `/{version}/{method}` is then checked against them.

pub mod charset;
pub mod errors;
pub mod options;
pub mod rewrite;
pub mod template;
mod validator;

pub use errors::{
    TemplateError, TemplateErrorKind, TemplateResult, TemplateRole, VariableNameIssue,
};
pub use options::{TemplateLimits, TemplateLimitsBuilder, TemplateLimitsError};
pub use template::VariableSet;
pub use validator::PathTemplateValidator;

/// Validates a match template with the default limits.
pub fn validate_path_template(template: &str) -> TemplateResult<VariableSet> {
    PathTemplateValidator::default().validate_path_template(template)
}

/// Checks that every `{name}` in `rewrite` was declared by the match template.
pub fn validate_path_template_rewrite(rewrite: &str, declared: &VariableSet) -> TemplateResult<()> {
    PathTemplateValidator::default().validate_path_template_rewrite(rewrite, declared)
}

pub fn validate_route_templates(template: &str, rewrite: &str) -> TemplateResult<VariableSet> {
    PathTemplateValidator::default().validate_route_templates(template, rewrite)
}
