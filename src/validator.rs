use crate::errors::TemplateResult;
use crate::options::{TemplateLimits, TemplateLimitsError};
use crate::rewrite::check_rewrite;
use crate::template::{VariableSet, validate_match_template};

/// Validates match and rewrite templates against a fixed set of limits.
///
/// Holds no mutable state, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct PathTemplateValidator {
    limits: TemplateLimits,
}

impl PathTemplateValidator {
    pub fn new(limits: TemplateLimits) -> Self {
        Self { limits }
    }

    pub fn try_new(limits: TemplateLimits) -> Result<Self, TemplateLimitsError> {
        limits.validate()?;
        Ok(Self { limits })
    }

    pub fn limits(&self) -> &TemplateLimits {
        &self.limits
    }

    #[tracing::instrument(level = "trace", skip(self, template), fields(template_len = template.len() as u64))]
    pub fn validate_path_template(&self, template: &str) -> TemplateResult<VariableSet> {
        match validate_match_template(template, &self.limits) {
            Ok(variables) => {
                tracing::event!(
                    tracing::Level::TRACE,
                    operation = "validate_path_template",
                    variables = variables.len() as u64
                );
                Ok(variables)
            }
            Err(err) => {
                tracing::debug!(kind = ?err.kind(), template = %template, "path template rejected");
                Err(err)
            }
        }
    }

    #[tracing::instrument(level = "trace", skip(self, rewrite, declared), fields(rewrite_len = rewrite.len() as u64, declared = declared.len() as u64))]
    pub fn validate_path_template_rewrite(
        &self,
        rewrite: &str,
        declared: &VariableSet,
    ) -> TemplateResult<()> {
        check_rewrite(rewrite, declared, self.limits.max_variable_name_length).inspect_err(|err| {
            tracing::debug!(kind = ?err.kind(), rewrite = %rewrite, "path template rewrite rejected");
        })
    }

    /// Validates `template` then checks `rewrite` against its variables.
    pub fn validate_route_templates(
        &self,
        template: &str,
        rewrite: &str,
    ) -> TemplateResult<VariableSet> {
        let variables = self.validate_path_template(template)?;
        self.validate_path_template_rewrite(rewrite, &variables)?;
        Ok(variables)
    }
}
