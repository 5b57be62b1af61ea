use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MAX_VARIABLES: usize = 5;
pub const DEFAULT_MAX_VARIABLE_NAME_LENGTH: usize = 16;
pub const MIN_VARIABLE_NAME_LENGTH: usize = 1;

/// Limits enforced while validating a match template.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TemplateLimits {
    pub max_variables: usize,
    pub max_variable_name_length: usize,
}

impl Default for TemplateLimits {
    fn default() -> Self {
        Self {
            max_variables: DEFAULT_MAX_VARIABLES,
            max_variable_name_length: DEFAULT_MAX_VARIABLE_NAME_LENGTH,
        }
    }
}

impl TemplateLimits {
    pub fn builder() -> TemplateLimitsBuilder {
        TemplateLimitsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), TemplateLimitsError> {
        if self.max_variables == 0 {
            return Err(TemplateLimitsError::MaxVariablesInvalid {
                provided: self.max_variables,
            });
        }
        if self.max_variable_name_length < MIN_VARIABLE_NAME_LENGTH {
            return Err(TemplateLimitsError::MaxVariableNameLengthInvalid {
                provided: self.max_variable_name_length,
                min: MIN_VARIABLE_NAME_LENGTH,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct TemplateLimitsBuilder {
    limits: TemplateLimits,
}

impl TemplateLimitsBuilder {
    pub fn max_variables(mut self, value: usize) -> Self {
        self.limits.max_variables = value;
        self
    }

    pub fn max_variable_name_length(mut self, value: usize) -> Self {
        self.limits.max_variable_name_length = value;
        self
    }

    pub fn build(self) -> Result<TemplateLimits, TemplateLimitsError> {
        let limits = self.limits;
        limits.validate()?;
        Ok(limits)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateLimitsError {
    #[error("max_variables must be at least 1 (got {provided})")]
    MaxVariablesInvalid { provided: usize },
    #[error("max_variable_name_length must be at least {min} (got {provided})")]
    MaxVariableNameLengthInvalid { provided: usize, min: usize },
}
