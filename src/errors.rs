use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which of the two grammars produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateRole {
    Match,
    Rewrite,
}

impl fmt::Display for TemplateRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateRole::Match => f.write_str("path template"),
            TemplateRole::Rewrite => f.write_str("path template rewrite"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariableNameIssue {
    Empty,
    InvalidCharacters,
    TooLong,
}

/// Stable classification of a [`TemplateError`], independent of message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateErrorKind {
    NonPrintableCharacters,
    NotStartingWithSlash,
    EmptySegment,
    UnmatchedBrace,
    NestedBraces,
    InvalidSegment,
    PrefixBeforeOperator,
    PathGlobAfterTextGlob,
    TextGlobAfterTextGlob,
    VariableAfterTextGlob,
    SuffixNotFinal,
    InvalidVariableName(VariableNameIssue),
    DuplicateVariableName,
    TooManyVariables,
    EmptyVariablePattern,
    PatternStartsOrEndsWithSlash,
    PrefixOrSuffixOnPatternOperator,
    InvalidPatternSegment,
    InvalidRewriteCharacter,
    EmptyRewriteVariable,
    RewriteVariableNotDeclared,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("{role} contains non-printable characters: {input}")]
    NonPrintableCharacters { role: TemplateRole, input: String },
    #[error("{role} must start with a /: {input}")]
    NotStartingWithSlash { role: TemplateRole, input: String },
    #[error("empty segment not allowed in {role}: {input}")]
    EmptySegment { role: TemplateRole, input: String },
    #[error("unmatched {brace} not allowed in {role}: {input}")]
    UnmatchedBrace {
        role: TemplateRole,
        input: String,
        brace: char,
    },
    #[error("nested braces not allowed in {role}: {input}")]
    NestedBraces { role: TemplateRole, input: String },
    #[error("invalid segment in path template: {segment}")]
    InvalidSegment { segment: String },
    #[error("prefixes not allowed before operators: {segment}")]
    PrefixBeforeOperator { segment: String },
    #[error("cannot have path glob (*) after text glob (**) in '{template}'")]
    PathGlobAfterTextGlob { template: String },
    #[error("cannot have text glob (**) after text glob (**) in '{template}'")]
    TextGlobAfterTextGlob { template: String },
    #[error("cannot have variable after text glob (**): {segment}")]
    VariableAfterTextGlob { segment: String },
    #[error("the suffixed operator must be the final path component: {template}")]
    SuffixNotFinal { template: String },
    #[error("variable name cannot be empty: {input}")]
    VariableNameEmpty { input: String },
    #[error(
        "variable name must start with a letter and contain only alphanumeric characters and underscores: {name}"
    )]
    VariableNameInvalid { name: String },
    #[error("variable name exceeds {max} characters: {name}")]
    VariableNameTooLong { name: String, max: usize },
    #[error("variable name is duplicated: {name}")]
    DuplicateVariableName { name: String },
    #[error("cannot have more than {max} variables: {template}")]
    TooManyVariables { template: String, max: usize },
    #[error("variable pattern is empty for: {name}")]
    EmptyVariablePattern { name: String },
    #[error("variable pattern cannot start or end with a slash: {pattern}")]
    PatternStartsOrEndsWithSlash { pattern: String },
    #[error("prefixes or suffixes not allowed with variable pattern operators: {segment}")]
    PrefixOrSuffixOnPatternOperator { segment: String },
    #[error("invalid variable pattern segment: {segment}")]
    InvalidPatternSegment { segment: String },
    #[error("invalid character in path template rewrite: {rewrite}")]
    InvalidRewriteCharacter { rewrite: String },
    #[error("empty variable not allowed in path template rewrite: {rewrite}")]
    EmptyRewriteVariable { rewrite: String },
    #[error("variable {name} in path template rewrite is not present in the path template: {rewrite}")]
    RewriteVariableNotDeclared { name: String, rewrite: String },
}

impl TemplateError {
    pub fn kind(&self) -> TemplateErrorKind {
        use TemplateErrorKind as K;

        match self {
            TemplateError::NonPrintableCharacters { .. } => K::NonPrintableCharacters,
            TemplateError::NotStartingWithSlash { .. } => K::NotStartingWithSlash,
            TemplateError::EmptySegment { .. } => K::EmptySegment,
            TemplateError::UnmatchedBrace { .. } => K::UnmatchedBrace,
            TemplateError::NestedBraces { .. } => K::NestedBraces,
            TemplateError::InvalidSegment { .. } => K::InvalidSegment,
            TemplateError::PrefixBeforeOperator { .. } => K::PrefixBeforeOperator,
            TemplateError::PathGlobAfterTextGlob { .. } => K::PathGlobAfterTextGlob,
            TemplateError::TextGlobAfterTextGlob { .. } => K::TextGlobAfterTextGlob,
            TemplateError::VariableAfterTextGlob { .. } => K::VariableAfterTextGlob,
            TemplateError::SuffixNotFinal { .. } => K::SuffixNotFinal,
            TemplateError::VariableNameEmpty { .. } => {
                K::InvalidVariableName(VariableNameIssue::Empty)
            }
            TemplateError::VariableNameInvalid { .. } => {
                K::InvalidVariableName(VariableNameIssue::InvalidCharacters)
            }
            TemplateError::VariableNameTooLong { .. } => {
                K::InvalidVariableName(VariableNameIssue::TooLong)
            }
            TemplateError::DuplicateVariableName { .. } => K::DuplicateVariableName,
            TemplateError::TooManyVariables { .. } => K::TooManyVariables,
            TemplateError::EmptyVariablePattern { .. } => K::EmptyVariablePattern,
            TemplateError::PatternStartsOrEndsWithSlash { .. } => K::PatternStartsOrEndsWithSlash,
            TemplateError::PrefixOrSuffixOnPatternOperator { .. } => {
                K::PrefixOrSuffixOnPatternOperator
            }
            TemplateError::InvalidPatternSegment { .. } => K::InvalidPatternSegment,
            TemplateError::InvalidRewriteCharacter { .. } => K::InvalidRewriteCharacter,
            TemplateError::EmptyRewriteVariable { .. } => K::EmptyRewriteVariable,
            TemplateError::RewriteVariableNotDeclared { .. } => K::RewriteVariableNotDeclared,
        }
    }
}

pub type TemplateResult<T> = Result<T, TemplateError>;
