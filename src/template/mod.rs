mod classify;
mod name;
mod segmenter;
mod variable;
mod variables;

pub use name::validate_variable_name;
pub use segmenter::{Segments, split_segments};
pub use variables::VariableSet;

use crate::charset::is_printable;
use crate::errors::{TemplateError, TemplateResult, TemplateRole};
use crate::options::TemplateLimits;
use classify::ScanState;

/// Validates a match template and returns its declared variables.
///
/// Wildcard operators (`*`, `**`, `{..}`) must not follow a `**` anywhere to
/// their left, including inside earlier variable patterns. A segment whose
/// operator carries a literal suffix must be the last one.
pub fn validate_match_template(
    template: &str,
    limits: &TemplateLimits,
) -> TemplateResult<VariableSet> {
    if !is_printable(template) {
        return Err(TemplateError::NonPrintableCharacters {
            role: TemplateRole::Match,
            input: template.to_string(),
        });
    }

    let Some(body) = template.strip_prefix('/') else {
        return Err(TemplateError::NotStartingWithSlash {
            role: TemplateRole::Match,
            input: template.to_string(),
        });
    };

    let segments = split_segments(body)?;

    let state = segments
        .iter()
        .try_fold(ScanState::new(template, limits), |state, seg| {
            state.visit(seg)
        })?;

    Ok(state.into_variables())
}
