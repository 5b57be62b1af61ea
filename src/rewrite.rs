use smallvec::SmallVec;

use crate::charset::is_rewrite_literal;
use crate::errors::{TemplateError, TemplateResult, TemplateRole};
use crate::template::{VariableSet, validate_variable_name};

pub type RewriteReferences<'a> = SmallVec<[&'a str; 4]>;

/// Parses a rewrite template (`/` separated literals and `{name}` references)
/// and returns the distinct referenced names in first-reference order.
#[tracing::instrument(level = "trace", fields(rewrite_len = rewrite.len() as u64))]
pub fn parse_rewrite(rewrite: &str, max_name_len: usize) -> TemplateResult<RewriteReferences<'_>> {
    let bytes = rewrite.as_bytes();

    if bytes.first() != Some(&b'/') {
        return Err(TemplateError::NotStartingWithSlash {
            role: TemplateRole::Rewrite,
            input: rewrite.to_string(),
        });
    }

    let mut references = RewriteReferences::new();
    let mut inside_braces = false;
    let mut start = 0usize;

    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'{' => {
                if inside_braces {
                    return Err(TemplateError::NestedBraces {
                        role: TemplateRole::Rewrite,
                        input: rewrite.to_string(),
                    });
                }
                inside_braces = true;
                if !is_rewrite_literal(&rewrite[start..i]) {
                    return Err(TemplateError::InvalidRewriteCharacter {
                        rewrite: rewrite.to_string(),
                    });
                }
                start = i + 1;
            }
            b'}' => {
                if !inside_braces {
                    return Err(TemplateError::UnmatchedBrace {
                        role: TemplateRole::Rewrite,
                        input: rewrite.to_string(),
                        brace: '}',
                    });
                }
                inside_braces = false;
                if start == i {
                    return Err(TemplateError::EmptyRewriteVariable {
                        rewrite: rewrite.to_string(),
                    });
                }

                let name = &rewrite[start..i];
                validate_variable_name(name, rewrite, max_name_len)?;
                // the same variable may be referenced more than once
                if !references.contains(&name) {
                    references.push(name);
                }
                start = i + 1;
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                return Err(TemplateError::EmptySegment {
                    role: TemplateRole::Rewrite,
                    input: rewrite.to_string(),
                });
            }
            _ => {}
        }
    }

    if inside_braces {
        return Err(TemplateError::UnmatchedBrace {
            role: TemplateRole::Rewrite,
            input: rewrite.to_string(),
            brace: '{',
        });
    }

    if !is_rewrite_literal(&rewrite[start..]) {
        return Err(TemplateError::InvalidRewriteCharacter {
            rewrite: rewrite.to_string(),
        });
    }

    Ok(references)
}

/// Fails on the first referenced name that `declared` does not contain.
pub fn check_rewrite(
    rewrite: &str,
    declared: &VariableSet,
    max_name_len: usize,
) -> TemplateResult<()> {
    let references = parse_rewrite(rewrite, max_name_len)?;

    match references.iter().find(|name| !declared.contains(name)) {
        Some(name) => Err(TemplateError::RewriteVariableNotDeclared {
            name: name.to_string(),
            rewrite: rewrite.to_string(),
        }),
        None => Ok(()),
    }
}
