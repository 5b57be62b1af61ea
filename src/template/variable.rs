use crate::charset::{is_literal_byte, literal_prefix_len};
use crate::errors::{TemplateError, TemplateResult};
use memchr::memchr;

use super::classify::ScanFlags;

/// A `{name}` or `{name=pattern}` token with its braces stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct VariableToken<'a> {
    pub name: &'a str,
    pub pattern: Option<&'a str>,
}

impl<'a> VariableToken<'a> {
    /// `token` must start with `{` and end with `}`.
    pub fn parse(token: &'a str) -> Self {
        let inner = &token[1..token.len() - 1];
        match memchr(b'=', inner.as_bytes()) {
            Some(eq) => Self {
                name: &inner[..eq],
                pattern: Some(&inner[eq + 1..]),
            },
            None => Self {
                name: inner,
                pattern: None,
            },
        }
    }
}

/// Validates a variable pattern against the path/text glob ordering already
/// accumulated in `flags` for the enclosing template.
pub(super) fn validate_pattern(
    name: &str,
    pattern: &str,
    template: &str,
    flags: &mut ScanFlags,
) -> TemplateResult<()> {
    if pattern.is_empty() {
        return Err(TemplateError::EmptyVariablePattern {
            name: name.to_string(),
        });
    }
    if pattern.starts_with('/') || pattern.ends_with('/') {
        return Err(TemplateError::PatternStartsOrEndsWithSlash {
            pattern: pattern.to_string(),
        });
    }

    for part in pattern.split('/') {
        match part {
            "*" => {
                if flags.contains(ScanFlags::TEXT_GLOB) {
                    return Err(TemplateError::PathGlobAfterTextGlob {
                        template: template.to_string(),
                    });
                }
            }
            "**" => {
                if flags.contains(ScanFlags::TEXT_GLOB) {
                    return Err(TemplateError::TextGlobAfterTextGlob {
                        template: template.to_string(),
                    });
                }
                flags.insert(ScanFlags::TEXT_GLOB);
            }
            _ if memchr(b'*', part.as_bytes()).is_none() => {}
            _ if is_affixed_glob(part) => {
                return Err(TemplateError::PrefixOrSuffixOnPatternOperator {
                    segment: part.to_string(),
                });
            }
            _ => {
                return Err(TemplateError::InvalidPatternSegment {
                    segment: part.to_string(),
                });
            }
        }
    }

    Ok(())
}

// literal* ("*" | "**") literal*
fn is_affixed_glob(part: &str) -> bool {
    let rest = &part.as_bytes()[literal_prefix_len(part)..];
    let stars = rest.iter().take_while(|&&b| b == b'*').count();
    (1..=2).contains(&stars) && rest[stars..].iter().all(|&b| is_literal_byte(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_name_and_pattern_on_first_equals() {
        assert_eq!(
            VariableToken::parse("{foo}"),
            VariableToken {
                name: "foo",
                pattern: None
            }
        );
        assert_eq!(
            VariableToken::parse("{foo=a=b/*}"),
            VariableToken {
                name: "foo",
                pattern: Some("a=b/*")
            }
        );
        assert_eq!(
            VariableToken::parse("{=*}"),
            VariableToken {
                name: "",
                pattern: Some("*")
            }
        );
    }

    #[test]
    fn detects_affixed_globs() {
        for part in ["v*", "v1*", "*beta", "asset*-v1", "a**b"] {
            assert!(is_affixed_glob(part), "{part} should be affixed");
        }
        for part in ["***", "a***", "*?", "?*"] {
            assert!(!is_affixed_glob(part), "{part} should not be affixed");
        }
    }

    #[test]
    fn pattern_globs_share_the_template_flags() {
        let mut flags = ScanFlags::empty();
        validate_pattern("a", "*/**", "/{a=*/**}", &mut flags).unwrap();
        assert!(flags.contains(ScanFlags::TEXT_GLOB));

        let err = validate_pattern("b", "*", "/{a=**}/{b=*}", &mut flags).unwrap_err();
        assert!(matches!(err, TemplateError::PathGlobAfterTextGlob { .. }));
    }

    #[test]
    fn star_free_parts_are_accepted_verbatim() {
        let mut flags = ScanFlags::empty();
        validate_pattern("a", "x//y", "/{a=x//y}", &mut flags).unwrap();
        assert!(flags.is_empty());
    }
}
