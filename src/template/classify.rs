use bitflags::bitflags;
use memchr::{memchr, memrchr};

use crate::charset::{is_literal, literal_prefix_len};
use crate::errors::{TemplateError, TemplateResult};
use crate::options::TemplateLimits;

use super::name::validate_variable_name;
use super::variable::{VariableToken, validate_pattern};
use super::variables::VariableSet;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub(crate) struct ScanFlags: u8 {
        /// A `**` has been consumed, at top level or inside a variable pattern.
        const TEXT_GLOB = 0b00000001;
        /// A previous segment carried a literal suffix after its operator.
        const SUFFIX = 0b00000010;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentKind<'a> {
    PathGlob,
    TextGlob,
    Literal,
    Variable(VariableToken<'a>),
    PrefixedOperator,
    Invalid,
}

fn classify(seg: &str) -> SegmentKind<'_> {
    match seg {
        "*" => SegmentKind::PathGlob,
        "**" => SegmentKind::TextGlob,
        _ if is_literal(seg) => SegmentKind::Literal,
        _ if seg.len() >= 2 && seg.starts_with('{') && seg.ends_with('}') => {
            SegmentKind::Variable(VariableToken::parse(seg))
        }
        _ if has_prefixed_operator(seg) => SegmentKind::PrefixedOperator,
        _ => SegmentKind::Invalid,
    }
}

/// Returns the operator part of `seg` when it is `*`, `**` or a brace token
/// followed by a non-empty literal suffix.
fn strip_suffix(seg: &str) -> Option<&str> {
    let bytes = seg.as_bytes();
    let op_end = match *bytes.first()? {
        b'*' if bytes.get(1) == Some(&b'*') => 2,
        b'*' => 1,
        b'{' => memrchr(b'}', bytes)? + 1,
        _ => return None,
    };
    is_literal(&seg[op_end..]).then(|| &seg[..op_end])
}

fn has_prefixed_operator(seg: &str) -> bool {
    let lead = literal_prefix_len(seg);
    if lead == 0 {
        return false;
    }
    let rest = &seg.as_bytes()[lead..];
    match rest.first() {
        Some(b'*') => true,
        Some(b'{') => memchr(b'}', &rest[1..]).is_some(),
        _ => false,
    }
}

/// Accumulator threaded through the segments of one match template.
#[derive(Debug)]
pub(crate) struct ScanState<'a> {
    template: &'a str,
    limits: &'a TemplateLimits,
    flags: ScanFlags,
    variables: VariableSet,
}

impl<'a> ScanState<'a> {
    pub fn new(template: &'a str, limits: &'a TemplateLimits) -> Self {
        Self {
            template,
            limits,
            flags: ScanFlags::empty(),
            variables: VariableSet::new(),
        }
    }

    pub fn into_variables(self) -> VariableSet {
        self.variables
    }

    pub fn visit(mut self, seg: &str) -> TemplateResult<Self> {
        if self.flags.contains(ScanFlags::SUFFIX) {
            return Err(TemplateError::SuffixNotFinal {
                template: self.template.to_string(),
            });
        }

        let seg = match strip_suffix(seg) {
            Some(op) => {
                self.flags.insert(ScanFlags::SUFFIX);
                op
            }
            None => seg,
        };

        match classify(seg) {
            SegmentKind::PathGlob => {
                if self.flags.contains(ScanFlags::TEXT_GLOB) {
                    return Err(TemplateError::PathGlobAfterTextGlob {
                        template: self.template.to_string(),
                    });
                }
            }
            SegmentKind::TextGlob => {
                if self.flags.contains(ScanFlags::TEXT_GLOB) {
                    return Err(TemplateError::TextGlobAfterTextGlob {
                        template: self.template.to_string(),
                    });
                }
                self.flags.insert(ScanFlags::TEXT_GLOB);
            }
            SegmentKind::Literal => {}
            SegmentKind::Variable(token) => {
                if self.flags.contains(ScanFlags::TEXT_GLOB) {
                    return Err(TemplateError::VariableAfterTextGlob {
                        segment: seg.to_string(),
                    });
                }
                self.declare(token.name)?;
                if let Some(pattern) = token.pattern {
                    validate_pattern(token.name, pattern, self.template, &mut self.flags)?;
                }
            }
            SegmentKind::PrefixedOperator => {
                return Err(TemplateError::PrefixBeforeOperator {
                    segment: seg.to_string(),
                });
            }
            SegmentKind::Invalid => {
                return Err(TemplateError::InvalidSegment {
                    segment: seg.to_string(),
                });
            }
        }

        Ok(self)
    }

    fn declare(&mut self, name: &str) -> TemplateResult<()> {
        validate_variable_name(name, self.template, self.limits.max_variable_name_length)?;

        if !self.variables.insert(name) {
            return Err(TemplateError::DuplicateVariableName {
                name: name.to_string(),
            });
        }

        if self.variables.len() > self.limits.max_variables {
            return Err(TemplateError::TooManyVariables {
                template: self.template.to_string(),
                max: self.limits.max_variables,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_literal_suffixes_from_operators() {
        assert_eq!(strip_suffix("*_suf"), Some("*"));
        assert_eq!(strip_suffix("**.m3u8"), Some("**"));
        assert_eq!(strip_suffix("{path=**}.m3u8"), Some("{path=**}"));
        assert_eq!(strip_suffix("{id}.ts"), Some("{id}"));
        assert_eq!(strip_suffix("*"), None);
        assert_eq!(strip_suffix("{id}"), None);
        assert_eq!(strip_suffix("*{*}*"), None);
        assert_eq!(strip_suffix("{a}x{b}"), None);
        assert_eq!(strip_suffix("v*"), None);
    }

    #[test]
    fn classifies_segments() {
        assert_eq!(classify("*"), SegmentKind::PathGlob);
        assert_eq!(classify("**"), SegmentKind::TextGlob);
        assert_eq!(classify("api"), SegmentKind::Literal);
        assert!(matches!(classify("{id=*}"), SegmentKind::Variable(_)));
        assert_eq!(classify("v*"), SegmentKind::PrefixedOperator);
        assert_eq!(classify("invites{service=**}"), SegmentKind::PrefixedOperator);
        assert_eq!(classify("***"), SegmentKind::Invalid);
        assert_eq!(classify("index?a=2"), SegmentKind::Invalid);
    }

    #[test]
    fn prefix_detection_needs_a_closed_brace() {
        assert!(has_prefixed_operator("ll-sd-out.{ext}"));
        assert!(has_prefixed_operator("ll-sd-out.**"));
        assert!(!has_prefixed_operator("abc{"));
        assert!(!has_prefixed_operator("*abc"));
    }

    #[test]
    fn fold_tracks_declaration_order() {
        let limits = TemplateLimits::default();
        let state = ["a", "{b}", "{c=*/**}"]
            .into_iter()
            .try_fold(ScanState::new("/a/{b}/{c=*/**}", &limits), |s, seg| {
                s.visit(seg)
            })
            .unwrap();
        assert!(state.flags.contains(ScanFlags::TEXT_GLOB));
        assert_eq!(
            state.into_variables().iter().collect::<Vec<_>>(),
            vec!["b", "c"]
        );
    }
}
