use crate::errors::{TemplateError, TemplateResult, TemplateRole};
use smallvec::SmallVec;

pub type Segments<'a> = SmallVec<[&'a str; 8]>;

/// Splits a template body (leading `/` already removed) on slashes that sit
/// outside braces, so `a/{foo=*/x}/b` yields `a`, `{foo=*/x}`, `b`.
///
/// A single trailing slash produces no extra segment.
#[tracing::instrument(level = "trace", fields(body_len = body.len() as u64))]
pub fn split_segments(body: &str) -> TemplateResult<Segments<'_>> {
    let mut segments = Segments::new();
    let mut seg_start = 0usize;
    let mut inside_braces = false;

    for (i, b) in body.bytes().enumerate() {
        match b {
            b'/' if inside_braces => {}
            b'/' => {
                if seg_start == i {
                    return Err(TemplateError::EmptySegment {
                        role: TemplateRole::Match,
                        input: body.to_string(),
                    });
                }
                segments.push(&body[seg_start..i]);
                seg_start = i + 1;
            }
            b'{' => {
                if inside_braces {
                    return Err(TemplateError::NestedBraces {
                        role: TemplateRole::Match,
                        input: body.to_string(),
                    });
                }
                inside_braces = true;
            }
            b'}' => {
                if !inside_braces {
                    return Err(TemplateError::UnmatchedBrace {
                        role: TemplateRole::Match,
                        input: body.to_string(),
                        brace: '}',
                    });
                }
                inside_braces = false;
            }
            _ => {}
        }
    }

    if inside_braces {
        return Err(TemplateError::UnmatchedBrace {
            role: TemplateRole::Match,
            input: body.to_string(),
            brace: '{',
        });
    }

    if seg_start != body.len() {
        segments.push(&body[seg_start..]);
    }

    Ok(segments)
}
