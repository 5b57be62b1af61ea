use crate::charset::{is_variable_name_byte, is_variable_name_start};
use crate::errors::{TemplateError, TemplateResult};

/// Checks a variable name against `[a-zA-Z][a-zA-Z0-9_]*` and the length cap.
///
/// `input` is the full template, reported only when the name is empty.
/// Checks run in order: empty, character set, length.
pub fn validate_variable_name(name: &str, input: &str, max_len: usize) -> TemplateResult<()> {
    let bytes = name.as_bytes();

    let Some((&first, rest)) = bytes.split_first() else {
        return Err(TemplateError::VariableNameEmpty {
            input: input.to_string(),
        });
    };

    if !is_variable_name_start(first) || !rest.iter().all(|&b| is_variable_name_byte(b)) {
        return Err(TemplateError::VariableNameInvalid {
            name: name.to_string(),
        });
    }

    if bytes.len() > max_len {
        return Err(TemplateError::VariableNameTooLong {
            name: name.to_string(),
            max: max_len,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DEFAULT_MAX_VARIABLE_NAME_LENGTH as MAX;

    #[test]
    fn accepts_letters_digits_and_underscores() {
        for name in ["a", "VERSION", "verSION", "v1", "content_id", "a234567890123456"] {
            validate_variable_name(name, "/", MAX).expect("name should be valid");
        }
    }

    #[test]
    fn empty_name_reports_full_input() {
        match validate_variable_name("", "/{=*}", MAX).unwrap_err() {
            TemplateError::VariableNameEmpty { input } => assert_eq!(input, "/{=*}"),
            other => panic!("expected VariableNameEmpty, got {other:?}"),
        }
    }

    #[test]
    fn rejects_bad_characters() {
        for name in ["2bOrNot2b", "a-b", "version.major", "a/*", "*", "_a"] {
            match validate_variable_name(name, "/", MAX).unwrap_err() {
                TemplateError::VariableNameInvalid { name: reported } => {
                    assert_eq!(reported, name)
                }
                other => panic!("expected VariableNameInvalid for {name}, got {other:?}"),
            }
        }
    }

    #[test]
    fn character_check_precedes_length_check() {
        let err = validate_variable_name("a-very-long-variable-name", "/", MAX).unwrap_err();
        assert!(matches!(err, TemplateError::VariableNameInvalid { .. }));
    }

    #[test]
    fn rejects_names_over_the_cap() {
        match validate_variable_name("nowIsTheWinterOfOurDiscontent", "/", MAX).unwrap_err() {
            TemplateError::VariableNameTooLong { max, .. } => assert_eq!(max, 16),
            other => panic!("expected VariableNameTooLong, got {other:?}"),
        }
    }
}
