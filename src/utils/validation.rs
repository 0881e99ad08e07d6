use std::borrow::Cow;
use validator::ValidationError;

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// `validator` hook for text fields that must carry something besides
/// whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::Borrowed("Message cannot be empty"));
        return Err(err);
    }
    Ok(())
}
