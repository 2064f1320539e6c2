use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        CoreError::Validation(crate::game::describe_errors(&errors))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use validator::Validate;

    use super::*;
    use crate::game::validate_name;

    #[derive(Validate)]
    struct Named {
        #[validate(custom(function = "validate_name"))]
        name: String,
    }

    #[test]
    fn validation_errors_become_validation_variant() {
        let errors = Named {
            name: String::new(),
        }
        .validate()
        .unwrap_err();

        let err = CoreError::from(errors);
        assert_matches!(err, CoreError::Validation(ref msg) if msg.starts_with("name: "));
    }
}
