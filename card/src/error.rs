use std::result;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardError {
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to serialize YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}: {1}")]
    WithContext(String, Box<CardError>),
}

impl CardError {
    /// Add context to an error
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        CardError::WithContext(context.into(), Box::new(self))
    }

    /// Get a user-friendly message for command line display
    pub fn user_message(&self) -> String {
        match self {
            CardError::Json(e) => format!("Could not encode profile as JSON: {}", e),
            CardError::Yaml(e) => format!("Could not encode profile as YAML: {}", e),
            CardError::WithContext(ctx, err) => format!("{}: {}", ctx, err.user_message()),
        }
    }
}

pub type Result<T> = result::Result<T, CardError>;

// Helper trait for adding context to results
pub trait ResultExt<T, E> {
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T, E> for result::Result<T, E>
where
    E: Into<CardError>,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| {
            let card_err: CardError = err.into();
            card_err.with_context(context())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_is_prefixed_to_user_message() {
        let err: Result<serde_json::Value> =
            serde_json::from_str("{").with_context(|| "Rendering profile as JSON");
        let message = err.unwrap_err().user_message();

        assert!(message.starts_with("Rendering profile as JSON: Could not encode profile as JSON: "));
    }

    #[test]
    fn test_yaml_errors_convert() {
        let err: CardError = serde_yaml::from_str::<serde_yaml::Mapping>("- a\n- b")
            .unwrap_err()
            .into();
        assert!(err.user_message().starts_with("Could not encode profile as YAML: "));
    }
}
