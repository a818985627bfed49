use thiserror::Error;

/// Failure talking to the explorer's GraphQL service.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("graphql errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    #[error("response carried no data")]
    MissingData,

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// An invocation's arguments did not satisfy the command's declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required argument `{0}`")]
    MissingArgument(String),

    #[error("argument `{name}` must be one of [{}], got `{value}`", .allowed.join(", "))]
    InvalidChoice {
        name: String,
        value: String,
        allowed: Vec<String>,
    },

    #[error("argument `{name}` must be {expected}, got `{value}`")]
    InvalidType {
        name: String,
        value: String,
        expected: &'static str,
    },
}

/// Everything a command can fail with. The dispatcher turns all of these
/// into one generic reply; the detail only reaches the logs.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("upstream query failed: {0}")]
    Upstream(#[from] QueryError),
}

impl CommandError {
    /// Short, stable label used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Upstream(_) => "upstream",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_choice_lists_allowed_values() {
        let err = ValidationError::InvalidChoice {
            name: "network".into(),
            value: "devnet".into(),
            allowed: vec!["mainnet".into(), "testnet".into()],
        };
        assert_eq!(
            err.to_string(),
            "argument `network` must be one of [mainnet, testnet], got `devnet`"
        );
    }

    #[test]
    fn kinds_are_stable() {
        let v: CommandError = ValidationError::MissingArgument("hash".into()).into();
        let u: CommandError = QueryError::MissingData.into();
        assert_eq!(v.kind(), "validation");
        assert_eq!(u.kind(), "upstream");
    }

    #[test]
    fn graphql_errors_are_joined() {
        let err = QueryError::GraphQl(vec!["bad input".into(), "timeout".into()]);
        assert_eq!(err.to_string(), "graphql errors: bad input; timeout");
    }
}
