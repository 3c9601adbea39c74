#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventError {
    #[error("unknown event kind `{0}`")]
    UnknownKind(String),

    #[error("missing field `{field}` on {kind} event")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },

    #[error("invalid date `{0}`")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, EventError>;
