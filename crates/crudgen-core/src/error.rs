/// Result alias used by descriptor construction.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while building descriptors.
///
/// These are the upstream checks the code generator relies on. Once a
/// descriptor exists, generation itself cannot fail on its contents.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("entity `{entity}` has no primary key field")]
    MissingPrimaryKey { entity: String },

    #[error("entity `{entity}` declares field `{field}` more than once")]
    DuplicateField { entity: String, field: String },

    #[error("primary key `{field}` of entity `{entity}` is also declared as a regular field")]
    PrimaryKeyInFields { entity: String, field: String },

    #[error("entity `{entity}` does not declare accessor `{accessor}` for field `{field}`")]
    MissingAccessor {
        entity: String,
        field: String,
        accessor: String,
    },

    #[error("primary key of entity `{entity}` has type `{ty}`; it must be a class or array type")]
    InvalidPrimaryKeyType { entity: String, ty: String },

    #[error("generated class `{0}` must be a top-level class")]
    NestedClassName(String),

    #[error("superclass `{0}` is not a class type")]
    InvalidSuperclass(String),

    #[error("entity `{entity}` has an empty table name")]
    EmptyTableName { entity: String },

    #[error("`{0}` is not a valid Java identifier")]
    InvalidIdentifier(String),

    #[error("invalid type name `{input}`: {reason}")]
    InvalidTypeName { input: String, reason: &'static str },

    #[error("unknown driver `{0}`; expected `postgresql` or `mysql`")]
    UnknownDriver(String),
}
