use thiserror::Error;

/// Errors reported by member name and annotation resolution.
///
/// A member or annotation that does not exist is not an error: lookups
/// return `Ok(None)` for that.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    #[error("accessor expression `{expression}` does not reference a member")]
    MalformedExpression { expression: String },

    #[error("member `{class}.{member}` carries {count} `{kind}` annotations, expected at most one")]
    AmbiguousAnnotation {
        class: &'static str,
        member: &'static str,
        kind: &'static str,
        count: usize,
    },

    #[error("member name `{member}` matches more than one member of `{class}`")]
    AmbiguousMember { class: &'static str, member: String },

    #[error("class `{class}` declares {count} companion types")]
    AmbiguousCompanion { class: &'static str, count: usize },
}
