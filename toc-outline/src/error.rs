use thiserror::Error;

/// Errors surfaced by outline queries.
///
/// Building an outline never fails; only lookups against a built tree can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutlineError {
    /// No node with the given id exists in the tree.
    #[error("no outline entry with id '{0}'")]
    NotFound(String),
}
