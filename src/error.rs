use thiserror::Error;

pub type SequenceResult<T> = Result<T, SequenceError>;

/// Errors reported by the validating variants of the combinators.
///
/// The default combinators never produce these: precondition violations there are
/// resolved by the plain linear-scan rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("group key {key} reappeared in group {group}; input is not ordered by key")]
    UnorderedGroupKey { key: String, group: usize },
}

impl SequenceError {
    pub fn unordered_group_key(key: &impl std::fmt::Debug, group: usize) -> Self {
        SequenceError::UnorderedGroupKey {
            key: format!("{key:?}"),
            group,
        }
    }
}
