//! Errors reported by the mutations and queries of a [`GraphStore`](crate::graph::GraphStore).

use thiserror::Error;

/// The two recoverable failure classes of the network.
///
/// Neither leaves a partial state change behind: every mutation either applies completely or not
/// at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input to a mutation.
    Validation,
    /// A reference to a person or collaboration that doesn't exist.
    NotFound,
}

/// Errors that can occur while mutating or querying the network.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum NetworkError {
    #[error("person name must not be empty")]
    EmptyName,

    #[error("discipline of {0} must not be empty")]
    EmptyDiscipline(String),

    #[error("{0} cannot collaborate with themselves")]
    SelfCollaboration(String),

    #[error("unknown person {0}, both collaborators must exist")]
    UnknownPerson(String),

    #[error("collaboration {0} -- {1} already exists")]
    DuplicateCollaboration(String, String),

    #[error("collaboration {0} -- {1} not found")]
    CollaborationNotFound(String, String),

    #[error("person {0} not found")]
    PersonNotFound(String),

    #[error("person {0} is already removed from the active network")]
    AlreadyRemoved(String),
}

impl NetworkError {
    /// Classifies the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use academe::error::{ErrorKind, NetworkError};
    ///
    /// assert_eq!(NetworkError::EmptyName.kind(), ErrorKind::Validation);
    /// assert_eq!(NetworkError::PersonNotFound("a".into()).kind(), ErrorKind::NotFound);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyName
            | Self::EmptyDiscipline(_)
            | Self::SelfCollaboration(_)
            | Self::UnknownPerson(_)
            | Self::DuplicateCollaboration(..) => ErrorKind::Validation,
            Self::CollaborationNotFound(..) | Self::PersonNotFound(_) | Self::AlreadyRemoved(_) => {
                ErrorKind::NotFound
            }
        }
    }
}

pub type NetworkResult<T> = Result<T, NetworkError>;
