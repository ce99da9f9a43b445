use thiserror::Error;

use carte_store::StoreError;

/// Errors surfaced by the card service.
///
/// The controller converts these to user-visible text at its boundary;
/// they never escape the component. Normalization failures are absent by
/// design: the service recovers them internally by falling back to the
/// unmodified original bytes.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("List store error: {0}")]
    Store(#[from] StoreError),

    /// An operation that needs a loaded record ran without one.
    #[error("No record loaded")]
    NoRecord,
}
