use thiserror::Error;

use crate::remote::RemoteError;

/// Errors returned by store operations.
///
/// Remote failures have already been shown to the user by the time a caller
/// sees them.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Remote(#[from] RemoteError),
    #[error("store actor closed")]
    ActorClosed,
    #[error("store actor dropped the request")]
    ActorDropped,
}

/// Input rejected by the order and price forms before reaching a store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("customer name is required")]
    EmptyCustomerName,
    #[error("weight must be a number greater than 0")]
    InvalidWeight,
    #[error("select at least one item for a by-item order")]
    NoItemsSelected,
    #[error("unknown catalog item: {0}")]
    UnknownItem(String),
    #[error("prices must be whole non-negative numbers")]
    InvalidPrice,
}
