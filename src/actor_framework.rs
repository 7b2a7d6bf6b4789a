use std::fmt::{self, Debug, Display};
use std::sync::Arc;

use tokio::sync::{oneshot, watch};
use tracing::{debug, error, info, warn};

use crate::error::StoreError;
use crate::interaction::{Interaction, Notice};
use crate::remote::{Query, RemoteError, RemoteTable, Row, Table};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// A type cached by a store, backed by one remote table.
pub trait Record: Clone + Send + Sync + Debug + 'static {
    type Id: Copy + Eq + Send + Sync + Display + Debug;

    const TABLE: Table;
    /// Plural noun used in user-facing messages.
    const PLURAL: &'static str;

    fn id(&self) -> Self::Id;

    /// The select issued by `fetch_all`.
    fn listing() -> Query;

    fn from_row(row: Row) -> Result<Self, RemoteError>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Callback run after a successful removal, typically to leave a detail view.
pub struct OnSuccess(Box<dyn FnOnce() + Send>);

impl OnSuccess {
    pub fn new(f: impl FnOnce() + Send + 'static) -> Self {
        Self(Box::new(f))
    }

    pub fn call(self) {
        (self.0)()
    }
}

impl Debug for OnSuccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OnSuccess(..)")
    }
}

// =============================================================================
// 3. SNAPSHOTS
// =============================================================================

/// Read-only view of a store's collection.
#[derive(Debug)]
pub struct Snapshot<T> {
    pub items: Arc<Vec<T>>,
    pub loading: bool,
}

impl<T> Clone for Snapshot<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            loading: self.loading,
        }
    }
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self {
            items: Arc::new(Vec::new()),
            loading: false,
        }
    }
}

impl<T: Record> Snapshot<T> {
    pub fn find(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// 4. THE COLLECTION (owned by a store actor)
// =============================================================================

/// The state a store actor owns: its cached rows, published through a watch
/// channel, plus the collaborators every operation needs.
///
/// Writes always end in a full re-fetch. After a successful mutation
/// resolves, the published snapshot reflects the latest remote state.
pub struct Collection<T: Record> {
    remote: Arc<dyn RemoteTable>,
    interaction: Arc<dyn Interaction>,
    state: watch::Sender<Snapshot<T>>,
}

impl<T: Record> Collection<T> {
    pub fn new(
        remote: Arc<dyn RemoteTable>,
        interaction: Arc<dyn Interaction>,
    ) -> (Self, watch::Receiver<Snapshot<T>>) {
        let (state, receiver) = watch::channel(Snapshot::default());
        let collection = Self {
            remote,
            interaction,
            state,
        };
        (collection, receiver)
    }

    pub fn remote(&self) -> &dyn RemoteTable {
        self.remote.as_ref()
    }

    pub fn find(&self, id: T::Id) -> Option<T> {
        self.state.borrow().find(id).cloned()
    }

    /// Replaces the cache with a fresh select. On failure the user is told
    /// and the previous items stay in place.
    pub async fn fetch_all(&self) -> Result<usize, StoreError> {
        self.state.send_modify(|snapshot| snapshot.loading = true);
        let loaded = self.load().await;
        match loaded {
            Ok(items) => {
                let count = items.len();
                self.state.send_modify(|snapshot| {
                    snapshot.items = Arc::new(items);
                    snapshot.loading = false;
                });
                debug!(table = %T::TABLE, count, "Collection refreshed");
                Ok(count)
            }
            Err(e) => {
                self.state.send_modify(|snapshot| snapshot.loading = false);
                error!(table = %T::TABLE, error = %e, "Fetch failed, keeping cached rows");
                self.notify(Notice::failure(format!("Failed to load {}", T::PLURAL), e.to_string()))
                    .await;
                Err(e.into())
            }
        }
    }

    async fn load(&self) -> Result<Vec<T>, RemoteError> {
        let rows = self.remote.select(T::TABLE, &T::listing()).await?;
        rows.into_iter().map(T::from_row).collect()
    }

    /// Finishes a write: success is announced and followed by a re-fetch,
    /// failure is announced and returned without touching the cache.
    pub async fn commit<R>(
        &self,
        result: Result<R, RemoteError>,
        success: Notice,
        failure_title: &str,
    ) -> Result<R, StoreError> {
        match result {
            Ok(value) => {
                info!(table = %T::TABLE, "{}", success.title);
                self.notify(success).await;
                if let Err(e) = self.fetch_all().await {
                    warn!(table = %T::TABLE, error = %e, "Write succeeded but refresh failed");
                }
                Ok(value)
            }
            Err(e) => {
                error!(table = %T::TABLE, error = %e, "{}", failure_title);
                self.notify(Notice::failure(failure_title, e.to_string())).await;
                Err(e.into())
            }
        }
    }

    pub async fn notify(&self, notice: Notice) {
        self.interaction.notify(notice).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
