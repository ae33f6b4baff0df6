//! Seam between the command layer and the status service.

use crate::error::Result;
use crate::models::StatusOutcome;
use async_trait::async_trait;
use vcmp_common::ServerQuery;

/// Looks up the live state of a VCMP server.
///
/// [`crate::StatusClient`] is the production implementation; tests use the
/// generated `MockStatusApi` (feature `testing`).
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait StatusApi: Send + Sync {
    /// Performs a single lookup. No retries and no caching.
    async fn fetch(&self, query: &ServerQuery) -> Result<StatusOutcome>;
}
