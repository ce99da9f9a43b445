//! Email-to-record resolution.

use tracing::{debug, warn};

use carte_shared::CardRecord;

use crate::client::ListStoreClient;
use crate::error::Result;

impl ListStoreClient {
    /// Resolve an email address to its business-card record.
    ///
    /// Server-side equality filters are case-sensitive, so a miss on the
    /// exact query falls back to fetching the whole (small) list and
    /// scanning it with case-insensitive equality. The first match wins in
    /// both phases.
    ///
    /// `Ok(None)` means no record exists under any casing. That is a UI
    /// state, not an error. Transport and parse failures propagate;
    /// nothing is retried.
    pub async fn resolve_by_email(&self, email: &str) -> Result<Option<CardRecord>> {
        let exact = self.query_by_email(email).await?;
        if let Some(record) = exact.into_iter().next() {
            return Ok(Some(record));
        }

        debug!(email, "no exact match, scanning for a case-insensitive match");

        let all = self.fetch_all().await?;
        if all.len() >= self.config().fallback_scan_limit {
            warn!(
                limit = self.config().fallback_scan_limit,
                "fallback scan hit the item cap, lookup may be incomplete"
            );
        }

        Ok(all
            .into_iter()
            .find(|record| record.email.eq_ignore_ascii_case(email)))
    }
}
