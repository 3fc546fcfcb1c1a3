//! Donation ledger request.

use crate::net::backend::{ApiError, Backend};
use crate::net::types::{Donation, Page};

/// `GET /donation/all?offset=...&limit=...`.
///
/// The envelope's `meta.total` drives the pager; `offset`/`limit` are in
/// rows, not pages, so the buffered-pagination window maps straight onto
/// them.
pub async fn fetch_donations(
    backend: &Backend,
    offset: usize,
    limit: usize,
) -> Result<Page<Donation>, ApiError> {
    let query = [
        ("offset", offset.to_string()),
        ("limit", limit.to_string()),
    ];
    backend.get_json("/donation/all", &query).await
}
