//! Account listing and moderation requests.

use serde::Serialize;

use crate::net::backend::{ApiError, Backend};
use crate::net::types::{Account, AccountStatus, AccountType};

/// `GET /account?type=...[&status=...]`, the listing behind the moderation
/// tabs and the dashboard counters.
pub async fn fetch_accounts(
    backend: &Backend,
    account_type: AccountType,
    status: Option<AccountStatus>,
) -> Result<Vec<Account>, ApiError> {
    let mut query = vec![("type", account_type.as_str().to_owned())];
    if let Some(status) = status {
        query.push(("status", status.as_str().to_owned()));
    }
    backend.get_json("/account", &query).await
}

#[derive(Serialize)]
struct StatusBody {
    status: AccountStatus,
}

/// `PUT /account/:id` with the requested target status. The server owns
/// the transition rules; this just submits one of the allowed targets.
pub async fn update_account_status(
    backend: &Backend,
    account_id: i64,
    status: AccountStatus,
) -> Result<Account, ApiError> {
    backend
        .put_json(&format!("/account/{account_id}"), &StatusBody { status })
        .await
}
