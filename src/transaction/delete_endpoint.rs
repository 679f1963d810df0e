use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use serde::Deserialize;

use crate::{
    AppState, app_state::lock_session, endpoints, month::YearMonth, session::Session,
    transaction::TransactionId,
};

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The session that stores the transactions.
    session: Arc<Mutex<Session>>,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            session: state.session.clone(),
        }
    }
}

/// The month to show once the transaction is gone, formatted as `YYYY-MM`.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteTransactionQuery {
    pub month: Option<String>,
}

/// A route handler for deleting a transaction, redirects back to the dashboard.
///
/// Deleting a transaction that does not exist changes nothing, the dashboard is still shown.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<TransactionId>,
    Query(query): Query<DeleteTransactionQuery>,
) -> Response {
    let mut session = match lock_session(&state.session) {
        Ok(session) => session,
        Err(error) => return error.into_alert_response(),
    };

    match session.delete_transaction(transaction_id) {
        Ok(deleted) => {
            if !deleted {
                tracing::warn!("tried to delete missing transaction {transaction_id}");
            }

            let month = query
                .month
                .and_then(|month| month.parse::<YearMonth>().ok());
            let redirect_url = match month {
                Some(month) => endpoints::dashboard_for_month(&month.to_string()),
                None => endpoints::DASHBOARD_VIEW.to_owned(),
            };

            (HxRedirect(redirect_url), StatusCode::SEE_OTHER).into_response()
        }
        Err(error) => {
            tracing::error!("Could not delete transaction {transaction_id}: {error}");
            error.into_alert_response()
        }
    }
}
