//! Defines the endpoint for creating a new transaction.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error,
    app_state::lock_session,
    category::TransactionKind,
    endpoints,
    month::YearMonth,
    session::Session,
    timezone::local_midnight,
    transaction::NewTransaction,
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The session that stores the transactions.
    pub session: Arc<Mutex<Session>>,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            session: state.session.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The form data for creating a transaction.
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    /// Whether the money was earned or spent.
    pub kind: TransactionKind,
    /// How much money was earned or spent.
    pub amount: f64,
    /// The date when the transaction ocurred.
    pub date: Date,
    /// Text detailing the transaction.
    pub description: String,
    /// The name of a category of `kind`.
    pub category: String,
    /// The month the dashboard was showing when the form was submitted.
    #[serde(default)]
    pub month: Option<YearMonth>,
}

/// A route handler for creating a new transaction, redirects to the dashboard on success.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let Some(date) = local_midnight(form.date, &state.local_timezone) else {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        return Error::InvalidTimezoneError(state.local_timezone).into_alert_response();
    };

    let redirect_month = form.month.unwrap_or_else(|| YearMonth::from_date(form.date));
    let new_transaction = NewTransaction {
        description: form.description,
        amount: form.amount,
        kind: form.kind,
        category: form.category,
        date,
    };

    let mut session = match lock_session(&state.session) {
        Ok(session) => session,
        Err(error) => return error.into_alert_response(),
    };

    match session.add_transaction(new_transaction) {
        Ok(_) => (
            HxRedirect(endpoints::dashboard_for_month(&redirect_month.to_string())),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(error @ (Error::InvalidAmount(_) | Error::InvalidCategory { .. })) => {
            tracing::warn!("rejected transaction: {error}");
            error.into_alert_response()
        }
        Err(error) => {
            tracing::error!("could not create transaction: {error}");
            error.into_alert_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode};
    use axum_extra::extract::Form;
    use rusqlite::Connection;
    use time::{Month, UtcOffset, macros::date};

    use crate::{
        category::TransactionKind,
        month::YearMonth,
        session::Session,
        test_utils::assert_hx_redirect,
        transaction::{
            create_endpoint::{CreateTransactionState, TransactionForm},
            create_transaction_endpoint,
        },
    };

    fn get_state(local_timezone: &str) -> CreateTransactionState {
        let session = Session::open(Connection::open_in_memory().unwrap()).unwrap();

        CreateTransactionState {
            session: Arc::new(Mutex::new(session)),
            local_timezone: local_timezone.to_owned(),
        }
    }

    fn expense_form() -> TransactionForm {
        TransactionForm {
            kind: TransactionKind::Expense,
            amount: 12.3,
            date: date!(2024 - 03 - 05),
            description: "Lunch".to_owned(),
            category: "Food".to_owned(),
            month: Some(YearMonth::new(2024, Month::April)),
        }
    }

    #[tokio::test]
    async fn can_create_transaction() {
        let state = get_state("Asia/Kolkata");

        let response = create_transaction_endpoint(State(state.clone()), Form(expense_form())).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, "/dashboard?month=2024-04");

        let session = state.session.lock().unwrap();
        let transactions = session.transactions().as_slice();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].amount, -12.3);
        assert_eq!(transactions[0].description, "Lunch");
        assert_eq!(transactions[0].calendar_date(), date!(2024 - 03 - 05));
        assert_eq!(
            transactions[0].date.offset(),
            UtcOffset::from_hms(5, 30, 0).unwrap()
        );
    }

    #[tokio::test]
    async fn redirects_to_transaction_month_without_selected_month() {
        let state = get_state("Etc/UTC");
        let form = TransactionForm {
            month: None,
            ..expense_form()
        };

        let response = create_transaction_endpoint(State(state), Form(form)).await;

        assert_hx_redirect(&response, "/dashboard?month=2024-03");
    }

    #[tokio::test]
    async fn rejects_category_of_other_kind() {
        let state = get_state("Etc/UTC");
        let form = TransactionForm {
            kind: TransactionKind::Income,
            ..expense_form()
        };

        let response = create_transaction_endpoint(State(state.clone()), Form(form)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.session.lock().unwrap().transactions().is_empty());
    }

    #[tokio::test]
    async fn rejects_zero_amount() {
        let state = get_state("Etc/UTC");
        let form = TransactionForm {
            amount: 0.0,
            ..expense_form()
        };

        let response = create_transaction_endpoint(State(state.clone()), Form(form)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.session.lock().unwrap().transactions().is_empty());
    }

    #[tokio::test]
    async fn invalid_timezone_is_server_error() {
        let state = get_state("Not/AZone");

        let response = create_transaction_endpoint(State(state.clone()), Form(expense_form())).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(state.session.lock().unwrap().transactions().is_empty());
    }

    #[test]
    fn form_decodes_from_url_encoding() {
        let form: TransactionForm = serde_html_form::from_str(
            "month=2024-03&kind=income&description=Pay&amount=2500.50&category=Salary&date=2024-03-01",
        )
        .unwrap();

        assert_eq!(form.kind, TransactionKind::Income);
        assert_eq!(form.amount, 2500.5);
        assert_eq!(form.date, date!(2024 - 03 - 01));
        assert_eq!(form.month, Some(YearMonth::new(2024, Month::March)));
    }
}
