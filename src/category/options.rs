//! The category `<option>` list used by the transaction form.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Error,
    app_state::lock_session,
    category::{CategoryRegistry, TransactionKind},
    session::Session,
};

/// The state needed to list the categories of a kind.
#[derive(Debug, Clone)]
pub struct CategoryOptionsState {
    pub session: Arc<Mutex<Session>>,
}

impl FromRef<AppState> for CategoryOptionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            session: state.session.clone(),
        }
    }
}

/// The query string for [get_category_options].
#[derive(Debug, Deserialize)]
pub struct CategoryOptionsQuery {
    pub kind: TransactionKind,
}

/// Render the category options for the kind selected in the transaction form.
pub async fn get_category_options(
    State(state): State<CategoryOptionsState>,
    Query(query): Query<CategoryOptionsQuery>,
) -> Result<Response, Error> {
    let session = lock_session(&state.session)?;

    Ok(category_options(session.categories(), query.kind).into_response())
}

/// The default and custom categories for `kind`, grouped under separate headings.
///
/// The custom group is left out when the user has not added any categories.
pub fn category_options(registry: &CategoryRegistry, kind: TransactionKind) -> Markup {
    let (defaults, custom) = registry.categories(kind);

    html! {
        optgroup label="Default Categories"
        {
            @for name in defaults {
                option value=(name) { (name) }
            }
        }

        @if !custom.is_empty() {
            optgroup label="Custom Categories"
            {
                @for name in custom {
                    option value=(name) { (name) }
                }
            }
        }
    }
}
