//! Categories page and the endpoint for adding a custom category.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use maud::{Markup, html};

use crate::{
    AppState, Error,
    app_state::lock_session,
    category::{CategoryRegistry, TransactionKind, domain::CategoryFormData},
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, CATEGORY_BADGE_STYLE, FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE,
        FORM_RADIO_INPUT_STYLE, FORM_RADIO_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        PAGE_CONTAINER_STYLE, base,
    },
    navigation::NavBar,
    session::Session,
};

/// The state needed for listing and creating categories.
#[derive(Debug, Clone)]
pub struct CategoriesState {
    pub session: Arc<Mutex<Session>>,
}

impl FromRef<AppState> for CategoriesState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            session: state.session.clone(),
        }
    }
}

/// Render the page listing every category with the form for adding one.
pub async fn get_categories_page(State(state): State<CategoriesState>) -> Result<Response, Error> {
    let session = lock_session(&state.session)?;

    Ok(categories_view(session.categories()).into_response())
}

/// Handle category creation form submission.
///
/// Blank and duplicate names re-render the form with the error message.
pub async fn create_category_endpoint(
    State(state): State<CategoriesState>,
    Form(form): Form<CategoryFormData>,
) -> Response {
    let mut session = match lock_session(&state.session) {
        Ok(session) => session,
        Err(error) => return error.into_alert_response(),
    };

    match session.add_category(form.kind, &form.name) {
        Ok(_) => (
            HxRedirect(endpoints::CATEGORIES_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(error @ (Error::EmptyCategoryName | Error::DuplicateCategory { .. })) => {
            new_category_form_view(form.kind, &format!("Error: {error}")).into_response()
        }
        Err(error) => {
            tracing::error!("An unexpected error occurred while creating a category: {error}");

            error.into_alert_response()
        }
    }
}

fn categories_view(registry: &CategoryRegistry) -> Markup {
    let nav_bar = NavBar::new(endpoints::CATEGORIES_VIEW).into_html();
    let form = new_category_form_view(TransactionKind::Expense, "");

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-lg grid grid-cols-1 lg:grid-cols-3 gap-8"
            {
                @for kind in [TransactionKind::Income, TransactionKind::Expense] {
                    (category_list_view(registry, kind))
                }

                section class="space-y-4"
                {
                    h2 class="text-xl font-bold" { "Add Category" }

                    div id="category-form-container" { (form) }
                }
            }
        }
    );

    base("Categories", &[], &content)
}

fn category_list_view(registry: &CategoryRegistry, kind: TransactionKind) -> Markup {
    let (defaults, custom) = registry.categories(kind);
    let heading = match kind {
        TransactionKind::Income => "Income Categories",
        TransactionKind::Expense => "Expense Categories",
    };

    html! {
        section id={ (kind) "-categories" } class="space-y-4"
        {
            h2 class="text-xl font-bold" { (heading) }

            div
            {
                h3 class="mb-2 text-sm font-semibold text-gray-500 dark:text-gray-400" { "Default" }

                ul class="flex flex-wrap gap-2"
                {
                    @for name in defaults {
                        li class=(CATEGORY_BADGE_STYLE) { (name) }
                    }
                }
            }

            div
            {
                h3 class="mb-2 text-sm font-semibold text-gray-500 dark:text-gray-400" { "Custom" }

                @if custom.is_empty() {
                    p class="text-sm text-gray-500 dark:text-gray-400" { "No custom categories yet." }
                } @else {
                    ul class="flex flex-wrap gap-2"
                    {
                        @for name in custom {
                            li class=(CATEGORY_BADGE_STYLE) { (name) }
                        }
                    }
                }
            }
        }
    }
}

fn new_category_form_view(kind: TransactionKind, error_message: &str) -> Markup {
    let create_category_endpoint = endpoints::CATEGORIES_API;
    let is_expense = kind == TransactionKind::Expense;

    html! {
        form
            hx-post=(create_category_endpoint)
            hx-target="#category-form-container"
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            fieldset class="space-y-2"
            {
                legend class=(FORM_LABEL_STYLE) { "Category type" }

                div class=(FORM_RADIO_GROUP_STYLE)
                {
                    div class="flex items-center gap-3"
                    {
                        input
                            name="kind"
                            id="category-kind-expense"
                            type="radio"
                            value="expense"
                            checked[is_expense]
                            required
                            class=(FORM_RADIO_INPUT_STYLE);

                        label for="category-kind-expense" class=(FORM_RADIO_LABEL_STYLE)
                        {
                            "Expense"
                        }
                    }

                    div class="flex items-center gap-3"
                    {
                        input
                            name="kind"
                            id="category-kind-income"
                            type="radio"
                            value="income"
                            checked[!is_expense]
                            required
                            class=(FORM_RADIO_INPUT_STYLE);

                        label for="category-kind-income" class=(FORM_RADIO_LABEL_STYLE)
                        {
                            "Income"
                        }
                    }
                }
            }

            div
            {
                label
                    for="name"
                    class=(FORM_LABEL_STYLE)
                {
                    "Category Name"
                }

                input
                    id="name"
                    type="text"
                    name="name"
                    placeholder="Category Name"
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            @if !error_message.is_empty() {
                p class="text-red-600 dark:text-red-400"
                {
                    (error_message)
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Category" }
        }
    }
}
