use axum::{
    extract::{rejection::FormRejection, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use models::jersey::JerseyInput;
use serde::Deserialize;
use service::catalog::{AdminForm, Location, Outcome};
use tracing::warn;

use crate::errors::PageError;
use crate::state::AppState;
use crate::views::{self, FormTarget};

#[derive(Debug, Default, Deserialize)]
pub struct AdminQuery {
    pub id: Option<String>,
}

/// Map everything but a rejected submission onto a response.
fn page<T>(outcome: Outcome<T>, render: impl FnOnce(T) -> Response) -> Response {
    match outcome {
        Outcome::Ok(v) => render(v),
        Outcome::Redirect(to) => Redirect::to(&to.path()).into_response(),
        Outcome::NotFound => PageError::NotFound.into_response(),
        Outcome::Forbidden => PageError::Forbidden.into_response(),
        Outcome::Unavailable | Outcome::ValidationFailed { .. } => PageError::Unavailable.into_response(),
    }
}

/// Create/update results: redirect on success, redisplay the form on rejection.
fn submission(outcome: Outcome<()>, target: FormTarget<'_>) -> Response {
    match outcome {
        Outcome::ValidationFailed { errors, input } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(views::admin_form(target, &input, &errors)),
        )
            .into_response(),
        other => page(other, |()| Redirect::to(&Location::List.path()).into_response()),
    }
}

/// A body that cannot be read as a form counts as an empty submission, so the
/// user gets the form back with every field flagged.
fn submitted(form: Result<Form<JerseyInput>, FormRejection>) -> JerseyInput {
    match form {
        Ok(Form(input)) => input,
        Err(rejection) => {
            warn!(error = %rejection, "form_body_rejected");
            JerseyInput::default()
        }
    }
}

/// GET /
pub async fn list(State(state): State<AppState>) -> Response {
    let outcome = state.catalog.list_jerseys().await;
    page(outcome, |all| Html(views::home(&all)).into_response())
}

/// GET /jersey/:id
pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let outcome = state.catalog.get_jersey_detail(&id).await;
    page(outcome, |jersey| Html(views::detail(&jersey)).into_response())
}

/// GET /admin, optionally `?id=` to edit an existing jersey
pub async fn admin_form(State(state): State<AppState>, Query(q): Query<AdminQuery>) -> Response {
    let outcome = state.catalog.show_admin_form(q.id.as_deref()).await;
    page(outcome, |form| match form {
        AdminForm::Blank => {
            Html(views::admin_form(FormTarget::Create, &JerseyInput::default(), &Default::default())).into_response()
        }
        AdminForm::Edit(jersey) => {
            let id = jersey.id.to_string();
            let values = JerseyInput::from(&jersey);
            Html(views::admin_form(FormTarget::Update(&id), &values, &Default::default())).into_response()
        }
    })
}

/// POST /admin
pub async fn create(
    State(state): State<AppState>,
    form: Result<Form<JerseyInput>, FormRejection>,
) -> Response {
    let outcome = state.catalog.create_jersey(submitted(form)).await;
    submission(outcome, FormTarget::Create)
}

/// PUT /admin/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    form: Result<Form<JerseyInput>, FormRejection>,
) -> Response {
    let outcome = state.catalog.update_jersey(&id, submitted(form)).await;
    submission(outcome, FormTarget::Update(&id))
}

/// DELETE /admin/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let outcome = state.catalog.delete_jersey(&id).await;
    page(outcome, |()| Redirect::to(&Location::List.path()).into_response())
}
