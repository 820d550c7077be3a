use crate::auth::{self, AuthFlow};
use crate::errors::AppError;
use crate::models::{
    AuthErrorKind, AuthOutcome, Criteria, CriteriaForm, HealthResponse, LoginRequest,
    SignupRequest,
};
use crate::session::{EXPORT_ERROR_TEXT, NOTHING_TO_EXPORT, ResultsSnapshot, Settled};
use crate::state::AppState;
use crate::ui::{render_home, render_login, render_recommend, render_signup};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use tracing::{error, info, warn};

pub const PDF_FILENAME: &str = "schemes.pdf";

pub async fn index() -> Html<String> {
    Html(render_home())
}

pub async fn login_page() -> Html<String> {
    Html(render_login())
}

pub async fn signup_page() -> Html<String> {
    Html(render_signup())
}

pub async fn recommend_page(State(state): State<AppState>) -> Html<String> {
    let view = state.view.lock().await;
    Html(render_recommend(&view.snapshot()))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn get_results(State(state): State<AppState>) -> Json<ResultsSnapshot> {
    let view = state.view.lock().await;
    Json(view.snapshot())
}

pub async fn recommend(
    State(state): State<AppState>,
    Json(form): Json<CriteriaForm>,
) -> Json<ResultsSnapshot> {
    let criteria = Criteria::from_form(&form);
    let ticket = state.view.lock().await.begin_submission();
    info!(
        generation = ticket.generation(),
        tags = criteria.tags.len(),
        "submitting recommendation request"
    );

    let outcome = state.client.recommend(&criteria).await;

    let mut view = state.view.lock().await;
    let settled = match outcome {
        Ok(set) => {
            info!(generation = ticket.generation(), count = set.count, "recommendations received");
            view.apply_results(ticket, set)
        }
        Err(err) => {
            error!(generation = ticket.generation(), "recommendation request failed: {err}");
            view.apply_failure(ticket)
        }
    };
    if settled == Settled::Stale {
        warn!(generation = ticket.generation(), "discarding stale recommendation response");
    }

    Json(view.snapshot())
}

pub async fn download_pdf(State(state): State<AppState>) -> Result<Response, AppError> {
    let export = state
        .view
        .lock()
        .await
        .export_schemes()
        .map_err(|_| AppError::conflict(NOTHING_TO_EXPORT))?;
    let generation = export.ticket.generation();

    match state.client.download_pdf(&export.schemes).await {
        Ok(bytes) => {
            state.view.lock().await.clear_export_failure(export.ticket);
            info!(
                generation,
                schemes = export.schemes.len(),
                bytes = bytes.len(),
                "pdf export ready"
            );
            let disposition = format!("attachment; filename=\"{PDF_FILENAME}\"");
            Ok((
                [
                    (header::CONTENT_TYPE, "application/pdf".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                bytes,
            )
                .into_response())
        }
        Err(err) => {
            error!(generation, "pdf export failed: {err}");
            if state.view.lock().await.record_export_failure(export.ticket) == Settled::Stale {
                warn!(generation, "export failure belongs to replaced results");
            }
            Err(AppError::bad_gateway(EXPORT_ERROR_TEXT))
        }
    }
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> (StatusCode, Json<AuthOutcome>) {
    let outcome = match auth::prepare_login(&payload) {
        Some(request) => auth::settle(AuthFlow::Login, state.client.login(&request).await),
        None => auth::missing_fields(AuthFlow::Login),
    };
    with_status(outcome)
}

pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> (StatusCode, Json<AuthOutcome>) {
    let outcome = match auth::prepare_signup(&payload) {
        Some(request) => auth::settle(AuthFlow::Signup, state.client.signup(&request).await),
        None => auth::missing_fields(AuthFlow::Signup),
    };
    with_status(outcome)
}

fn with_status(outcome: AuthOutcome) -> (StatusCode, Json<AuthOutcome>) {
    let status = match outcome.error {
        Some(AuthErrorKind::Validation) => StatusCode::BAD_REQUEST,
        Some(AuthErrorKind::Network | AuthErrorKind::Server) => StatusCode::BAD_GATEWAY,
        Some(AuthErrorKind::Rejected) | None => StatusCode::OK,
    };
    (status, Json(outcome))
}
