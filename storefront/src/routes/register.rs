use std::sync::Arc;

use axum::{
    Form, Json, debug_handler,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::WithRejection;
use common::registration::{Registration, RegistrationForm, RegistrationPayload};
use metrics::{Metrics, put_metric};
use serde_json::json;
use tracing::debug;

use crate::{
    pages::{RegisterPage, render_page},
    routes::error_message_erasure::ApiError,
    server::ServerState,
};

const AFTER_REGISTRATION: &str = "/products";

pub(crate) async fn register_page_handler(State(state): State<Arc<ServerState>>) -> Response {
    render_page(StatusCode::OK, &RegisterPage::new(&state.shop_name))
}

#[debug_handler]
pub(crate) async fn register_form_handler(
    State(state): State<Arc<ServerState>>,
    WithRejection(Form(form), _): WithRejection<Form<RegistrationForm>, ApiError>,
) -> Response {
    let registration = match form.validate() {
        Ok(registration) => registration,
        Err(errors) => {
            debug!("Rejected registration form: {errors:?}");
            put_metric!(Metrics::RegistrationRejected, 1);

            let page = RegisterPage::new(&state.shop_name)
                .with_error(form.name, errors.name.unwrap_or_default());

            return render_page(StatusCode::UNPROCESSABLE_ENTITY, &page);
        }
    };

    state.registrations.insert(registration).await;
    put_metric!(Metrics::RegistrationAccepted, 1);

    Redirect::to(AFTER_REGISTRATION).into_response()
}

#[debug_handler]
pub(crate) async fn api_register_handler(
    State(state): State<Arc<ServerState>>,
    WithRejection(Json(payload), _): WithRejection<Json<RegistrationPayload>, ApiError>,
) -> impl IntoResponse {
    state
        .registrations
        .insert(Registration::from(payload))
        .await;
    put_metric!(Metrics::RegistrationAccepted, 1);

    (
        StatusCode::CREATED,
        Json(json!({
            "status": StatusCode::CREATED.as_u16(),
            "success": true,
            "message": "Registration received",
        })),
    )
}
