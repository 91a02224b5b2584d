// File: src/routes.rs
// Purpose: HTTP handlers for the registration page and the JSON validation endpoint

use crate::render;
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use regform::{FormRecord, Registration, RegistrationForm, Resolution, Resolver, SubmitOutcome};
use std::collections::HashMap;
use tracing::info;

/// GET / - empty form
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let form = RegistrationForm::shared(state.schema.clone());
    Html(render::page(&state.config.form, &form, None).into_string())
}

/// POST / - validate a submitted form and re-render it
pub async fn submit(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    let mut form = RegistrationForm::shared(state.schema.clone());
    form.fill(&state.schema.record_from_inputs(fields));

    match form.handle_submit(log_registration) {
        SubmitOutcome::Submitted => Html(
            render::page(
                &state.config.form,
                &form,
                Some(state.config.form.success_message.as_str()),
            )
            .into_string(),
        )
        .into_response(),
        SubmitOutcome::Rejected(_) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(render::page(&state.config.form, &form, None).into_string()),
        )
            .into_response(),
    }
}

// The password never reaches the log
fn log_registration(registration: Registration) {
    info!(
        full_name = %registration.full_name,
        email = %registration.email,
        age = registration.age,
        "registration submitted"
    );
}

/// POST /validate - resolver output for on-change validation
pub async fn validate(
    State(state): State<AppState>,
    Json(record): Json<FormRecord>,
) -> Json<Resolution<Registration>> {
    let resolver: Resolver<Registration> = Resolver::shared(state.schema.clone());
    Json(resolver.resolve(&record))
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_registration_log_omits_password() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            log_registration(Registration {
                full_name: "Yuri Mutti".into(),
                email: "yuri@mutti.com".into(),
                password: "Password@123".into(),
                confirm_password: "Password@123".into(),
                age: 25.0,
            })
        });

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("registration submitted"), "logs were: {output}");
        assert!(output.contains("Yuri Mutti"), "logs were: {output}");
        assert!(output.contains("yuri@mutti.com"), "logs were: {output}");
        assert!(!output.contains("Password@123"), "logs were: {output}");
    }
}
