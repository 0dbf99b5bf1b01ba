//! HTTP route handlers and shared response helpers.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use tera::{Context, Tera};

use crate::reporting::ErrorReporter;
use crate::services::ServiceError;

pub mod api;
pub mod diagnostics;
pub mod wizard;

/// Renders a Tera template to an HTML response.
pub fn render_template(tera: &Tera, name: &str, context: &Context) -> HttpResponse {
    match tera.render(name, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Template rendering error: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Maps a service failure to the error view.
///
/// Validation failures are recovered locally as 400s carrying the offending
/// field; everything else is forwarded to the error reporter before the view
/// renders.
pub fn error_response(
    tera: &Tera,
    reporter: &dyn ErrorReporter,
    error: &ServiceError,
) -> HttpResponse {
    let mut field: Option<&str> = None;
    let mut event_id: Option<String> = None;
    let (status, detail) = match error {
        ServiceError::Validation(validation) => {
            field = Some(validation.field);
            (StatusCode::BAD_REQUEST, validation.to_string())
        }
        other => {
            event_id = Some(reporter.report(other).to_string());
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong on our side.".to_string(),
            )
        }
    };

    let mut context = Context::new();
    context.insert("field", &field);
    context.insert("event_id", &event_id);
    context.insert("detail", &detail);
    context.insert("status", &status.as_u16());

    match tera.render("main/error.html", &context) {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Template rendering error: {err}");
            HttpResponse::build(status).finish()
        }
    }
}
