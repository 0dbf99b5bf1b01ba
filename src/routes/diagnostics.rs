//! Diagnostic endpoints: the monitoring tunnel acknowledgment and a
//! deliberate failure used to exercise the reporting path end to end.

use actix_web::{HttpResponse, Responder, get, web};
use chrono::Utc;
use tera::Tera;

use crate::dto::api::TunnelAck;
use crate::reporting::ErrorReporter;
use crate::routes::error_response;
use crate::services::ServiceError;

/// Accepts forwarded monitoring payloads; acknowledges unconditionally.
#[get("/monitoring/tunnel")]
pub async fn tunnel() -> impl Responder {
    HttpResponse::Ok().json(TunnelAck {
        ok: true,
        received_at: Utc::now(),
    })
}

/// Fails on purpose so the reporting pipeline can be verified in a deployed
/// instance.
#[get("/debug/error")]
pub async fn debug_error(
    tera: web::Data<Tera>,
    reporter: web::Data<dyn ErrorReporter>,
) -> impl Responder {
    let error = ServiceError::Internal("deliberate diagnostic failure".to_string());
    error_response(&tera, reporter.get_ref(), &error)
}
