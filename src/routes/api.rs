use actix_web::{HttpResponse, Responder, get, web};
use log::error;
use serde::Deserialize;

use crate::domain::wizard::SortOrder;
use crate::dto::api::TemplatesQuery;
use crate::repository::factory::BackendFactory;
use crate::services::api::list_templates;

#[derive(Debug, Deserialize)]
struct TemplatesQueryParams {
    search: Option<String>,
    sort: Option<SortOrder>,
}

impl From<TemplatesQueryParams> for TemplatesQuery {
    fn from(params: TemplatesQueryParams) -> Self {
        Self {
            search: params.search,
            sort: params.sort,
        }
    }
}

#[get("/v1/templates")]
pub async fn api_v1_templates(
    params: web::Query<TemplatesQueryParams>,
    factory: web::Data<BackendFactory>,
) -> impl Responder {
    let client = match factory.client() {
        Ok(client) => client,
        Err(err) => {
            error!("Backend is not configured: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    match list_templates(client.as_ref(), params.into_inner().into()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => {
            error!("Failed to list templates: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
