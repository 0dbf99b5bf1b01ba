use std::collections::HashMap;

use actix_web::{Responder, get, web};
use tera::{Context, Tera};

use crate::reporting::ErrorReporter;
use crate::repository::factory::BackendFactory;
use crate::routes::{error_response, render_template};
use crate::services::ServiceError;
use crate::services::wizard::load_wizard_page;

#[get("/wizard")]
pub async fn show_wizard(
    query: web::Query<HashMap<String, String>>,
    factory: web::Data<BackendFactory>,
    tera: web::Data<Tera>,
    reporter: web::Data<dyn ErrorReporter>,
) -> impl Responder {
    let client = match factory.client() {
        Ok(client) => client,
        Err(err) => {
            return error_response(
                &tera,
                reporter.get_ref(),
                &ServiceError::Configuration(err),
            );
        }
    };

    match load_wizard_page(client.as_ref(), &query).await {
        Ok(page) => {
            let mut context = Context::new();
            context.insert("params", &page.params);
            context.insert("templates", &page.templates);
            context.insert("selected", &page.selected);
            context.insert("current_page", "wizard");
            render_template(&tera, "wizard/index.html", &context)
        }
        Err(err) => error_response(&tera, reporter.get_ref(), &err),
    }
}
