use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::{self, Condition},
    web::Data,
    App,
};
use database::persistence::PersonStore;

use crate::routes;

/// morgan "dev" style: request line, status, latency, size
const HTTP_LOG_FORMAT: &str = "%r %s %D ms - %b";

/// Builds the full application: routes, the shared store, CORS for any origin and optional request
/// logging. Each HTTP worker calls this once.
pub fn build_app(
    store: Arc<dyn PersonStore>,
    log_http: bool,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(Data::from(store))
        .configure(routes::configure)
        .wrap(Cors::permissive())
        .wrap(Condition::new(
            log_http,
            middleware::Logger::new(HTTP_LOG_FORMAT),
        ))
}
