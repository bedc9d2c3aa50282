use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use database::{consts::consts::PersonId, persistence::PersonStore};

use crate::{
    error::ApiError,
    schema::{NewPersonRequest, PersonResponse, UpdatePersonRequest},
};

type Store = web::Data<dyn PersonStore>;

/// Health check
#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Hello world")
}

#[get("/people")]
async fn list_people(store: Store) -> Result<HttpResponse, ApiError> {
    let people: Vec<PersonResponse> = store
        .list()
        .await?
        .into_iter()
        .map(PersonResponse::from_person)
        .collect();

    Ok(HttpResponse::Ok().json(people))
}

#[get("/people/{id}")]
async fn show_person(store: Store, path: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let id: PersonId = path.parse()?;

    let person = store.get(&id).await?.ok_or(ApiError::NotFound(id))?;

    Ok(HttpResponse::Ok().json(PersonResponse::from_person(person)))
}

#[post("/people")]
async fn create_person(
    store: Store,
    body: web::Json<NewPersonRequest>,
) -> Result<HttpResponse, ApiError> {
    let person = store.add(body.into_inner().to_new_person()).await?;

    Ok(HttpResponse::Ok().json(PersonResponse::from_person(person)))
}

#[put("/people/{id}")]
async fn update_person(
    store: Store,
    path: web::Path<String>,
    body: web::Json<UpdatePersonRequest>,
) -> Result<HttpResponse, ApiError> {
    let id: PersonId = path.parse()?;

    let person = store
        .update(&id, body.into_inner().to_update_person_data())
        .await?
        .ok_or(ApiError::NotFound(id))?;

    Ok(HttpResponse::Ok().json(PersonResponse::from_person(person)))
}

#[delete("/people/{id}")]
async fn delete_person(store: Store, path: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let id: PersonId = path.parse()?;

    let person = store.remove(&id).await?.ok_or(ApiError::NotFound(id))?;

    Ok(HttpResponse::Ok().json(PersonResponse::from_person(person)))
}

/// Malformed bodies are answered with the same error shape as every other failure
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::ValidationFailed(err.to_string()).into())
}

/// Registers every route, shared by the server and the tests
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(index)
        .service(list_people)
        .service(show_person)
        .service(create_person)
        .service(update_person)
        .service(delete_person);
}
