use super::*;
use minder_auth::Auth;
use minder_core::ID;
use minder_pg::StoreError;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use std::sync::Arc;
use tokio_postgres::Client;

/// Maps repository failures onto responses. A miss is a 404 whether the
/// row is absent or owned by someone else.
fn failure(error: TodoError) -> HttpResponse {
    match error {
        TodoError::Missing => HttpResponse::NotFound().body("todo not found"),
        TodoError::Store(StoreError::Timeout) => {
            log::warn!("todo operation timed out");
            HttpResponse::ServiceUnavailable().body("store timeout")
        }
        TodoError::Store(e) => {
            log::error!("todo operation failed: {}", e);
            HttpResponse::InternalServerError().body("store unavailable")
        }
    }
}

pub async fn create(
    db: web::Data<Arc<Client>>,
    auth: Auth,
    req: web::Json<CreateTodoRequest>,
) -> impl Responder {
    let title = req.title();
    if title.is_empty() {
        return HttpResponse::BadRequest().body("title must not be empty");
    }
    match db.create(auth.subject(), title, req.completed).await {
        Ok(todo) => HttpResponse::Created().json(TodoInfo::from(&todo)),
        Err(e) => failure(TodoError::from(e)),
    }
}

pub async fn list(db: web::Data<Arc<Client>>, auth: Auth) -> impl Responder {
    match db.list(auth.subject()).await {
        Ok(todos) => {
            HttpResponse::Ok().json(todos.iter().map(TodoInfo::from).collect::<Vec<_>>())
        }
        Err(e) => failure(TodoError::from(e)),
    }
}

pub async fn get(
    db: web::Data<Arc<Client>>,
    auth: Auth,
    path: web::Path<uuid::Uuid>,
) -> impl Responder {
    match db.get(ID::from(path.into_inner()), auth.subject()).await {
        Ok(todo) => HttpResponse::Ok().json(TodoInfo::from(&todo)),
        Err(e) => failure(e),
    }
}

pub async fn update(
    db: web::Data<Arc<Client>>,
    auth: Auth,
    path: web::Path<uuid::Uuid>,
    req: web::Json<TodoPatch>,
) -> impl Responder {
    let patch = req.into_inner().trimmed();
    if patch.is_empty() {
        return HttpResponse::BadRequest().body("at least one field must be provided");
    }
    if let Some(title) = patch.title.as_deref() {
        if title.is_empty() {
            return HttpResponse::BadRequest().body("title must not be empty");
        }
    }
    match db.update(ID::from(path.into_inner()), auth.subject(), &patch).await {
        Ok(todo) => HttpResponse::Ok().json(TodoInfo::from(&todo)),
        Err(e) => failure(e),
    }
}

pub async fn delete(
    db: web::Data<Arc<Client>>,
    auth: Auth,
    path: web::Path<uuid::Uuid>,
) -> impl Responder {
    match db.delete(ID::from(path.into_inner()), auth.subject()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => failure(e),
    }
}
