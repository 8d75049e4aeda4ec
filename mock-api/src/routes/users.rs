use actix_web::{HttpResponse, get, post, web};

use crate::store::Store;

use super::APIError;

#[tracing::instrument(skip(store), ret)]
#[post("/users")]
pub async fn subscribe(
    details: web::Json<payloads::requests::Subscribe>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    store.subscribe(&details)?;
    Ok(HttpResponse::Ok().finish())
}

/// The demo login list, normally a static asset next to the UI.
#[get("/logins.json")]
pub async fn logins(store: web::Data<Store>) -> HttpResponse {
    HttpResponse::Ok().json(store.logins())
}
