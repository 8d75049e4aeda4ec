use actix_web::{HttpResponse, delete, get, patch, post, web};

use crate::store::Store;

use super::{APIError, news_id};

#[tracing::instrument(skip(store))]
#[get("/news")]
pub async fn list_news(store: web::Data<Store>) -> HttpResponse {
    HttpResponse::Ok().json(store.list_news())
}

#[tracing::instrument(skip(store), ret)]
#[get("/news/{news_id}")]
pub async fn get_news(
    path: web::Path<String>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    let post = store.get_news(&news_id(path))?;
    Ok(HttpResponse::Ok().json(post))
}

#[tracing::instrument(skip(store), ret)]
#[post("/news")]
pub async fn create_news(
    details: web::Json<payloads::requests::CreateNews>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    let news_id = store.create_news(&details)?;
    tracing::info!(%news_id, "newsletter queued");
    Ok(HttpResponse::Ok().json(news_id))
}

#[tracing::instrument(skip(store), ret)]
#[patch("/news/{news_id}")]
pub async fn update_news(
    path: web::Path<String>,
    details: web::Json<payloads::requests::UpdateNews>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    let post = store.update_news(&news_id(path), &details)?;
    Ok(HttpResponse::Ok().json(post))
}

#[tracing::instrument(skip(store), ret)]
#[delete("/news/{news_id}")]
pub async fn delete_news(
    path: web::Path<String>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    store.delete_news(&news_id(path))?;
    Ok(HttpResponse::Ok().finish())
}
