use actix_web::{HttpResponse, get, post, web};

use crate::store::Store;

use super::{APIError, news_id};

#[tracing::instrument(skip(store), ret)]
#[get("/news/{news_id}/feedbacks")]
pub async fn list_feedbacks(
    path: web::Path<String>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    let feedbacks = store.list_feedbacks(&news_id(path))?;
    Ok(HttpResponse::Ok().json(feedbacks))
}

#[tracing::instrument(skip(store), ret)]
#[post("/news/{news_id}/feedback")]
pub async fn create_feedback(
    path: web::Path<String>,
    details: web::Json<payloads::requests::CreateFeedback>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    let feedback_id = store.create_feedback(&news_id(path), &details)?;
    Ok(HttpResponse::Ok().json(feedback_id))
}
