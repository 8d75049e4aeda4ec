pub mod feedback;
pub mod news;
pub mod users;

use actix_web::{
    HttpResponse, Responder, ResponseError, body::BoxBody,
    dev::HttpServiceFactory, get, web,
};

use crate::store::StoreError;

pub fn api_services() -> impl HttpServiceFactory {
    web::scope("")
        .service(health_check)
        .service(users::subscribe)
        .service(users::logins)
        .service(news::list_news)
        .service(news::get_news)
        .service(news::create_news)
        .service(news::update_news)
        .service(news::delete_news)
        .service(feedback::list_feedbacks)
        .service(feedback::create_feedback)
}

#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("healthy")
}

#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("Bad request")]
    BadRequest(#[source] anyhow::Error),
    #[error("Conflict")]
    Conflict(#[source] anyhow::Error),
    #[error("Not found")]
    NotFound(#[source] anyhow::Error),
    #[error("Something went wrong")]
    UnexpectedError(#[from] anyhow::Error),
}

impl ResponseError for APIError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            Self::BadRequest(e) => {
                HttpResponse::BadRequest().body(format!("{self}: {e}"))
            }
            Self::Conflict(e) => {
                HttpResponse::Conflict().body(format!("{self}: {e}"))
            }
            Self::NotFound(e) => {
                HttpResponse::NotFound().body(format!("{self}: {e}"))
            }
            Self::UnexpectedError(_) => {
                HttpResponse::InternalServerError().body(self.to_string())
            }
        }
    }
}

impl From<StoreError> for APIError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NewsNotFound => APIError::NotFound(e.into()),
            StoreError::AlreadySubscribed => APIError::Conflict(e.into()),
            StoreError::InvalidEmail
            | StoreError::InvalidStars
            | StoreError::EmptyField(_) => APIError::BadRequest(e.into()),
        }
    }
}

fn news_id(path: web::Path<String>) -> payloads::NewsId {
    payloads::NewsId(path.into_inner())
}
