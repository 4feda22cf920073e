use std::sync::Arc;

use actix_web::{Responder, get, post, web};
use common::{error::Res, http::Success};
use sqlx::PgPool;

use crate::dtos::parts::{CreatePartRequest, SearchQuery};
use crate::service;

/// Searches the parts catalog by name or description.
///
/// # Input
/// - `query`: search term (optional; empty matches everything)
/// - `role`: echoed back for the client, not a filter
///
/// # Output
/// - Success: 200 `{query, role, results}`
#[get("/search")]
pub async fn get_search(
    query: web::Query<SearchQuery>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let body = service::parts::search(&pool, query.into_inner()).await?;
    Success::ok(body)
}

/// Opens a part request on behalf of a user.
///
/// # Output
/// - Success: 201 with the persisted request (status "open")
/// - Error: 400 for missing fields
#[post("/requests")]
pub async fn post_request(
    req: web::Json<CreatePartRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let request = service::parts::create_request(&pool, req.into_inner()).await?;
    Success::created(request)
}
