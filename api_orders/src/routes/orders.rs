use std::sync::Arc;

use actix_web::{Responder, get, post, web};
use common::{error::Res, http::Success};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::orders::CreateOrderRequest;
use crate::service;

/// Creates an order for a user.
///
/// # Input
/// - `req`: JSON payload with `user_id` and a non-empty `items` array
///
/// # Output
/// - Success: 201 with the persisted order (status "pending")
/// - Error: 400 for missing fields or empty items
#[post("")]
pub async fn post_order(
    req: web::Json<CreateOrderRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let order = service::orders::create_order(&pool, req.into_inner()).await?;
    Success::created(order)
}

/// Looks an order up by id.
///
/// # Output
/// - Success: 200 with the order row
/// - Error: 404 when no order has this id
#[get("/{order_id}")]
pub async fn get_order(
    path: web::Path<Uuid>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let order = service::orders::get_order(&pool, path.into_inner()).await?;
    Success::ok(order)
}
