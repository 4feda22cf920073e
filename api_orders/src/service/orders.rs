use common::error::{AppError, Res};
use db::{dtos::order::OrderCreateRequest, models::order::Order};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::orders::CreateOrderRequest;

pub async fn create_order(pool: &PgPool, req: CreateOrderRequest) -> Res<Order> {
    let (Some(user_id), Some(items)) = (req.user_id, req.items) else {
        return Err(AppError::Validation(
            "Missing required fields: user_id or items".to_string(),
        ));
    };

    if !items.as_array().is_some_and(|a| !a.is_empty()) {
        return Err(AppError::Validation(
            "items must be a non-empty array".to_string(),
        ));
    }

    let order = db::orders::insert_order(pool, OrderCreateRequest { user_id, items }).await?;

    log::info!("Order {} created for user {}", order.id, user_id);
    Ok(order)
}

pub async fn get_order(pool: &PgPool, order_id: Uuid) -> Res<Order> {
    db::orders::get_order_by_id(pool, order_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {}", order_id)))
}
