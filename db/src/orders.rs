use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{dtos::order::OrderCreateRequest, models::order::Order};

pub async fn insert_order<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: OrderCreateRequest,
) -> Res<Order> {
    sqlx::query_as::<_, Order>(
        r#"
        INSERT INTO orders (user_id, items)
        VALUES ($1, $2)
        RETURNING *
        "#,
    )
    .bind(data.user_id)
    .bind(&data.items)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn get_order_by_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    order_id: Uuid,
) -> Res<Option<Order>> {
    sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
        .bind(order_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}
