use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};

use crate::{
    dtos::part::PartRequestCreate,
    models::{part::Part, part_request::PartRequest},
};

pub async fn search_parts<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    query: &str,
) -> Res<Vec<Part>> {
    let pattern = format!("%{}%", query);
    sqlx::query_as::<_, Part>(
        r#"
        SELECT * FROM parts
        WHERE name ILIKE $1 OR description ILIKE $1
        ORDER BY created_at DESC
        LIMIT 50
        "#,
    )
    .bind(pattern)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn insert_part_request<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: PartRequestCreate,
) -> Res<PartRequest> {
    sqlx::query_as::<_, PartRequest>(
        r#"
        INSERT INTO part_requests (user_id, vehicle, part_description, urgency)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(data.user_id)
    .bind(&data.vehicle)
    .bind(&data.part_description)
    .bind(&data.urgency)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}
