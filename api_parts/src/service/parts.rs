use common::error::{AppError, Res};
use db::{dtos::part::PartRequestCreate, models::part_request::PartRequest};
use sqlx::PgPool;

use crate::dtos::parts::{CreatePartRequest, SearchQuery, SearchResponse};

pub async fn search(pool: &PgPool, query: SearchQuery) -> Res<SearchResponse> {
    let term = query.query.unwrap_or_default();
    let results = db::parts::search_parts(pool, term.trim()).await?;

    Ok(SearchResponse {
        query: term,
        role: query.role,
        results,
    })
}

pub async fn create_request(pool: &PgPool, req: CreatePartRequest) -> Res<PartRequest> {
    let (Some(user_id), Some(vehicle), Some(part_description)) =
        (req.user_id, req.vehicle, req.part_description)
    else {
        return Err(AppError::Validation(
            "Missing required fields: user_id, vehicle or part_description".to_string(),
        ));
    };

    let request = db::parts::insert_part_request(
        pool,
        PartRequestCreate {
            user_id,
            vehicle,
            part_description,
            urgency: req.urgency.unwrap_or_else(|| "normal".to_string()),
        },
    )
    .await?;

    log::info!("Part request {} opened by user {}", request.id, user_id);
    Ok(request)
}
