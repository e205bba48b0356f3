use axum::{
    extract::{Query, State},
    headers::{authorization::Bearer, Authorization},
    Json, TypedHeader,
};

use crate::{app::models::api_error::ApiError, auth::jwt::models::claims::Claims, AppState};

use super::{
    dtos::get_statistics_filter_dto::GetStatisticsFilterDto,
    models::statistics_summary::StatisticsSummary, service,
};

pub async fn get_statistics(
    State(state): State<AppState>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
    Query(dto): Query<GetStatisticsFilterDto>,
) -> Result<Json<StatisticsSummary>, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;

    match service::get_statistics(&dto, &claims, &state.pool, &state.utc_offset).await {
        Ok(summary) => Ok(Json(summary)),
        Err(e) => Err(e),
    }
}
