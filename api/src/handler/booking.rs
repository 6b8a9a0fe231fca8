use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::{AccountId, BookingId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::{
    booking::{
        AvailabilityQuery, AvailabilityResponse, BookingCountResponse, BookingResponse,
        BookingsResponse, CreateBookingRequest,
    },
    review::{CreateReviewRequest, CreateReviewRequestWithBookingId, ReviewResponse},
};

// 空き確認と作成は同一トランザクションではないため、
// 確認後に別の予約が入ると二重予約になりうる
pub async fn register_booking(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingResponse>)> {
    req.validate(&())?;

    let repository = registry.booking_repository();
    let available = repository
        .is_tour_guide_available(req.tour_guide_id, req.from_date, req.to_date)
        .await?;
    if !available {
        return Err(AppError::UnprocessableEntity(format!(
            "tour guide ({}) is already booked between {} and {}",
            req.tour_guide_id, req.from_date, req.to_date
        )));
    }

    repository
        .create(req.into())
        .await
        .map(|booking| (StatusCode::CREATED, Json(booking.into())))
}

pub async fn show_booking_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    registry
        .booking_repository()
        .find_all()
        .await
        .map(BookingsResponse::from)
        .map(Json)
}

pub async fn show_booking_count(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingCountResponse>> {
    registry
        .booking_repository()
        .count()
        .await
        .map(|count| Json(BookingCountResponse { count }))
}

pub async fn show_booking(
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingResponse>> {
    registry
        .booking_repository()
        .find_by_id(booking_id)
        .await
        .and_then(|booking| match booking {
            Some(booking) => Ok(Json(booking.into())),
            None => Err(AppError::EntityNotFound(format!(
                "booking ({booking_id}) was not found"
            ))),
        })
}

pub async fn show_client_booking_list(
    Path(client_id): Path<AccountId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    registry
        .booking_repository()
        .find_by_client_id(client_id)
        .await
        .map(BookingsResponse::from)
        .map(Json)
}

pub async fn show_tour_guide_availability(
    Path(tour_guide_id): Path<AccountId>,
    Query(query): Query<AvailabilityQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AvailabilityResponse>> {
    query.validate(&())?;

    let AvailabilityQuery { from_date, to_date } = query;
    registry
        .booking_repository()
        .is_tour_guide_available(tour_guide_id, from_date, to_date)
        .await
        .map(|available| {
            Json(AvailabilityResponse {
                tour_guide_id,
                from_date,
                to_date,
                available,
            })
        })
}

pub async fn register_review(
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReviewRequest>,
) -> AppResult<(StatusCode, Json<ReviewResponse>)> {
    req.validate(&())?;

    let event = CreateReviewRequestWithBookingId::new(booking_id, req);
    registry
        .booking_repository()
        .create_review(event.into())
        .await
        .map(|review| (StatusCode::CREATED, Json(review.into())))
}
