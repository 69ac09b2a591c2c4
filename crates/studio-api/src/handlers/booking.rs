//! Booking handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use rust_decimal::Decimal;
use uuid::Uuid;

use studio_core::types::pagination::{PageRequest, PageResponse};
use studio_database::repositories::booking::BookingFilter;
use studio_entity::booking::{Booking, BookingNote, CreateBooking, UpdateBooking};
use studio_service::report::aggregate::BookingOverview;

use crate::dto::parse_time;
use crate::dto::request::{
    AssignPhotographerRequest, AvailableSlotsQuery, AddNoteRequest, BookingListQuery,
    CreateBookingRequest, RescheduleRequest, UpdateBookingRequest, UpdateBookingStatusRequest,
};
use crate::dto::response::{
    ApiResponse, AvailableSlotsResponse, BookingDetailResponse, RescheduleResponse,
};
use crate::error::ApiError;
use crate::extractors::{ApiJson, AuthAdmin};
use crate::state::AppState;

/// POST /api/bookings
pub async fn create(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateBookingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Booking>>), ApiError> {
    let data = CreateBooking {
        customer_name: req.customer_name,
        customer_email: req.customer_email,
        customer_phone: req.customer_phone,
        service_type: req.service_type,
        package: req.package,
        date: req.date,
        time: parse_time(&req.time)?,
        duration_hours: req.duration_hours.unwrap_or(1),
        address: req.address,
        city: req.city,
        state: req.state,
        postal_code: req.postal_code,
        price_amount: req.price_amount,
        price_currency: req.price_currency.unwrap_or_else(|| "USD".to_string()),
        price_discount: req.price_discount.unwrap_or(Decimal::ZERO),
        special_requirements: req.special_requirements,
        rescheduled_from: None,
    };

    let booking = state.booking_service.create(data).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Booking created successfully",
            booking,
        )),
    ))
}

/// GET /api/bookings/available-slots?date=YYYY-MM-DD
pub async fn available_slots(
    State(state): State<AppState>,
    Query(query): Query<AvailableSlotsQuery>,
) -> Result<Json<ApiResponse<AvailableSlotsResponse>>, ApiError> {
    let slots = state.booking_service.available_slots(query.date).await?;

    Ok(Json(ApiResponse::ok(AvailableSlotsResponse {
        date: query.date,
        available_slots: slots
            .iter()
            .map(|t| t.format("%H:%M").to_string())
            .collect(),
    })))
}

/// GET /api/bookings
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Query(query): Query<BookingListQuery>,
) -> Result<Json<ApiResponse<PageResponse<Booking>>>, ApiError> {
    let filter = BookingFilter {
        status: query.status,
        service_type: query.service_type,
        date_from: query.date_from,
        date_to: query.date_to,
        search: query.search,
    };
    let page = PageRequest::new(query.page.unwrap_or(1), query.limit.unwrap_or(10));

    let bookings = state.booking_service.list(&filter, &page).await?;
    Ok(Json(ApiResponse::ok(bookings)))
}

/// GET /api/bookings/{id}
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingDetailResponse>>, ApiError> {
    let (booking, notes) = state.booking_service.get(id).await?;
    Ok(Json(ApiResponse::ok(BookingDetailResponse { booking, notes })))
}

/// PUT /api/bookings/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
    ApiJson(req): ApiJson<UpdateBookingRequest>,
) -> Result<Json<ApiResponse<Booking>>, ApiError> {
    let time = match &req.time {
        Some(t) => Some(parse_time(t)?),
        None => None,
    };

    let data = UpdateBooking {
        customer_name: req.customer_name,
        customer_email: req.customer_email,
        customer_phone: req.customer_phone,
        service_type: req.service_type,
        package: req.package,
        date: req.date,
        time,
        duration_hours: req.duration_hours,
        address: req.address,
        city: req.city,
        state: req.state,
        postal_code: req.postal_code,
        price_amount: req.price_amount,
        price_discount: req.price_discount,
        payment_status: req.payment_status,
        special_requirements: req.special_requirements,
    };

    let booking = state.booking_service.update(id, data).await?;
    Ok(Json(ApiResponse::with_message(
        "Booking updated successfully",
        booking,
    )))
}

/// DELETE /api/bookings/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.booking_service.delete(id).await?;
    Ok(Json(ApiResponse::message_only("Booking deleted successfully")))
}

/// PATCH /api/bookings/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
    ApiJson(req): ApiJson<UpdateBookingStatusRequest>,
) -> Result<Json<ApiResponse<Booking>>, ApiError> {
    let booking = state
        .booking_service
        .update_status(id, req.status, req.cancellation_reason)
        .await?;
    Ok(Json(ApiResponse::with_message(
        "Booking status updated successfully",
        booking,
    )))
}

/// PATCH /api/bookings/{id}/reschedule
pub async fn reschedule(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
    ApiJson(req): ApiJson<RescheduleRequest>,
) -> Result<Json<ApiResponse<RescheduleResponse>>, ApiError> {
    let new_time = parse_time(&req.new_time)?;
    let outcome = state
        .booking_service
        .reschedule(id, req.new_date, new_time, req.reason)
        .await?;

    Ok(Json(ApiResponse::with_message(
        "Booking rescheduled successfully",
        RescheduleResponse {
            original_booking: outcome.original,
            new_booking: outcome.successor,
        },
    )))
}

/// PATCH /api/bookings/{id}/assign-photographer
pub async fn assign_photographer(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
    ApiJson(req): ApiJson<AssignPhotographerRequest>,
) -> Result<Json<ApiResponse<Booking>>, ApiError> {
    let booking = state
        .booking_service
        .assign_photographer(id, req.photographer_id)
        .await?;
    Ok(Json(ApiResponse::with_message(
        "Photographer assigned successfully",
        booking,
    )))
}

/// POST /api/bookings/{id}/notes
pub async fn add_note(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Path(id): Path<Uuid>,
    ApiJson(req): ApiJson<AddNoteRequest>,
) -> Result<Json<ApiResponse<BookingNote>>, ApiError> {
    let note = state
        .booking_service
        .add_note(&auth.0, id, &req.content)
        .await?;
    Ok(Json(ApiResponse::with_message("Note added successfully", note)))
}

/// GET /api/bookings/stats/overview
pub async fn stats(
    State(state): State<AppState>,
    _auth: AuthAdmin,
) -> Result<Json<ApiResponse<BookingOverview>>, ApiError> {
    let overview = state.booking_service.stats().await?;
    Ok(Json(ApiResponse::ok(overview)))
}
