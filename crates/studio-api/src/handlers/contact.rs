//! Contact inquiry handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use studio_core::types::pagination::{PageRequest, PageResponse};
use studio_database::repositories::contact::{BulkContactUpdate, ContactFilter};
use studio_entity::contact::{Contact, ContactNote, UpdateContact};
use studio_service::report::aggregate::ContactOverview;

use crate::dto::request::{
    AddNoteRequest, AssignContactRequest, BulkUpdateContactsRequest, ContactListQuery,
    CreateContactRequest, UpdateContactRequest,
};
use crate::dto::response::{ApiResponse, BulkUpdateResponse, ContactDetailResponse};
use crate::error::ApiError;
use crate::extractors::{ApiJson, AuthAdmin, MaybeAuthAdmin};
use crate::state::AppState;

/// POST /api/contact
///
/// Public, with optional auth: a submission from a logged-in staff
/// member skips triage (it is created already marked read by them).
pub async fn create(
    State(state): State<AppState>,
    MaybeAuthAdmin(submitter): MaybeAuthAdmin,
    ApiJson(req): ApiJson<CreateContactRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Contact>>), ApiError> {
    let contact = state
        .contact_service
        .create(
            req.name,
            req.email,
            req.phone,
            req.subject,
            req.message,
            submitter.as_ref(),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Message sent successfully",
            contact,
        )),
    ))
}

/// GET /api/contact
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Query(query): Query<ContactListQuery>,
) -> Result<Json<ApiResponse<PageResponse<Contact>>>, ApiError> {
    let filter = ContactFilter {
        status: query.status,
        priority: query.priority,
        subject: query.subject,
        unread_only: query.unread_only.unwrap_or(false),
        search: query.search,
    };
    let page = PageRequest::new(query.page.unwrap_or(1), query.limit.unwrap_or(10));

    let contacts = state.contact_service.list(&filter, &page).await?;
    Ok(Json(ApiResponse::ok(contacts)))
}

/// GET /api/contact/unread
pub async fn unread(
    State(state): State<AppState>,
    _auth: AuthAdmin,
) -> Result<Json<ApiResponse<Vec<Contact>>>, ApiError> {
    let contacts = state.contact_service.unread().await?;
    Ok(Json(ApiResponse::ok(contacts)))
}

/// GET /api/contact/{id}
///
/// First staff view marks the inquiry read.
pub async fn get(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ContactDetailResponse>>, ApiError> {
    let (contact, notes) = state.contact_service.get(&auth.0, id).await?;
    Ok(Json(ApiResponse::ok(ContactDetailResponse { contact, notes })))
}

/// PUT /api/contact/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
    ApiJson(req): ApiJson<UpdateContactRequest>,
) -> Result<Json<ApiResponse<Contact>>, ApiError> {
    let contact = state
        .contact_service
        .update(
            id,
            UpdateContact {
                status: req.status,
                priority: req.priority,
                assigned_to: req.assigned_to,
            },
        )
        .await?;
    Ok(Json(ApiResponse::with_message(
        "Contact updated successfully",
        contact,
    )))
}

/// DELETE /api/contact/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.contact_service.delete(id).await?;
    Ok(Json(ApiResponse::message_only("Contact deleted successfully")))
}

/// PATCH /api/contact/{id}/mark-read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Contact>>, ApiError> {
    let contact = state.contact_service.mark_read(&auth.0, id).await?;
    Ok(Json(ApiResponse::with_message(
        "Contact marked as read",
        contact,
    )))
}

/// PATCH /api/contact/{id}/mark-replied
pub async fn mark_replied(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Contact>>, ApiError> {
    let contact = state.contact_service.mark_replied(&auth.0, id).await?;
    Ok(Json(ApiResponse::with_message(
        "Contact marked as replied",
        contact,
    )))
}

/// PATCH /api/contact/{id}/mark-spam
pub async fn mark_spam(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Contact>>, ApiError> {
    let contact = state.contact_service.mark_spam(id).await?;
    Ok(Json(ApiResponse::with_message(
        "Contact marked as spam",
        contact,
    )))
}

/// PATCH /api/contact/{id}/assign
pub async fn assign(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<Uuid>,
    ApiJson(req): ApiJson<AssignContactRequest>,
) -> Result<Json<ApiResponse<Contact>>, ApiError> {
    let contact = state.contact_service.assign(id, req.admin_id).await?;
    Ok(Json(ApiResponse::with_message(
        "Contact assigned successfully",
        contact,
    )))
}

/// POST /api/contact/{id}/notes
pub async fn add_note(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Path(id): Path<Uuid>,
    ApiJson(req): ApiJson<AddNoteRequest>,
) -> Result<Json<ApiResponse<ContactNote>>, ApiError> {
    let note = state
        .contact_service
        .add_note(&auth.0, id, &req.content)
        .await?;
    Ok(Json(ApiResponse::with_message("Note added successfully", note)))
}

/// PATCH /api/contact/bulk-update
pub async fn bulk_update(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    ApiJson(req): ApiJson<BulkUpdateContactsRequest>,
) -> Result<Json<ApiResponse<BulkUpdateResponse>>, ApiError> {
    let modified_count = state
        .contact_service
        .bulk_update(
            &req.contact_ids,
            &BulkContactUpdate {
                status: req.status,
                priority: req.priority,
                assigned_to: req.assigned_to,
            },
        )
        .await?;

    Ok(Json(ApiResponse::with_message(
        format!("Updated {modified_count} contacts"),
        BulkUpdateResponse { modified_count },
    )))
}

/// GET /api/contact/stats/overview
pub async fn stats(
    State(state): State<AppState>,
    _auth: AuthAdmin,
) -> Result<Json<ApiResponse<ContactOverview>>, ApiError> {
    let overview = state.contact_service.stats().await?;
    Ok(Json(ApiResponse::ok(overview)))
}
