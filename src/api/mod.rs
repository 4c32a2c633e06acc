use axum::Json;
use axum::extract::{Path, Query};
use axum::http::HeaderMap;
use axum::routing::{delete, post};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;
use crate::catalog;
use crate::db::repository;
use crate::error::AppError;
use crate::models::{Gender, Instructor, TimetableUrlEntry};
use crate::query;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/centers", get(list_centers))
        .route("/categories", get(list_categories))
        .route("/centers/{name}/categories", get(list_center_categories))
        .route("/instructors", get(list_instructors).post(save_instructor))
        .route("/instructors/overview", get(instructor_overview))
        .route("/instructors/{id}", delete(delete_instructor))
        .route(
            "/timetable-url",
            get(get_timetable_url)
                .put(set_timetable_url)
                .delete(delete_timetable_url),
        )
        .route("/timetable-urls", get(list_timetable_urls))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/session", get(session))
        .with_state(state)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

/// Admin gate for write routes: a verified session is required. The
/// repositories themselves stay authorization-free.
async fn require_admin(state: &AppState, headers: &HeaderMap) -> Result<AuthUser, AppError> {
    let token = bearer_token(headers)
        .ok_or_else(|| AppError::Auth("admin sign-in required".to_string()))?;
    state
        .auth
        .verify(token)
        .await?
        .ok_or_else(|| AppError::Auth("admin sign-in required".to_string()))
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    sqlx::query("select 1")
        .execute(&state.db)
        .await
        .map_err(AppError::StoreUnavailable)?;
    Ok(StatusCode::OK)
}

async fn list_centers() -> Json<&'static [catalog::Center]> {
    Json(catalog::CENTERS)
}

async fn list_categories() -> Json<&'static [catalog::Category]> {
    Json(catalog::CATEGORIES)
}

async fn list_center_categories(
    Path(name): Path<String>,
) -> Json<Vec<&'static catalog::Category>> {
    Json(catalog::categories_for_center(&name))
}

#[derive(Deserialize)]
struct InstructorQueryParams {
    center: Option<String>,
    category: Option<String>,
    q: Option<String>,
}

async fn list_instructors(
    State(state): State<AppState>,
    Query(params): Query<InstructorQueryParams>,
) -> Json<Vec<Instructor>> {
    let list = repository::fetch_instructors(&state.db).await;
    let list = query::filter_by_center_and_category(
        list,
        params.center.as_deref(),
        params.category.as_deref(),
    );
    let list = query::search_instructors(list, params.q.as_deref().unwrap_or(""));
    Json(query::sort_by_name(list))
}

async fn instructor_overview(State(state): State<AppState>) -> Json<Vec<query::CenterGroup>> {
    let list = repository::fetch_instructors(&state.db).await;
    let centers: Vec<&str> = catalog::CENTERS.iter().map(|c| c.name).collect();
    let categories: Vec<&str> = catalog::CATEGORIES.iter().map(|c| c.name).collect();
    Json(query::group_by_center_then_category(&list, &centers, &categories))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SaveInstructorRequest {
    #[serde(default)]
    id: Option<String>,
    name: String,
    current_center: String,
    category: String,
    position: String,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    gender: Option<Gender>,
    #[serde(default)]
    assigned_classes: Vec<String>,
    #[serde(default)]
    licenses: Vec<String>,
    #[serde(default)]
    career: Vec<String>,
}

async fn save_instructor(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<SaveInstructorRequest>,
) -> Result<Json<Instructor>, AppError> {
    require_admin(&state, &headers).await?;

    let instructor = Instructor {
        id: req
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(repository::new_instructor_id),
        name: req.name,
        current_center: req.current_center,
        category: req.category,
        position: req.position,
        image_url: req.image_url,
        gender: req.gender,
        assigned_classes: req.assigned_classes,
        licenses: req.licenses,
        career: req.career,
    };

    repository::save_instructor(&state.db, &instructor).await?;
    Ok(Json(instructor))
}

async fn delete_instructor(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    require_admin(&state, &headers).await?;
    repository::delete_instructor(&state.db, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
struct TimetableKeyParams {
    center: String,
    category: String,
}

#[derive(Serialize)]
struct TimetableUrlResponse {
    url: Option<String>,
}

async fn get_timetable_url(
    State(state): State<AppState>,
    Query(params): Query<TimetableKeyParams>,
) -> Json<TimetableUrlResponse> {
    let url = repository::get_timetable_url(&state.db, &params.center, &params.category).await;
    Json(TimetableUrlResponse { url })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SetTimetableUrlRequest {
    center_name: String,
    category_name: String,
    url: String,
}

async fn set_timetable_url(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<SetTimetableUrlRequest>,
) -> Result<StatusCode, AppError> {
    require_admin(&state, &headers).await?;
    repository::set_timetable_url(&state.db, &req.center_name, &req.category_name, &req.url)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_timetable_urls(State(state): State<AppState>) -> Json<Vec<TimetableUrlEntry>> {
    Json(repository::list_timetable_urls(&state.db).await)
}

async fn delete_timetable_url(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<TimetableKeyParams>,
) -> Result<StatusCode, AppError> {
    require_admin(&state, &headers).await?;
    repository::delete_timetable_url(&state.db, &params.center, &params.category).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    token: String,
    email: String,
    expires_in: Option<u64>,
}

async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let session = state.auth.sign_in(&req.email, &req.password).await?;
    Ok(Json(LoginResponse {
        token: session.token,
        email: session.email,
        expires_in: session.expires_in,
    }))
}

async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    if let Some(token) = bearer_token(&headers) {
        state.auth.sign_out(token).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionResponse {
    signed_in: bool,
    email: Option<String>,
}

async fn session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SessionResponse>, AppError> {
    let user = match bearer_token(&headers) {
        Some(token) => state.auth.verify(token).await?,
        None => None,
    };
    Ok(Json(SessionResponse {
        signed_in: user.is_some(),
        email: user.map(|u| u.email),
    }))
}
