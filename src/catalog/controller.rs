use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::Value;
use crate::catalog::command::ViewCommandResponse;
use crate::catalog::command::change_page_cmd::{ChangePageCommand, ChangePageCommandRequest};
use crate::catalog::command::clear_filters_cmd::{ClearFiltersCommand, ClearFiltersCommandRequest};
use crate::catalog::command::close_session_cmd::{CloseSessionCommand, CloseSessionCommandRequest, CloseSessionCommandResponse};
use crate::catalog::command::get_session_cmd::{GetSessionCommand, GetSessionCommandRequest};
use crate::catalog::command::open_session_cmd::{OpenSessionCommand, OpenSessionCommandRequest};
use crate::catalog::command::search_documents_cmd::{SearchDocumentsCommand, SearchDocumentsCommandRequest};
use crate::catalog::command::toggle_category_cmd::{ToggleCategoryCommand, ToggleCategoryCommandRequest};
use crate::catalog::command::update_search_text_cmd::{UpdateSearchTextCommand, UpdateSearchTextCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

fn build_service(state: AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.config, state.documents, state.sessions)
}

pub(crate) async fn open_session(
    State(state): State<AppState>) -> Result<Json<ViewCommandResponse>, ServerError> {
    let svc = build_service(state);
    let res = OpenSessionCommand::new(svc).execute(OpenSessionCommandRequest::default()).await?;
    Ok(Json(res))
}

pub(crate) async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>) -> Result<Json<ViewCommandResponse>, ServerError> {
    let req = GetSessionCommandRequest { session_id };
    let svc = build_service(state);
    let res = GetSessionCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn close_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>) -> Result<Json<CloseSessionCommandResponse>, ServerError> {
    let req = CloseSessionCommandRequest { session_id };
    let svc = build_service(state);
    let res = CloseSessionCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn update_search_text(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    json: Json<Value>) -> Result<Json<ViewCommandResponse>, ServerError> {
    let mut req: UpdateSearchTextCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    req.session_id = session_id;
    let svc = build_service(state);
    let res = UpdateSearchTextCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

// the body is optional, without one the current draft is submitted
pub(crate) async fn search_documents(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    json: Option<Json<Value>>) -> Result<Json<ViewCommandResponse>, ServerError> {
    let mut req: SearchDocumentsCommandRequest = match json {
        Some(json) => serde_json::from_value(json.0).map_err(json_to_server_error)?,
        None => SearchDocumentsCommandRequest { session_id: String::new(), text: None },
    };
    req.session_id = session_id;
    let svc = build_service(state);
    let res = SearchDocumentsCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn toggle_category(
    State(state): State<AppState>,
    Path((session_id, category)): Path<(String, String)>) -> Result<Json<ViewCommandResponse>, ServerError> {
    let req = ToggleCategoryCommandRequest { session_id, category };
    let svc = build_service(state);
    let res = ToggleCategoryCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn clear_filters(
    State(state): State<AppState>,
    Path(session_id): Path<String>) -> Result<Json<ViewCommandResponse>, ServerError> {
    let req = ClearFiltersCommandRequest { session_id };
    let svc = build_service(state);
    let res = ClearFiltersCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

// the body is the page change itself: {"to": n}, "next" or "previous"
pub(crate) async fn change_page(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    json: Json<Value>) -> Result<Json<ViewCommandResponse>, ServerError> {
    let change = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let req = ChangePageCommandRequest { session_id, change };
    let svc = build_service(state);
    let res = ChangePageCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}
