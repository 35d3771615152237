use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::Value;
use crate::cart::command::CartCommandResponse;
use crate::cart::command::add_to_cart_cmd::{AddToCartCommand, AddToCartCommandRequest};
use crate::cart::command::clear_cart_cmd::{ClearCartCommand, ClearCartCommandRequest};
use crate::cart::command::remove_from_cart_cmd::{RemoveFromCartCommand, RemoveFromCartCommandRequest};
use crate::cart::command::show_cart_cmd::{ShowCartCommand, ShowCartCommandRequest};
use crate::cart::command::submit_request_cmd::{SubmitRequestCommand, SubmitRequestCommandRequest};
use crate::cart::domain::CartService;
use crate::cart::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::core::library::DocumentId;

fn build_service(state: AppState) -> Box<dyn CartService> {
    factory::create_cart_service(&state.config, state.sessions)
}

pub(crate) async fn add_to_cart(
    State(state): State<AppState>,
    Path((session_id, document_id)): Path<(String, DocumentId)>) -> Result<Json<CartCommandResponse>, ServerError> {
    let req = AddToCartCommandRequest { session_id, document_id };
    let svc = build_service(state);
    let res = AddToCartCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_from_cart(
    State(state): State<AppState>,
    Path((session_id, document_id)): Path<(String, DocumentId)>) -> Result<Json<CartCommandResponse>, ServerError> {
    let req = RemoveFromCartCommandRequest { session_id, document_id };
    let svc = build_service(state);
    let res = RemoveFromCartCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn clear_cart(
    State(state): State<AppState>,
    Path(session_id): Path<String>) -> Result<Json<CartCommandResponse>, ServerError> {
    let req = ClearCartCommandRequest { session_id };
    let svc = build_service(state);
    let res = ClearCartCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn show_cart(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    json: Json<Value>) -> Result<Json<CartCommandResponse>, ServerError> {
    let mut req: ShowCartCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    req.session_id = session_id;
    let svc = build_service(state);
    let res = ShowCartCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn submit_request(
    State(state): State<AppState>,
    Path(session_id): Path<String>) -> Result<Json<CartCommandResponse>, ServerError> {
    let req = SubmitRequestCommandRequest { session_id };
    let svc = build_service(state);
    let res = SubmitRequestCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}
