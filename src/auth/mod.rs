use crate::state::AppState;
use axum::Router;

mod dto;
pub mod error;
pub mod handlers;
pub mod jwt;
pub mod password;
mod validation;

pub fn router() -> Router<AppState> {
    handlers::auth_routes()
}
