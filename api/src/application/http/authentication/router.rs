use super::handlers::get_me::get_me;
use super::handlers::login::{__path_login, login};
use super::handlers::register::{__path_register, register};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(register, login))]
pub struct AuthenticationApiDoc;

pub fn authentication_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{root_path}/auth/register"), post(register))
        .route(&format!("{root_path}/auth/login"), post(login))
        .route(&format!("{root_path}/me"), get(get_me))
}
