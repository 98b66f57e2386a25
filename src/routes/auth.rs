use axum::routing::post;
use axum::Router;

use crate::handlers::auth::{sign_in, sign_up};
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthHandler {
    SignUp,
    SignIn,
}

/// POST routes of the auth router. `/sign-out` is bound to the sign-in handler.
pub const AUTH_ROUTES: [(&str, AuthHandler); 3] = [
    ("/sign-up", AuthHandler::SignUp),
    ("/sign-in", AuthHandler::SignIn),
    ("/sign-out", AuthHandler::SignIn),
];

pub fn auth_router() -> Router<AppState> {
    AUTH_ROUTES
        .into_iter()
        .fold(Router::new(), |router, (path, handler)| match handler {
            AuthHandler::SignUp => router.route(path, post(sign_up)),
            AuthHandler::SignIn => router.route(path, post(sign_in)),
        })
}
