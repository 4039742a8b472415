#[cfg(test)]
use crate::features::auth::model::AuthenticatedUser;

#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};

#[cfg(test)]
pub fn create_employer_user() -> AuthenticatedUser {
    AuthenticatedUser {
        sub: "test-employer-id".to_string(),
        email: "employer@example.com".to_string(),
        roles: vec![crate::shared::constants::EMPLOYER_ROLE.to_string()],
    }
}

#[cfg(test)]
async fn inject_employer_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_employer_user());
    next.run(request).await
}

/// Wrap a router so every request carries an authenticated employer principal
#[cfg(test)]
pub fn with_employer_auth(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_employer_middleware))
}
