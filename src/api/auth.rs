//! Endpoints de autenticación

use crate::clients::{ApiClient, RequestOptions};
use crate::models::{Ack, LoginRequest, LoginResponse};
use crate::utils::errors::ApiResult;

/// POST /login
pub async fn login(client: &ApiClient, username: &str, password: &str) -> ApiResult<LoginResponse> {
    let payload = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    client
        .request_as("/login", RequestOptions::post().json(&payload)?)
        .await
}

/// POST /logout
pub async fn logout(client: &ApiClient) -> ApiResult<Ack> {
    client.request_ack("/logout", RequestOptions::post()).await
}
