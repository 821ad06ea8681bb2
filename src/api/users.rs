//! Endpoints de usuarios

use crate::clients::{ApiClient, RequestOptions};
use crate::models::{Ack, NewUser, Page, User};
use crate::utils::errors::ApiResult;
use crate::utils::QueryParams;

pub fn users_path(page: Option<u32>, limit: Option<u32>) -> String {
    QueryParams::new()
        .push("page", page)
        .push("limit", limit)
        .with_path("/getUsers")
}

/// GET /getUsers?page=&limit=
pub async fn get_users(
    client: &ApiClient,
    page: Option<u32>,
    limit: Option<u32>,
) -> ApiResult<Page<User>> {
    client
        .request_as(&users_path(page, limit), RequestOptions::get())
        .await
}

/// POST /addUser
pub async fn add_user(client: &ApiClient, payload: &NewUser) -> ApiResult<Ack> {
    client
        .request_ack("/addUser", RequestOptions::post().json(payload)?)
        .await
}

/// DELETE /deleteUser?userID=
pub async fn delete_user(client: &ApiClient, user_id: u64) -> ApiResult<Ack> {
    let path = QueryParams::new()
        .push("userID", Some(user_id))
        .with_path("/deleteUser");
    client.request_ack(&path, RequestOptions::delete()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_path() {
        assert_eq!(users_path(Some(2), Some(10)), "/getUsers?page=2&limit=10");
        assert_eq!(users_path(None, None), "/getUsers");
    }
}
