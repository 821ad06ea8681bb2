//! Pantalla de gestión de usuarios
//!
//! Listado paginado (`page`, `limit`), modal de alta y modal de detalle
//! (solo lectura). El alta se valida por completo antes de tocar la red.

use std::sync::Arc;

use validator::Validate;

use super::cascade::CountryCityCascade;
use super::modal::Modal;
use super::prompt::Prompt;
use super::resource_list::{FetchOutcome, ListPhase, Pagination, ResourceList};
use crate::api::users;
use crate::clients::ApiClient;
use crate::config::resources::USERS;
use crate::models::{Listing, NewUser, Permission, User};
use crate::utils::validation::{first_blank, parse_id, validate_password};

pub const REQUIRED_FIELDS: &str = "All fields are required.";
pub const USERNAME_TOO_LONG: &str = "Username cannot be longer than 50 characters.";
pub const INVALID_IDS: &str = "City ID and warehouse ID must be numbers.";
pub const DELETE_CONFIRM: &str = "Delete this user?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserKey {
    pub page: u32,
}

/// Formulario de alta; todos los campos son obligatorios
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct UserForm {
    #[validate(length(max = 50, message = "Username cannot be longer than 50 characters."))]
    pub username: String,
    #[validate(custom = "validate_password")]
    pub password: String,
    pub permission: Permission,
    pub email: String,
    pub tel: String,
    pub city_id: String,
    pub address: String,
    pub job: String,
    pub warehouse_id: String,
}

impl UserForm {
    pub fn to_payload(&self) -> Result<NewUser, String> {
        let fields = [
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
            ("email", self.email.as_str()),
            ("tel", self.tel.as_str()),
            ("cityID", self.city_id.as_str()),
            ("address", self.address.as_str()),
            ("job", self.job.as_str()),
            ("warehouseID", self.warehouse_id.as_str()),
        ];
        if first_blank(&fields).is_some() {
            return Err(REQUIRED_FIELDS.to_string());
        }

        if let Err(errors) = self.validate() {
            let field_errors = errors.field_errors();
            for field in ["username", "password"] {
                if let Some(error) = field_errors.get(field).and_then(|errs| errs.first()) {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid {}", field));
                    return Err(message);
                }
            }
        }

        let (Some(city_id), Some(warehouse_id)) = (parse_id(&self.city_id), parse_id(&self.warehouse_id)) else {
            return Err(INVALID_IDS.to_string());
        };

        Ok(NewUser {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
            permission: self.permission,
            email: Some(self.email.trim().to_string()),
            tel: Some(self.tel.trim().to_string()),
            city_id: Some(city_id),
            address: Some(self.address.trim().to_string()),
            job: Some(self.job.trim().to_string()),
            warehouse_id: Some(warehouse_id),
        })
    }
}

pub struct UserController {
    client: Arc<ApiClient>,
    prompt: Arc<dyn Prompt>,
    limit: u32,
    list: ResourceList<User, UserKey>,
    modal: Modal<UserForm, User>,
    pub cascade: CountryCityCascade,
}

impl UserController {
    pub fn new(
        client: Arc<ApiClient>,
        prompt: Arc<dyn Prompt>,
        strict_schemas: bool,
        limit: u32,
    ) -> Self {
        Self {
            client,
            prompt,
            limit,
            list: ResourceList::new(USERS, strict_schemas, UserKey { page: 1 }),
            modal: Modal::Closed,
            cascade: CountryCityCascade::new(),
        }
    }

    pub async fn mount(&mut self) {
        self.refresh().await;
        self.cascade.load_countries(&self.client).await;
    }

    pub async fn refresh(&mut self) -> FetchOutcome {
        let ticket = self.list.begin_fetch();
        let page = ticket.key().page;
        let result = users::get_users(&self.client, Some(page), Some(self.limit))
            .await
            .map(Listing::from);
        self.list.complete(ticket, result)
    }

    pub async fn next_page(&mut self) {
        if self.list.can_next() {
            self.go_to_page(self.list.applied().page + 1).await;
        }
    }

    pub async fn prev_page(&mut self) {
        if self.list.can_prev() {
            self.go_to_page(self.list.applied().page.saturating_sub(1).max(1)).await;
        }
    }

    async fn go_to_page(&mut self, page: u32) {
        if self.list.apply(UserKey { page }) {
            self.refresh().await;
        }
    }

    pub fn open_add(&mut self) {
        self.cascade.reset();
        self.modal = Modal::Add(UserForm::default());
    }

    /// Detalle de un usuario, solo lectura
    pub fn open_view(&mut self, user: &User) {
        self.modal = Modal::View(user.clone());
    }

    pub fn cancel(&mut self) {
        self.modal.close();
    }

    pub fn form_mut(&mut self) -> Option<&mut UserForm> {
        self.modal.draft_mut()
    }

    pub async fn select_country(&mut self, country_id: Option<u64>) {
        if !self.cascade.select_country(&self.client, country_id).await {
            return;
        }
        if let Some(form) = self.modal.draft_mut() {
            form.city_id.clear();
        }
    }

    pub fn select_city(&mut self, city_id: Option<u64>) -> bool {
        if !self.cascade.select_city(city_id) {
            return false;
        }
        if let Some(form) = self.modal.draft_mut() {
            form.city_id = city_id.map(|id| id.to_string()).unwrap_or_default();
        }
        true
    }

    /// Alta de usuario. Devuelve `true` si se creó.
    pub async fn save(&mut self) -> bool {
        let Modal::Add(form) = &self.modal else {
            return false;
        };

        let payload = match form.to_payload() {
            Ok(payload) => payload,
            Err(message) => {
                self.prompt.alert(&message);
                return false;
            }
        };

        match users::add_user(&self.client, &payload).await {
            Ok(_) => {
                self.refresh().await;
                self.modal.close();
                true
            }
            Err(e) => {
                self.prompt.alert(&e.to_string());
                false
            }
        }
    }

    pub async fn delete(&mut self, user_id: u64) -> bool {
        if !self.prompt.confirm(DELETE_CONFIRM) {
            return false;
        }

        match users::delete_user(&self.client, user_id).await {
            Ok(_) => {
                self.refresh().await;
                true
            }
            Err(e) => {
                self.prompt.alert(&e.to_string());
                false
            }
        }
    }

    pub fn phase(&self) -> ListPhase {
        self.list.phase()
    }

    pub fn rows(&self) -> &[User] {
        self.list.rows()
    }

    pub fn error(&self) -> Option<&str> {
        self.list.error()
    }

    pub fn pagination(&self) -> Pagination {
        self.list.pagination()
    }

    pub fn can_prev(&self) -> bool {
        self.list.can_prev()
    }

    pub fn can_next(&self) -> bool {
        self.list.can_next()
    }

    pub fn modal(&self) -> &Modal<UserForm, User> {
        &self.modal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> UserForm {
        UserForm {
            username: "alice".to_string(),
            password: "secret1.".to_string(),
            permission: Permission::Standard,
            email: "alice@example.com".to_string(),
            tel: "05321234567".to_string(),
            city_id: "34".to_string(),
            address: "Halkali Merkez".to_string(),
            job: "Sofor".to_string(),
            warehouse_id: "2".to_string(),
        }
    }

    #[test]
    fn test_blank_address_is_rejected_first() {
        let form = UserForm {
            address: "   ".to_string(),
            password: "weak".to_string(),
            ..complete_form()
        };
        assert_eq!(form.to_payload(), Err(REQUIRED_FIELDS.to_string()));
    }

    #[test]
    fn test_username_length_limit() {
        let form = UserForm {
            username: "a".repeat(51),
            ..complete_form()
        };
        assert_eq!(form.to_payload(), Err(USERNAME_TOO_LONG.to_string()));
    }

    #[test]
    fn test_weak_password_is_rejected() {
        let form = UserForm {
            password: "password".to_string(),
            ..complete_form()
        };
        let error = form.to_payload().unwrap_err();
        assert!(error.starts_with("Password must be 8-64 characters"));
    }

    #[test]
    fn test_non_numeric_ids_are_rejected() {
        let form = UserForm {
            warehouse_id: "ana depo".to_string(),
            ..complete_form()
        };
        assert_eq!(form.to_payload(), Err(INVALID_IDS.to_string()));
    }

    #[test]
    fn test_complete_form_builds_payload() {
        let payload = complete_form().to_payload().unwrap();
        assert_eq!(payload.city_id, Some(34));
        assert_eq!(payload.warehouse_id, Some(2));
        assert_eq!(payload.permission, Permission::Standard);
    }
}
