//! User registry service.
//!
//! # Responsibility
//! - Own the in-memory user collection, keyed by user id.
//! - Provide the lookup-or-fail contract the lending service consumes.
//! - Mutate `name`/`email` in place; identity and registration are fixed.
//!
//! # Invariants
//! - Iteration order is insertion order.
//! - Duplicate ids are accepted; lookups resolve to the first match.
//! - Update/remove paths resolve the user exactly like `user_by_id`, so
//!   their not-found failures read the same.

use crate::model::{require_text, User};
use crate::service::{ServiceError, ServiceResult};
use log::info;

/// In-memory user registry.
#[derive(Debug, Default)]
pub struct UserService {
    users: Vec<User>,
}

impl UserService {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a user registered now, after validating every required field.
    pub fn add_user(&mut self, id: &str, name: &str, email: &str) -> ServiceResult<()> {
        let user = User::new(id, name, email);
        user.validate()?;
        self.users.push(user);
        info!("event=user_added module=registry status=ok user_id={id}");
        Ok(())
    }

    /// Adds a user with an explicit registration time in epoch milliseconds.
    pub fn add_user_with_register_date(
        &mut self,
        id: &str,
        name: &str,
        email: &str,
        register_date: i64,
    ) -> ServiceResult<()> {
        let user = User::with_register_date(id, name, email, register_date);
        user.validate()?;
        self.users.push(user);
        info!("event=user_added module=registry status=ok user_id={id}");
        Ok(())
    }

    /// Returns the first user matching `id`.
    pub fn user_by_id(&self, id: &str) -> ServiceResult<&User> {
        require_text("id", id)?;
        let index = self.position(id)?;
        Ok(&self.users[index])
    }

    /// Replaces the email of the first user matching `id`.
    pub fn update_user_email(&mut self, id: &str, email: &str) -> ServiceResult<()> {
        require_text("id", id)?;
        require_text("email", email)?;
        let index = self.position(id)?;
        self.users[index].email = email.to_string();
        Ok(())
    }

    /// Replaces the name of the first user matching `id`.
    pub fn update_user_name(&mut self, id: &str, name: &str) -> ServiceResult<()> {
        require_text("id", id)?;
        require_text("name", name)?;
        let index = self.position(id)?;
        self.users[index].name = name.to_string();
        Ok(())
    }

    /// Removes the first user matching `id`.
    pub fn remove_user(&mut self, id: &str) -> ServiceResult<()> {
        require_text("id", id)?;
        let index = self.position(id)?;
        self.users.remove(index);
        info!("event=user_removed module=registry status=ok user_id={id}");
        Ok(())
    }

    /// All users in insertion order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    fn position(&self, id: &str) -> ServiceResult<usize> {
        self.users
            .iter()
            .position(|user| user.id == id)
            .ok_or_else(|| {
                ServiceError::NotFound(format!("user with id `{id}` was not found"))
            })
    }
}
