//! In-Memory Repository Implementation
//!
//! Process-local user store for tests and database-less runs. Same
//! contract as the PostgreSQL store, including email uniqueness.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{UserId, email::Email, page::PageRequest};
use crate::error::{AuthError, AuthResult};

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> AuthResult<User> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(AuthError::DuplicateEmail);
        }
        users.insert(user.user_id, user.clone());

        Ok(user.clone())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.users.read().await.get(user_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == *email).cloned())
    }

    async fn update(&self, user: &User) -> AuthResult<User> {
        let mut users = self.users.write().await;

        let stored = users.get_mut(&user.user_id).ok_or(AuthError::UserNotFound)?;
        *stored = user.clone();

        Ok(user.clone())
    }

    async fn delete(&self, user_id: &UserId) -> AuthResult<()> {
        self.users.write().await.remove(user_id);
        Ok(())
    }

    async fn count(&self) -> AuthResult<i64> {
        Ok(self.users.read().await.len() as i64)
    }

    async fn list_page(&self, page: PageRequest) -> AuthResult<Vec<User>> {
        let users = self.users.read().await;

        let mut all: Vec<&User> = users.values().collect();
        all.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.user_id.as_uuid().cmp(b.user_id.as_uuid()))
        });

        Ok(all
            .into_iter()
            .skip(page.skip() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{person_name::PersonName, user_password::UserPassword};
    use chrono::{TimeDelta, Utc};

    fn user(email: &str) -> User {
        User::new(
            Email::new(email).unwrap(),
            PersonName::new("first_name", "T").unwrap(),
            PersonName::new("last_name", "U").unwrap(),
            UserPassword::from_db("unused"),
        )
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryUserRepository::new();
        let u = user("a@x.com");
        repo.insert(&u).await.unwrap();

        let by_id = repo.find_by_id(&u.user_id).await.unwrap().unwrap();
        assert_eq!(by_id.email, u.email);

        let by_email = repo
            .find_by_email(&Email::new("A@X.com").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_email.user_id, u.user_id);
    }

    #[tokio::test]
    async fn test_duplicate_email() {
        let repo = InMemoryUserRepository::new();
        repo.insert(&user("a@x.com")).await.unwrap();

        let result = repo.insert(&user("A@x.COM")).await;
        assert!(matches!(result, Err(AuthError::DuplicateEmail)));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_row() {
        let repo = InMemoryUserRepository::new();
        let result = repo.update(&user("a@x.com")).await;
        assert!(matches!(result, Err(AuthError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_list_page_newest_first() {
        let repo = InMemoryUserRepository::new();
        let base = Utc::now();
        for i in 0..5 {
            let mut u = user(&format!("u{i}@x.com"));
            u.created_at = base + TimeDelta::seconds(i);
            repo.insert(&u).await.unwrap();
        }

        let page = repo
            .list_page(PageRequest::new(Some(1), Some(2)).unwrap())
            .await
            .unwrap();
        let emails: Vec<&str> = page.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails, vec!["u3@x.com", "u2@x.com"]);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryUserRepository::new();
        let u = user("a@x.com");
        repo.insert(&u).await.unwrap();

        repo.delete(&u.user_id).await.unwrap();
        repo.delete(&u.user_id).await.unwrap();
        assert!(repo.find_by_id(&u.user_id).await.unwrap().is_none());
    }
}
