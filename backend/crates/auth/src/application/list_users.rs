//! List Users Use Case (admin only)

use std::sync::Arc;

use crate::application::admin_policy::AdminPolicy;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::page::PageRequest;
use crate::error::AuthResult;

pub struct ListUsersOutput {
    pub total: i64,
    pub items: Vec<User>,
}

pub struct ListUsersUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    admin: Arc<AdminPolicy>,
}

impl<R> ListUsersUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, admin: Arc<AdminPolicy>) -> Self {
        Self { repo, admin }
    }

    /// Admin check comes before pagination is validated
    pub async fn execute(
        &self,
        current: &User,
        skip: Option<i64>,
        limit: Option<i64>,
    ) -> AuthResult<ListUsersOutput> {
        self.admin.require_admin(current)?;
        let page = PageRequest::new(skip, limit)?;

        let total = self.repo.count().await?;
        let items = self.repo.list_page(page).await?;

        tracing::info!(
            admin_id = %current.user_id,
            skip = page.skip(),
            limit = page.limit(),
            total,
            "Users listed"
        );

        Ok(ListUsersOutput { total, items })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::admin_policy::AdminAllowList;
    use crate::domain::value_object::{
        email::Email, person_name::PersonName, user_password::UserPassword,
    };
    use crate::error::AuthError;
    use crate::infra::memory::InMemoryUserRepository;

    fn user(email: &str) -> User {
        User::new(
            Email::new(email).unwrap(),
            PersonName::new("first_name", "T").unwrap(),
            PersonName::new("last_name", "U").unwrap(),
            UserPassword::from_db("unused"),
        )
    }

    async fn setup() -> (ListUsersUseCase<InMemoryUserRepository>, User, User) {
        let repo = Arc::new(InMemoryUserRepository::new());
        let admin = user("root@x.com");
        let member = user("member@x.com");
        repo.insert(&admin).await.unwrap();
        repo.insert(&member).await.unwrap();
        for i in 0..3 {
            repo.insert(&user(&format!("u{i}@x.com"))).await.unwrap();
        }

        let policy = Arc::new(AdminPolicy::new(AdminAllowList::parse("root@x.com")));
        (ListUsersUseCase::new(repo, policy), admin, member)
    }

    #[tokio::test]
    async fn test_admin_lists_page() {
        let (use_case, admin, _) = setup().await;
        let output = use_case.execute(&admin, Some(1), Some(2)).await.unwrap();

        assert_eq!(output.total, 5);
        assert_eq!(output.items.len(), 2);
    }

    #[tokio::test]
    async fn test_non_admin_forbidden() {
        let (use_case, _, member) = setup().await;
        let result = use_case.execute(&member, None, None).await;
        assert!(matches!(result, Err(AuthError::Forbidden)));
    }

    #[tokio::test]
    async fn test_bad_page() {
        let (use_case, admin, _) = setup().await;
        let result = use_case.execute(&admin, None, Some(500)).await;
        assert!(matches!(result, Err(AuthError::Validation(_))));
    }
}
