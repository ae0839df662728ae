//! AuthService - credential verification and token handling.

use std::sync::Arc;

use crate::application::auth::{AuthError, CurrentUserView};
use crate::domain::auth::AuthToken;
use crate::domain::foundation::UserId;
use crate::domain::user::User;
use crate::ports::{PasswordHasher, TokenClaims, TokenProvider, UserRepository};

/// Authentication service: verifies credentials, issues and resolves
/// access tokens.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
    token_expiry_minutes: i64,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenProvider>,
        token_expiry_minutes: i64,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
            token_expiry_minutes,
        }
    }

    /// Verifies credentials and returns the user on success.
    ///
    /// Unknown email, wrong password, and an inactive account all fail the
    /// same way.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::Authentication)?;

        if !self.hasher.verify(password, &user.hashed_password) {
            return Err(AuthError::Authentication);
        }

        user.ensure_active().map_err(|_| AuthError::Authentication)?;

        Ok(user)
    }

    /// Issues a bearer token for an authenticated user.
    pub fn create_access_token(&self, user: &User) -> Result<AuthToken, AuthError> {
        let claims = TokenClaims {
            sub: user.id.to_string(),
            email: user.email.clone(),
        };
        let token = self.tokens.encode(&claims, self.token_expiry_minutes)?;
        Ok(AuthToken::bearer(token))
    }

    /// Resolves a presented token back to its user.
    ///
    /// Decode failures map to `Token`; a user that no longer exists or has
    /// been deactivated since issuance maps to `Authentication`.
    pub async fn user_from_token(&self, token: &str) -> Result<User, AuthError> {
        let claims = self
            .tokens
            .decode(token)
            .map_err(|e| AuthError::Token(e.to_string()))?;

        let user_id: UserId = claims
            .sub
            .parse()
            .map_err(|_| AuthError::Token("malformed subject claim".to_string()))?;

        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::Authentication)?;

        user.ensure_active().map_err(|_| AuthError::Authentication)?;

        Ok(user)
    }

    /// Projects a user into the profile view returned by `/me`.
    pub fn current_user_view(&self, user: &User) -> CurrentUserView {
        CurrentUserView::from(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, Timestamp};
    use crate::domain::user::RoleName;
    use crate::ports::TokenDecodeError;
    use async_trait::async_trait;

    struct MockUserRepository {
        users: Vec<User>,
        fail: bool,
    }

    impl MockUserRepository {
        fn with_users(users: Vec<User>) -> Self {
            Self { users, fail: false }
        }

        fn failing() -> Self {
            Self {
                users: Vec::new(),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
            if self.fail {
                return Err(DomainError::database("simulated failure"));
            }
            Ok(self.users.iter().find(|u| u.email == email).cloned())
        }

        async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
            if self.fail {
                return Err(DomainError::database("simulated failure"));
            }
            Ok(self.users.iter().find(|u| u.id == id).cloned())
        }
    }

    /// Treats the stored hash as `hash:<plain>`.
    struct MockHasher;

    impl PasswordHasher for MockHasher {
        fn hash(&self, plain: &str) -> Result<String, DomainError> {
            Ok(format!("hash:{plain}"))
        }

        fn verify(&self, plain: &str, hashed: &str) -> bool {
            hashed == format!("hash:{plain}")
        }
    }

    /// Encodes claims as `sub|email`; `expired` makes every decode fail.
    struct MockTokens {
        expired: bool,
    }

    impl MockTokens {
        fn working() -> Self {
            Self { expired: false }
        }

        fn expiring() -> Self {
            Self { expired: true }
        }
    }

    impl TokenProvider for MockTokens {
        fn encode(
            &self,
            claims: &TokenClaims,
            _expires_in_minutes: i64,
        ) -> Result<String, DomainError> {
            Ok(format!("{}|{}", claims.sub, claims.email))
        }

        fn decode(&self, token: &str) -> Result<TokenClaims, TokenDecodeError> {
            if self.expired {
                return Err(TokenDecodeError::Expired);
            }
            let (sub, email) = token.split_once('|').ok_or(TokenDecodeError::Invalid)?;
            Ok(TokenClaims {
                sub: sub.to_string(),
                email: email.to_string(),
            })
        }
    }

    fn test_user(id: i64, email: &str, active: bool) -> User {
        let now = Timestamp::now();
        User {
            id: UserId::new(id),
            email: email.to_string(),
            full_name: "Test User".to_string(),
            hashed_password: "hash:secret".to_string(),
            is_active: active,
            is_superuser: false,
            timezone: "UTC".to_string(),
            roles: vec![RoleName::Sales],
            created_at: now,
            updated_at: now,
        }
    }

    fn service(repo: MockUserRepository, tokens: MockTokens) -> AuthService {
        AuthService::new(Arc::new(repo), Arc::new(MockHasher), Arc::new(tokens), 30)
    }

    #[tokio::test]
    async fn authenticates_with_valid_credentials() {
        let svc = service(
            MockUserRepository::with_users(vec![test_user(1, "a@example.com", true)]),
            MockTokens::working(),
        );

        let user = svc.authenticate("a@example.com", "secret").await.unwrap();
        assert_eq!(user.id, UserId::new(1));
    }

    #[tokio::test]
    async fn rejects_unknown_email() {
        let svc = service(
            MockUserRepository::with_users(vec![]),
            MockTokens::working(),
        );

        let result = svc.authenticate("nobody@example.com", "secret").await;
        assert!(matches!(result, Err(AuthError::Authentication)));
    }

    #[tokio::test]
    async fn rejects_wrong_password() {
        let svc = service(
            MockUserRepository::with_users(vec![test_user(1, "a@example.com", true)]),
            MockTokens::working(),
        );

        let result = svc.authenticate("a@example.com", "wrong").await;
        assert!(matches!(result, Err(AuthError::Authentication)));
    }

    #[tokio::test]
    async fn rejects_inactive_user_with_same_error_as_bad_credentials() {
        let svc = service(
            MockUserRepository::with_users(vec![test_user(1, "a@example.com", false)]),
            MockTokens::working(),
        );

        let result = svc.authenticate("a@example.com", "secret").await;
        assert!(matches!(result, Err(AuthError::Authentication)));
    }

    #[tokio::test]
    async fn surfaces_repository_failure_as_infrastructure() {
        let svc = service(MockUserRepository::failing(), MockTokens::working());

        let result = svc.authenticate("a@example.com", "secret").await;
        assert!(matches!(result, Err(AuthError::Infrastructure(_))));
    }

    #[tokio::test]
    async fn issued_token_resolves_back_to_user() {
        let svc = service(
            MockUserRepository::with_users(vec![test_user(42, "a@example.com", true)]),
            MockTokens::working(),
        );

        let user = svc.authenticate("a@example.com", "secret").await.unwrap();
        let token = svc.create_access_token(&user).unwrap();
        assert_eq!(token.token_type, "bearer");

        let resolved = svc.user_from_token(&token.access_token).await.unwrap();
        assert_eq!(resolved.id, UserId::new(42));
    }

    #[tokio::test]
    async fn expired_token_is_a_token_error() {
        let svc = service(
            MockUserRepository::with_users(vec![test_user(1, "a@example.com", true)]),
            MockTokens::expiring(),
        );

        let result = svc.user_from_token("1|a@example.com").await;
        assert!(matches!(result, Err(AuthError::Token(_))));
    }

    #[tokio::test]
    async fn non_integer_subject_is_a_token_error() {
        let svc = service(
            MockUserRepository::with_users(vec![test_user(1, "a@example.com", true)]),
            MockTokens::working(),
        );

        let result = svc.user_from_token("not-a-number|a@example.com").await;
        assert!(matches!(result, Err(AuthError::Token(_))));
    }

    #[tokio::test]
    async fn token_for_vanished_user_fails_authentication() {
        let svc = service(
            MockUserRepository::with_users(vec![]),
            MockTokens::working(),
        );

        let result = svc.user_from_token("7|gone@example.com").await;
        assert!(matches!(result, Err(AuthError::Authentication)));
    }

    #[tokio::test]
    async fn token_for_deactivated_user_fails_authentication() {
        let svc = service(
            MockUserRepository::with_users(vec![test_user(7, "a@example.com", false)]),
            MockTokens::working(),
        );

        let result = svc.user_from_token("7|a@example.com").await;
        assert!(matches!(result, Err(AuthError::Authentication)));
    }

    #[test]
    fn current_user_view_carries_roles_as_strings() {
        let user = test_user(1, "a@example.com", true);
        let view = CurrentUserView::from(&user);
        assert_eq!(view.roles, vec!["sales".to_string()]);
        assert!(!view.is_superuser);
    }
}
