use tracing::error;

use crate::domain::{
    authentication::{
        entities::{
            AccessToken, AuthorizeRequestInput, AuthorizeRequestOutput, LoginInput, RegisterInput,
        },
        ports::AuthService,
        value_objects::{Identity, Role},
    },
    category::ports::CategoryRepository,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    jwt::ports::TokenRepository,
    product::ports::ProductRepository,
    user::{entities::User, ports::UserRepository, value_objects::CreateUserRequest},
};

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl<C, P, U, H, T, HC> AuthService for Service<C, P, U, H, T, HC>
where
    C: CategoryRepository,
    P: ProductRepository,
    U: UserRepository,
    H: HasherRepository,
    T: TokenRepository,
    HC: HealthCheckRepository,
{
    async fn register(&self, input: RegisterInput) -> Result<User, CoreError> {
        let password_hash = self.hasher_repository.hash_password(&input.password)?;

        self.user_repository
            .create_user(CreateUserRequest {
                name: input.name,
                email: normalize_email(&input.email),
                password_hash,
                role: Role::User,
            })
            .await
    }

    async fn login(&self, input: LoginInput) -> Result<AccessToken, CoreError> {
        let user = self
            .user_repository
            .get_by_email(normalize_email(&input.email))
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        let valid = self
            .hasher_repository
            .verify_password(&input.password, &user.password_hash)?;

        if !valid {
            return Err(CoreError::InvalidCredentials);
        }

        let jwt = self
            .token_repository
            .generate_access_token(user.id, user.role)?;

        Ok(AccessToken {
            access_token: jwt.token,
            token_type: "Bearer".to_string(),
            expires_at: jwt.expires_at,
        })
    }

    async fn authorize_request(
        &self,
        input: AuthorizeRequestInput,
    ) -> Result<AuthorizeRequestOutput, CoreError> {
        let claims = self.token_repository.verify_access_token(&input.token)?;

        let role = claims.role.parse::<Role>().map_err(|_| {
            error!("Token carries an unknown role: {}", claims.role);
            CoreError::InvalidToken
        })?;

        Ok(AuthorizeRequestOutput {
            identity: Identity::new(claims.sub, role),
        })
    }

    async fn get_current_user(&self, identity: Identity) -> Result<User, CoreError> {
        self.user_repository
            .get_by_id(identity.id())
            .await?
            .ok_or(CoreError::UserNotFound)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::predicate::eq;
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        common::services::test_support::Mocks,
        jwt::entities::{Jwt, JwtClaim},
    };

    fn stored_user() -> User {
        User::new(
            "Jane".to_string(),
            "jane@example.com".to_string(),
            "$argon2id$hash".to_string(),
            Role::Admin,
        )
    }

    #[tokio::test]
    async fn test_register_normalizes_email_and_assigns_user_role() {
        let mut mocks = Mocks::default();
        mocks
            .hasher
            .expect_hash_password()
            .returning(|_| Ok("hashed".to_string()));
        mocks
            .users
            .expect_create_user()
            .withf(|request| {
                request.email == "jane@example.com"
                    && request.role == Role::User
                    && request.password_hash == "hashed"
            })
            .times(1)
            .returning(|request| {
                Box::pin(async move {
                    Ok(User::new(
                        request.name,
                        request.email,
                        request.password_hash,
                        request.role,
                    ))
                })
            });

        let service = mocks.into_service();
        let user = service
            .register(RegisterInput {
                name: "Jane".to_string(),
                email: "  Jane@Example.COM ".to_string(),
                password: "secret-password".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.role, Role::User);
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_password() {
        let mut mocks = Mocks::default();
        mocks
            .users
            .expect_get_by_email()
            .with(eq("jane@example.com".to_string()))
            .returning(|_| Box::pin(async { Ok(Some(stored_user())) }));
        mocks
            .hasher
            .expect_verify_password()
            .returning(|_, _| Ok(false));
        mocks.tokens.expect_generate_access_token().never();

        let service = mocks.into_service();
        let result = service
            .login(LoginInput {
                email: "jane@example.com".to_string(),
                password: "wrong".to_string(),
            })
            .await;

        assert_eq!(result, Err(CoreError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_unknown_email_is_invalid_credentials() {
        let mut mocks = Mocks::default();
        mocks
            .users
            .expect_get_by_email()
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = mocks.into_service();
        let result = service
            .login(LoginInput {
                email: "ghost@example.com".to_string(),
                password: "whatever".to_string(),
            })
            .await;

        assert_eq!(result, Err(CoreError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_issues_bearer_token() {
        let expires_at = Utc::now();
        let mut mocks = Mocks::default();
        mocks
            .users
            .expect_get_by_email()
            .returning(|_| Box::pin(async { Ok(Some(stored_user())) }));
        mocks
            .hasher
            .expect_verify_password()
            .returning(|_, _| Ok(true));
        mocks
            .tokens
            .expect_generate_access_token()
            .withf(|_, role| *role == Role::Admin)
            .returning(move |_, _| {
                Ok(Jwt {
                    token: "signed".to_string(),
                    expires_at,
                })
            });

        let service = mocks.into_service();
        let token = service
            .login(LoginInput {
                email: "jane@example.com".to_string(),
                password: "secret-password".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(token.access_token, "signed");
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_at, expires_at);
    }

    #[tokio::test]
    async fn test_authorize_request_rejects_unknown_role() {
        let mut mocks = Mocks::default();
        mocks.tokens.expect_verify_access_token().returning(|_| {
            Ok(JwtClaim {
                sub: Uuid::new_v4(),
                role: "superuser".to_string(),
                iat: 0,
                exp: 0,
            })
        });

        let service = mocks.into_service();
        let result = service
            .authorize_request(AuthorizeRequestInput {
                token: "token".to_string(),
            })
            .await;

        assert!(matches!(result, Err(CoreError::InvalidToken)));
    }

    #[tokio::test]
    async fn test_authorize_request_builds_identity_from_claims() {
        let user_id = Uuid::new_v4();
        let mut mocks = Mocks::default();
        mocks.tokens.expect_verify_access_token().returning(move |_| {
            Ok(JwtClaim {
                sub: user_id,
                role: "admin".to_string(),
                iat: 0,
                exp: 0,
            })
        });

        let service = mocks.into_service();
        let output = service
            .authorize_request(AuthorizeRequestInput {
                token: "token".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(output.identity, Identity::new(user_id, Role::Admin));
    }
}
