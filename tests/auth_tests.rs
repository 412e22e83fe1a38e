use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use coachdesk_backend::auth::jwt::JwtService;
use coachdesk_backend::auth::password::hash_password;
use coachdesk_backend::entities::user::{LoginUser, NewUser, User, UserInsert, UserRole};
use coachdesk_backend::errors::{AppError, AuthError};
use coachdesk_backend::repositories::token::TokenServiceRepository;
use coachdesk_backend::repositories::user::UserRepository;
use coachdesk_backend::settings::{AppConfig, AppEnvironment};
use coachdesk_backend::use_cases::auth::AuthHandler;

mock! {
    pub UserRepo {}

    #[async_trait::async_trait]
    impl UserRepository for UserRepo {
        async fn check_connection(&self) -> Result<(), AppError>;
        async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
        async fn get_user_by_id(&self, id: &Uuid) -> Result<Option<User>, AppError>;
        async fn create_user(&self, user: &UserInsert) -> Result<Uuid, AppError>;
        async fn delete_user(&self, id: &Uuid, deleted_by: &Uuid) -> Result<(), AppError>;
        async fn purge_soft_deleted_users(&self) -> Result<u64, AppError>;
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        name: "test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        worker_count: 1,
        database_url: "postgres://unused".to_string(),
        cors_allowed_origins: vec![],
        jwt_secret: "test_jwt_secret_that_is_long_enough_0001".to_string(),
        jwt_expiration_minutes: 15,
        refresh_token_secret: "test_refresh_secret_that_is_long_0002".to_string(),
        refresh_token_exp_days: 7,
        badge_image_path: "assets/badge.png".to_string(),
    }
}

fn jwt_service() -> JwtService {
    JwtService::new(&test_config())
}

fn stored_user(email: &str, password: &str, role: UserRole) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        email: email.to_string(),
        username: None,
        password_hash: hash_password(password).expect("hashing works"),
        role,
        created_at: now,
        updated_at: now,
        deleted_at: None,
    }
}

const STRONG_PASSWORD: &str = "Str0ng!Passw0rd#77";

#[tokio::test]
async fn register_creates_user_with_hashed_password() {
    let mut repo = MockUserRepo::new();
    let id = Uuid::new_v4();
    repo.expect_create_user()
        .withf(|insert: &UserInsert| {
            insert.email == "new@test.com"
                && insert.role == UserRole::Student
                && insert.password_hash != STRONG_PASSWORD
        })
        .returning(move |_| Ok(id));

    let handler = AuthHandler::new(repo, jwt_service());

    let result = handler
        .register(NewUser {
            email: "new@test.com".to_string(),
            username: Some("newbie".to_string()),
            password: STRONG_PASSWORD.to_string(),
            role: UserRole::Student,
        })
        .await
        .expect("registration succeeds");

    assert_eq!(result.id, id);
}

#[tokio::test]
async fn register_rejects_weak_password() {
    let handler = AuthHandler::new(MockUserRepo::new(), jwt_service());

    let result = handler
        .register(NewUser {
            email: "weak@test.com".to_string(),
            username: None,
            password: "password".to_string(),
            role: UserRole::Student,
        })
        .await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn login_issues_tokens_that_round_trip() {
    let email = "valid@test.com";
    let user = stored_user(email, STRONG_PASSWORD, UserRole::Admin);

    let mut repo = MockUserRepo::new();
    repo.expect_get_user_by_email()
        .withf(move |e| e == email)
        .return_once(move |_| Ok(Some(user)));

    let handler = AuthHandler::new(repo, jwt_service());

    let tokens = handler
        .login(LoginUser {
            email: email.to_string(),
            password: STRONG_PASSWORD.to_string(),
        })
        .await
        .expect("login succeeds");

    assert_eq!(tokens.token_type, "Bearer");

    let decoded = jwt_service()
        .decode_jwt(&tokens.access_token)
        .expect("access token decodes");
    assert_eq!(decoded.claims.email, email);
    assert_eq!(decoded.claims.role, UserRole::Admin);
}

#[tokio::test]
async fn login_rejects_wrong_password() {
    let email = "valid@test.com";
    let user = stored_user(email, STRONG_PASSWORD, UserRole::Student);

    let mut repo = MockUserRepo::new();
    repo.expect_get_user_by_email()
        .return_once(move |_| Ok(Some(user)));

    let handler = AuthHandler::new(repo, jwt_service());

    let result = handler
        .login(LoginUser {
            email: email.to_string(),
            password: "Wrong!Passw0rd#77".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AuthError::WrongCredentials)));
}

#[tokio::test]
async fn login_rejects_unknown_email() {
    let mut repo = MockUserRepo::new();
    repo.expect_get_user_by_email().returning(|_| Ok(None));

    let handler = AuthHandler::new(repo, jwt_service());

    let result = handler
        .login(LoginUser {
            email: "nobody@test.com".to_string(),
            password: STRONG_PASSWORD.to_string(),
        })
        .await;

    assert!(matches!(result, Err(AuthError::WrongCredentials)));
}

#[tokio::test]
async fn refresh_token_issues_new_pair() {
    let user = stored_user("valid@test.com", STRONG_PASSWORD, UserRole::Student);
    let user_id = user.id;

    let service = jwt_service();
    let refresh = service
        .create_refresh_jwt(&user_id)
        .expect("refresh token created");

    let mut repo = MockUserRepo::new();
    repo.expect_get_user_by_id()
        .withf(move |id| *id == user_id)
        .return_once(move |_| Ok(Some(user)));

    let handler = AuthHandler::new(repo, jwt_service());

    let tokens = handler
        .refresh_token(&refresh)
        .await
        .expect("refresh succeeds");
    assert!(!tokens.access_token.is_empty());
}

#[tokio::test]
async fn admin_can_delete_any_account() {
    let admin = stored_user("admin@test.com", STRONG_PASSWORD, UserRole::Admin);
    let admin_id = admin.id;
    let target_id = Uuid::new_v4();

    let mut repo = MockUserRepo::new();
    repo.expect_delete_user()
        .withf(move |id, deleted_by| *id == target_id && *deleted_by == admin_id)
        .returning(|_, _| Ok(()));

    let handler = AuthHandler::new(repo, jwt_service());

    handler
        .delete_user(target_id, &admin)
        .await
        .expect("admin deletion succeeds");
}

#[tokio::test]
async fn student_cannot_delete_another_account() {
    let student = stored_user("student@test.com", STRONG_PASSWORD, UserRole::Student);

    // No delete_user expectation: reaching the repository would fail the test.
    let handler = AuthHandler::new(MockUserRepo::new(), jwt_service());

    let result = handler.delete_user(Uuid::new_v4(), &student).await;
    assert!(matches!(result, Err(AppError::ForbiddenAccess)));
}

#[tokio::test]
async fn student_can_delete_own_account() {
    let student = stored_user("student@test.com", STRONG_PASSWORD, UserRole::Student);
    let student_id = student.id;

    let mut repo = MockUserRepo::new();
    repo.expect_delete_user()
        .withf(move |id, deleted_by| *id == student_id && *deleted_by == student_id)
        .returning(|_, _| Ok(()));

    let handler = AuthHandler::new(repo, jwt_service());

    handler
        .delete_user(student_id, &student)
        .await
        .expect("self deletion succeeds");
}

#[tokio::test]
async fn access_token_is_not_accepted_as_refresh_token() {
    let user = stored_user("valid@test.com", STRONG_PASSWORD, UserRole::Student);

    let service = jwt_service();
    let access = service.create_jwt(&user).expect("access token created");

    let handler = AuthHandler::new(MockUserRepo::new(), jwt_service());

    let result = handler.refresh_token(&access).await;
    assert!(result.is_err(), "access token must not refresh a session");
}
