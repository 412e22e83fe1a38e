mod domain;
mod infrastructure;
mod interfaces;
pub mod background_task;
pub mod constants;
pub mod errors;
pub mod graceful_shutdown;
pub mod settings;

pub use domain::{document, embed, entities, use_cases};
pub use infrastructure::{assets, auth, db};
pub use interfaces::{handlers, middlewares, repositories};

use assets::FsBadgeSource;
use auth::jwt::JwtService;
use repositories::sqlx_repo::SqlxRepo;
use use_cases::auth::AuthHandler;
use use_cases::resume_export::ResumeExporter;

pub type AppAuthHandler = AuthHandler<SqlxRepo, JwtService>;
pub type AppResumeExporter = ResumeExporter<FsBadgeSource>;

pub struct AppState {
    pub auth_handler: AppAuthHandler,
    pub exporter: AppResumeExporter,
    pub repo: SqlxRepo,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        let jwt_service = JwtService::new(config);
        let repo = SqlxRepo::new(pool);
        let auth_handler = AuthHandler::new(repo.clone(), jwt_service);
        let exporter = ResumeExporter::new(FsBadgeSource::new(&config.badge_image_path));

        AppState {
            auth_handler,
            exporter,
            repo,
        }
    }
}
