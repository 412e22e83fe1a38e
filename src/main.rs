use actix_cors::Cors;
use actix_web::{get, http, middleware::NormalizePath, web, App, HttpResponse, HttpServer, Responder};
use coachdesk_backend::{
    background_task::start_purge_task,
    db::postgres::create_pool,
    graceful_shutdown::shutdown_signal,
    handlers::{
        auth::{delete_account, login, logout, me, refresh_token, register},
        batches::{create_batch, delete_batch, get_batch, list_batches, update_batch},
        contents::{
            create_content, delete_content, embed_preview, get_content, list_contents,
            update_content,
        },
        interviews::{
            create_interview, delete_interview, get_interview, list_interviews, update_interview,
        },
        placements::{
            create_placement, delete_placement, export_placements_csv, get_placement,
            list_placements, update_placement,
        },
        resumes::{export_resume_document, export_resume_printable},
        students::{create_student, delete_student, get_student, list_students, update_student},
        system::health_check,
    },
    middlewares::auth::AuthMiddleware,
    settings::AppConfig,
    AppState,
};

#[get("/")]
async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "CoachDesk API",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let config = match AppConfig::new() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        }
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let pool = create_pool(&config.database_url)
        .await
        .expect("Failed to create database connection pool");

    let app_state = web::Data::new(AppState::new(&config, pool.clone()));

    let server_addr = format!("{}:{}", config.host, config.port);
    let cors_origins = config.cors_origins();
    let workers = config.worker_count;

    tracing::info!(
        "🚀 Starting CoachDesk API v{} on {}",
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let app_state_clone = app_state.clone();

    let server = HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allowed_headers(vec![http::header::AUTHORIZATION, http::header::CONTENT_TYPE])
            .max_age(3600);
        for origin in &cors_origins {
            cors = if origin == "*" {
                cors.allow_any_origin()
            } else {
                cors.allowed_origin(origin)
            };
        }

        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(AuthMiddleware)
            .wrap(cors)
            .service(home)
            .service(health_check)
            .service(
                web::scope("/auth")
                    .service(register)
                    .service(login)
                    .service(refresh_token)
                    .service(logout)
                    .service(me)
                    .service(delete_account),
            )
            .service(
                web::scope("/api")
                    .service(create_batch)
                    .service(list_batches)
                    .service(get_batch)
                    .service(update_batch)
                    .service(delete_batch)
                    .service(embed_preview)
                    .service(create_content)
                    .service(list_contents)
                    .service(get_content)
                    .service(update_content)
                    .service(delete_content)
                    .service(create_interview)
                    .service(list_interviews)
                    .service(get_interview)
                    .service(update_interview)
                    .service(delete_interview)
                    .service(create_placement)
                    .service(list_placements)
                    .service(export_placements_csv)
                    .service(get_placement)
                    .service(update_placement)
                    .service(delete_placement)
                    .service(create_student)
                    .service(list_students)
                    .service(get_student)
                    .service(update_student)
                    .service(delete_student)
                    .service(export_resume_document)
                    .service(export_resume_printable),
            )
    })
    .workers(workers)
    .bind(server_addr)?
    .run();

    tokio::spawn(start_purge_task(app_state_clone.repo.clone()));

    tokio::select! {
        res = server => res,
        _ = shutdown_signal() => Ok(()),
    }
}
