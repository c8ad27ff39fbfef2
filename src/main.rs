use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use skill_match::config::{LogFormat, Settings};
use skill_match::core::{CompatibilityScorer, ScorePipeline};
use skill_match::error::{handle_json_payload_error, handle_query_payload_error};
use skill_match::routes::{self, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    // Initialize logging; RUST_LOG takes precedence over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match settings.logging.format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Compact => subscriber.compact().init(),
    }

    info!("Starting Skill Match scoring service...");

    let weights = settings.score_weights();
    let pipeline = ScorePipeline::new(weights, settings.scoring.required_logs);
    let scorer = CompatibilityScorer::new(settings.matching.parallel_threshold);

    info!("Score pipeline initialized with weights: {:?}", weights);
    info!(
        "Compatibility scorer initialized (parallel from {} candidates)",
        scorer.parallel_threshold()
    );

    // Build application state
    let app_state = AppState {
        scorer,
        pipeline,
        default_limit: settings.matching.default_limit,
        max_limit: settings.matching.max_limit,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
