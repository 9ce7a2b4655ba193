use std::io::Write;

use env_logger::{Builder, Env, Target};
use mgrs_convert::api::create_router;
use mgrs_convert::ServerConfig;

fn init_logging() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {:5} {}] {}",
                buf.timestamp(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(2);
        }
    };

    let app = create_router(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind port");

    log::info!("MGRS conversion API listening on http://{}", config.bind_addr);
    log::info!("  GET  /api/forward?longitude=<lon>&latitude=<lat>&accuracy=<1-5>");
    log::info!("  GET  /api/inverse?mgrs=<reference>");
    log::info!("  GET  /api/point?mgrs=<reference>");
    log::info!("  POST /api/batch/forward (multipart/form-data: csv file + accuracy)");
    log::info!("  POST /api/batch/point (multipart/form-data: csv file)");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
