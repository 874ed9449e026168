use std::env;
use std::net::SocketAddr;

use chrono::NaiveDate;
use dotenvy::dotenv;
use sqlx::sqlite::SqlitePoolOptions;

use attendance_register::web::{app, AppState};

const DEFAULT_SEMESTER_START: &str = "2026-01-19";

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt::init();

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let session_secret = env::var("SESSION_SECRET").expect("SESSION_SECRET must be set");

    let semester_start: NaiveDate = env::var("SEMESTER_START")
        .unwrap_or_else(|_| DEFAULT_SEMESTER_START.to_string())
        .parse()
        .expect("SEMESTER_START must be an ISO date (YYYY-MM-DD)");

    let pool = SqlitePoolOptions::new()
        .connect(&db_url)
        .await
        .expect("failed to connect to the database");

    let state = AppState {
        pool,
        session_secret,
        semester_start,
    };
    let app = app(state);

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8000);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("invalid HOST/PORT");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!(
                "could not bind {}: {}. trying fallback {}:{}",
                addr,
                e,
                host,
                port + 1
            );
            let fallback: SocketAddr = format!("{}:{}", host, port + 1)
                .parse()
                .expect("invalid fallback address");
            tokio::net::TcpListener::bind(fallback)
                .await
                .expect("failed to bind fallback port")
        }
    };

    let bound_addr = listener.local_addr().unwrap();
    tracing::info!("attendance register listening on http://{}", bound_addr);

    axum::serve(listener, app).await.unwrap();
}
