use axum::{Json, Router, http::StatusCode, routing::post};
use tower_http::cors::{Any, CorsLayer};

use crate::data::{Timetable, TimetableRequest};
use crate::solver;

async fn generate_handler(
    Json(input): Json<TimetableRequest>,
) -> Result<Json<Timetable>, (StatusCode, String)> {
    match solver::generate(&input, &mut rand::rng()) {
        Ok(timetable) => Ok(Json(timetable)),
        Err(e) => Err((StatusCode::BAD_REQUEST, e.to_string())),
    }
}

pub async fn run_server() {
    // the browser front end posts from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/v1/timetable/generate", post(generate_handler))
        .layer(cors);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:8080")
        .await
        .unwrap();

    println!("Server running at http://{}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
