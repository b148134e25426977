use axum::Json;

use super::types::GreetingRequest;

pub async fn greet(Json(req): Json<GreetingRequest>) -> String {
    req.greeting()
}

pub async fn hello() -> &'static str {
    "Hello, World! Mani..."
}

pub async fn hello1() -> &'static str {
    "Hello, World! Karthik..."
}
