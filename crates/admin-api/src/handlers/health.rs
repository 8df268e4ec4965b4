use axum::Json;
use serde_json::{json, Value};

/// Static demo payload on the root route, kept for compatibility with
/// the frontend's connectivity probe.
pub async fn demo() -> Json<Value> {
    Json(json!({
        "code": 1,
        "data": {
            "city": "New York",
            "country": "USA",
            "zipcode": "10001",
            "status": "success",
            "message": "Hello World!",
            "id": 123,
            "username": "john",
            "email": "john@example.com"
        }
    }))
}
