//! Welcome route served at `/`.

use actix_web::{get, web};

use crate::inbound::http::schemas::MessageResponse;

/// Greeting returned by `GET /`.
pub const WELCOME_MESSAGE: &str = "Welcome to the Wics API";

/// Confirm the API is reachable.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Greeting", body = MessageResponse)),
    tags = ["root"],
    operation_id = "welcome"
)]
#[get("/")]
pub async fn welcome() -> web::Json<MessageResponse> {
    web::Json(MessageResponse {
        message: WELCOME_MESSAGE.to_owned(),
    })
}
