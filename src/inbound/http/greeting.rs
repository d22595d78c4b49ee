//! Root greeting endpoint.

use actix_web::{HttpResponse, Responder, get};

const GREETING: &str = "Hello World from the user service!";

/// Static greeting at the service root.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain")
    ),
    tags = ["meta"],
    operation_id = "index"
)]
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(GREETING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test as actix_test};

    #[actix_web::test]
    async fn index_returns_the_greeting() {
        let app = actix_test::init_service(App::new().service(index)).await;

        let request = actix_test::TestRequest::get().uri("/").to_request();
        let body = actix_test::call_and_read_body(&app, request).await;

        assert_eq!(body, GREETING.as_bytes());
    }
}
