//! Server construction and route wiring.

use actix_web::dev::Server;
use actix_web::http::header;
use actix_web::{App, HttpResponse, HttpServer, web};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::doc::ApiDoc;
use crate::inbound::http::{greeting, health, users};
use crate::middleware::RequestTrace;
use crate::outbound::persistence::Store;

/// Construct an HTTP server over the given store and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(store: Store, config: &AppConfig) -> std::io::Result<Server> {
    let store_data = web::Data::new(store);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(store_data.clone())
            .wrap(RequestTrace)
            .service(greeting::index)
            .service(health::health)
            .service(users::list_users)
            .route("/docs", web::get().to(docs_redirect))
            .service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()))
    })
    .bind(config.bind_addr())?
    .run();
    Ok(server)
}

/// Send `/docs` to the Swagger UI index under `/docs/`.
async fn docs_redirect() -> HttpResponse {
    HttpResponse::PermanentRedirect()
        .insert_header((header::LOCATION, "/docs/"))
        .finish()
}
