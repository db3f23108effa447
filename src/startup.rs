use actix_web::dev::Server;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;

use crate::auth::{roles, TokenCodec};
use crate::middleware::JwtMiddleware;
use crate::routes::{admin_ping, get_current_identity, health_check, refresh};

pub fn run(listener: TcpListener, codec: Arc<TokenCodec>) -> Result<Server, std::io::Error> {
    let codec_data = web::Data::from(codec.clone());

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            // Shared state
            .app_data(codec_data.clone())
            // Public routes
            .route("/health_check", web::get().to(health_check))
            .route("/auth/refresh", web::post().to(refresh))
            // Protected routes (require a valid access token)
            .service(
                web::scope("/api/admin")
                    .wrap(JwtMiddleware::new(codec.clone()).require_roles(roles::ORG_ADMIN))
                    .route("/ping", web::get().to(admin_ping)),
            )
            .service(
                web::scope("/api")
                    .wrap(JwtMiddleware::new(codec.clone()))
                    .route("/me", web::get().to(get_current_identity)),
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}
