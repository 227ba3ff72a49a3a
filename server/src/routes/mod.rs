use actix_web::{web, HttpResponse};

use errors::{Error, ErrorResponse};

pub mod admin;
pub mod questions;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::PathConfig::default()
            .error_handler(|_, _| Error::NotFound("Not Found".into()).into()),
    )
    .app_data(
        web::JsonConfig::default()
            .error_handler(|err, _| Error::BadRequest(err.to_string()).into()),
    )
    .service(
        web::scope("/polls")
            .service(
                web::scope("/admin").service(
                    web::resource("/questions/")
                        .route(web::get().to(admin::list))
                        .route(web::post().to(admin::create)),
                ),
            )
            .route("/", web::get().to(questions::index))
            .route("/{id}/", web::get().to(questions::detail))
            .route("/{id}/results/", web::get().to(questions::results))
            .route("/{id}/vote/", web::post().to(questions::vote)),
    );
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::from("Not Found"))
}
