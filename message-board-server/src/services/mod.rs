pub mod message_service;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(message_service::home)
        .service(message_service::handle_message);
}
