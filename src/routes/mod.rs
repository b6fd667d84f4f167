// Route exports
pub mod sort;

use actix_web::web;
use crate::error::{handle_json_payload_error, handle_query_payload_error};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
        .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
        .configure(sort::configure);
}
