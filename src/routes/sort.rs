use actix_web::{web, HttpResponse, Responder};
use crate::error::Result;
use crate::models::{ServiceInfo, SortRequest, SortResponse, SortResult};

/// Configure all sort-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(root))
        .route("/sort", web::post().to(sort_package))
        .route("/sort", web::get().to(sort_package_query));
}

/// Root endpoint with API information
async fn root() -> impl Responder {
    HttpResponse::Ok().json(ServiceInfo::default())
}

/// Sort a package from a JSON body
///
/// POST /sort
///
/// Request body:
/// ```json
/// {
///   "width": 10.0,
///   "height": 10.0,
///   "length": 10.0,
///   "mass": 5.0
/// }
/// ```
async fn sort_package(req: web::Json<SortRequest>) -> Result<HttpResponse> {
    handle_sort(req.into_inner())
}

/// Sort a package from query parameters
///
/// GET /sort?width={w}&height={h}&length={l}&mass={m}
async fn sort_package_query(query: web::Query<SortRequest>) -> Result<HttpResponse> {
    handle_sort(query.into_inner())
}

/// Shared validation and classification for both entry points
pub fn sort_request(req: SortRequest) -> Result<SortResponse> {
    let measurement = req.into_measurement()?;
    let result = SortResult::from_measurement(measurement)?;
    Ok(SortResponse::from(result))
}

fn handle_sort(req: SortRequest) -> Result<HttpResponse> {
    match sort_request(req) {
        Ok(response) => {
            tracing::debug!(
                "Sorted package {}x{}x{} cm, {} kg -> {}",
                response.width,
                response.height,
                response.length,
                response.mass,
                response.stack
            );
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => {
            tracing::info!("Rejected sort request {:?}: {}", req, e);
            Err(e)
        }
    }
}
