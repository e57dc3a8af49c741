//! Seeding endpoints.
//!
//! ```text
//! POST /functions/v1/seed_demo_profiles      randomized strategy
//! POST /functions/v1/seed_demo_profiles_v2   deterministic strategy
//! ```
//!
//! Both accept an optional JSON body of loosely typed options; anything that
//! does not parse as an object means "all defaults". Any other method
//! answers `405 POST only`.

use actix_web::{HttpRequest, HttpResponse, web};
use tracing::{error, info};

use crate::domain::Error;
use crate::domain::seeding::{RawSeedOptions, SeedOptions, SeedStrategy};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::authorize_request;
use crate::inbound::http::state::HttpState;

/// Path of the randomized endpoint.
pub const LEGACY_SEED_PATH: &str = "/functions/v1/seed_demo_profiles";
/// Path of the deterministic endpoint.
pub const DETERMINISTIC_SEED_PATH: &str = "/functions/v1/seed_demo_profiles_v2";

/// Register both seeding resources.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(LEGACY_SEED_PATH)
            .route(web::post().to(seed_randomized))
            .default_service(web::route().to(post_only)),
    )
    .service(
        web::resource(DETERMINISTIC_SEED_PATH)
            .route(web::post().to(seed_deterministic))
            .default_service(web::route().to(post_only)),
    );
}

async fn seed_randomized(
    state: web::Data<HttpState>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    run(SeedStrategy::Randomized, &state, &req, &body).await
}

async fn seed_deterministic(
    state: web::Data<HttpState>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    run(SeedStrategy::Deterministic, &state, &req, &body).await
}

async fn post_only() -> ApiResult<HttpResponse> {
    Err(Error::method_not_allowed("POST only"))
}

async fn run(
    strategy: SeedStrategy,
    state: &HttpState,
    req: &HttpRequest,
    body: &[u8],
) -> ApiResult<HttpResponse> {
    authorize_request(req, state.admin_token.as_deref())?;
    let service = state.seeding_service(strategy)?;
    let options = SeedOptions::resolve(strategy, &RawSeedOptions::from_body(body))?;

    match service.execute(&options).await {
        Ok(report) => {
            info!(
                strategy = strategy.name(),
                mode = report.mode,
                inserted = report.inserted,
                deleted = report.deleted,
                "seeding invocation finished"
            );
            Ok(HttpResponse::Ok().json(report))
        }
        Err(failure) => {
            error!(
                strategy = strategy.name(),
                mode = options.mode.as_str(),
                error = %failure,
                "seeding invocation failed"
            );
            Err(failure.into())
        }
    }
}
