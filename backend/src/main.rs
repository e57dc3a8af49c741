//! Seeder entry-point: loads configuration, wires the store adapter, and
//! serves the seeding endpoints.

use std::ffi::OsString;
use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use demo_seeder::config::{SeederSettings, SupabaseSettings};
use demo_seeder::domain::ports::ProfileStore;
use demo_seeder::domain::seeding::WriteLimits;
use demo_seeder::inbound::http::state::HttpState;
use demo_seeder::outbound::postgrest::PostgrestProfileStore;
use demo_seeder::{Cors, configure};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let seeder = SeederSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let supabase = SupabaseSettings::load_from_iter([OsString::from("demo-seeder")])
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let store = build_store(&supabase)?;
    let limits = WriteLimits {
        batch_size: seeder.batch_size(),
        photo_batch_size: seeder.photo_batch_size(),
    };
    let state = web::Data::new(
        HttpState::new(store, Arc::new(DefaultClock))
            .with_limits(limits)
            .with_admin_token(seeder.admin_token()),
    );

    let bind_addr = seeder
        .bind_addr()
        .map_err(|e| std::io::Error::other(format!("invalid SEEDER_BIND_ADDR: {e}")))?;
    info!(%bind_addr, batch_size = limits.batch_size, "starting demo seeder");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Cors)
            .configure(configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}

fn build_store(settings: &SupabaseSettings) -> std::io::Result<Option<Arc<dyn ProfileStore>>> {
    let Some(credentials) = settings.credentials() else {
        warn!("store credentials missing; every request will fail until configured");
        return Ok(None);
    };
    let store = PostgrestProfileStore::new(
        credentials.url,
        credentials.service_role_key,
        settings.request_timeout(),
    )
    .map_err(std::io::Error::other)?;
    Ok(Some(Arc::new(store)))
}
