//! Dayflow engine server binary.
//!
//! Loads the leave policy and employee roster from the configuration
//! directory, seeds an in-memory store and serves the HTTP API.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use dayflow_engine::api::{AppState, create_router};
use dayflow_engine::config::{LeavePolicy, PolicyLoader};
use dayflow_engine::store::InMemoryStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,dayflow_engine=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config_dir =
        std::env::var("DAYFLOW_CONFIG").unwrap_or_else(|_| "./config/dayflow".to_string());

    let (policy, employees) = match PolicyLoader::load(&config_dir) {
        Ok(loader) => {
            info!(
                config_dir = %config_dir,
                allowances = loader.policy().allowances.len(),
                employees = loader.employees().len(),
                "Loaded leave policy"
            );
            (loader.policy().clone(), loader.employees().to_vec())
        }
        Err(err) => {
            warn!(
                config_dir = %config_dir,
                error = %err,
                "Failed to load configuration, falling back to default policy"
            );
            (LeavePolicy::default(), Vec::new())
        }
    };

    let store = InMemoryStore::new(policy);
    for employee in employees {
        let id = employee.id.clone();
        if let Err(err) = store.add_employee(employee) {
            warn!(employee_id = %id, error = %err, "Skipping seed employee");
        }
    }

    let state = AppState::with_store(Arc::new(store));
    let app = create_router(state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("0.0.0.0:{}", port);
    let listener = TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Dayflow engine listening");

    axum::serve(listener, app).await?;
    Ok(())
}
