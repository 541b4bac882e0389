use once_cell::sync::OnceCell;
use reqwest::Client;
use std::time::Duration;

use crate::utils::errors::{AppError, AppResult};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

static CLIENT: OnceCell<Client> = OnceCell::new();

fn build_client(timeout: Duration) -> AppResult<Client> {
    Client::builder()
        .pool_max_idle_per_host(4)
        .tcp_keepalive(Duration::from_secs(60))
        .timeout(timeout)
        .user_agent(concat!("lzt-token-checker/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| AppError::Config(format!("failed to build HTTP client: {}", e)))
}

/// Build the shared client once at startup. Later calls are no-ops.
pub fn init_client(timeout: Duration) -> AppResult<()> {
    if CLIENT.get().is_some() {
        return Ok(());
    }
    let client = build_client(timeout)?;
    let _ = CLIENT.set(client);
    log::debug!("[HTTP] Shared client ready (timeout {}s)", timeout.as_secs());
    Ok(())
}

/// Shared client; falls back to the default timeout if `init_client` was never called.
pub fn client() -> AppResult<&'static Client> {
    CLIENT.get_or_try_init(|| build_client(Duration::from_secs(DEFAULT_TIMEOUT_SECS)))
}
