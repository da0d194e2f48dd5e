use std::net::IpAddr;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use awr_host::config::{API_KEY_ENV, HOST_ENV, PORT_ENV};
use awr_host::{Executor, HostConfig};
use clap::Args;
use tracing_subscriber::EnvFilter;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind (env: AWR_HOST, default: 0.0.0.0)
    #[arg(long, env = HOST_ENV)]
    pub host: Option<IpAddr>,

    /// Port to listen on (env: PORT, default: 8080)
    #[arg(long, env = PORT_ENV)]
    pub port: Option<u16>,

    /// Shared secret expected in X-API-Key (env: AWR_API_KEY)
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,
}

impl ServeArgs {
    fn apply(&self, config: &mut HostConfig) {
        if let Some(host) = self.host {
            config.http.bind.set_ip(host);
        }
        if let Some(port) = self.port {
            config.http.bind.set_port(port);
        }
        if let Some(key) = self.api_key.as_deref().filter(|key| !key.is_empty()) {
            config.auth.api_key = Some(key.to_string());
        }
    }
}

pub async fn cmd_serve(args: &ServeArgs) -> Result<ExitCode> {
    setup_logging();

    let mut config = HostConfig::from_env()?;
    args.apply(&mut config);

    awr_host::http::run(&config, Arc::new(Executor::new()), shutdown_signal()).await?;
    Ok(ExitCode::SUCCESS)
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .init();
}

/// Resolves on the first of ctrl-c or SIGTERM.
async fn shutdown_signal() {
    let signal = tokio::select! {
        _ = tokio::signal::ctrl_c() => "ctrl-c",
        _ = terminated() => "SIGTERM",
    };
    tracing::info!(signal, "shutting down");
}

#[cfg(unix)]
async fn terminated() {
    use tokio::signal::unix::{SignalKind, signal};

    match signal(SignalKind::terminate()) {
        Ok(mut stream) => {
            stream.recv().await;
        }
        Err(error) => {
            tracing::warn!(%error, "SIGTERM handler unavailable");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn terminated() {
    std::future::pending::<()>().await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_base_config() {
        let args = ServeArgs {
            host: Some("127.0.0.1".parse().unwrap()),
            port: Some(9090),
            api_key: Some("secret".into()),
        };
        let mut config = HostConfig::default();
        args.apply(&mut config);
        assert_eq!(config.http.bind.to_string(), "127.0.0.1:9090");
        assert!(config.auth.accepts(Some("secret")));
        assert!(!config.auth.accepts(Some("other")));
    }

    #[test]
    fn absent_flags_keep_base_config() {
        let args = ServeArgs {
            host: None,
            port: None,
            api_key: Some(String::new()),
        };
        let mut config = HostConfig::default();
        args.apply(&mut config);
        assert_eq!(config.http.bind.to_string(), "0.0.0.0:8080");
        assert!(config.auth.api_key.is_none());
    }
}
