use clap::Parser;
use log::{error, info, warn};
use std::io::Write;
use std::process::exit;
use std::sync::Arc;
use stashgate::cache::errors::CacheError;
use stashgate::cache::structs::cache_registry::CacheRegistry;
use stashgate::config::structs::configuration::Configuration;
use stashgate::http_cache::helpers::CACHE_STATUS_HEADER;
use stashgate::http_cache::structs::http_cache::HttpCache;
use stashgate::http_cache::structs::http_request::HttpRequest;
use stashgate::http_cache::structs::reqwest_executor::ReqwestExecutor;
use stashgate::logging::setup_logging;
use stashgate::structs::{Cli, Command};
use tokio::runtime::Builder;

/// Explicit group, or every configured group.
fn selected_groups(registry: &CacheRegistry, group: Option<String>) -> Vec<String> {
    match group {
        Some(group) => vec![group],
        None => registry.groups().into_iter().map(str::to_string).collect(),
    }
}

async fn run(config: Arc<Configuration>, command: Command) -> Result<(), CacheError> {
    let registry = CacheRegistry::from_config(&config);
    match command {
        Command::Ping { group } => {
            for name in selected_groups(&registry, group) {
                let cache = registry.instance(Some(&name)).await?;
                cache.ping().await?;
                info!("[PING] {} ({}) is reachable", name, cache.driver());
            }
        }
        Command::Gc { group } => {
            let explicit = group.is_some();
            for name in selected_groups(&registry, group) {
                let cache = registry.instance(Some(&name)).await?;
                match cache.garbage_collect().await {
                    Ok(()) => info!("[GC] {} swept", name),
                    Err(CacheError::Unsupported { driver, .. }) if !explicit => {
                        info!("[GC] {} skipped, the {} driver expires entries itself", name, driver)
                    }
                    Err(e) => return Err(e),
                }
            }
        }
        Command::Clear { group } => {
            let cache = registry.instance(group.as_deref()).await?;
            warn!("[CLEAR] Clearing every entry of the {} backend behind group {}", cache.driver(), cache.name());
            cache.clear().await?;
        }
        Command::Fetch { url, method } => {
            let http_cache = HttpCache::from_config(&registry, &config.http_cache).await?;
            let executor = ReqwestExecutor::new(config.http_cache.request_timeout)?;
            let request = HttpRequest::from_url(method, &url)?;
            let response = http_cache.execute(&request, &executor).await?;
            info!(
                "[FETCH] {} {} -> {} ({})",
                method,
                url,
                response.status,
                response.headers.get(CACHE_STATUS_HEADER).unwrap_or("uncached")
            );
            std::io::stdout().write_all(&response.body)?;
        }
    }
    Ok(())
}

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()> {
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101),
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("Failed to initialize logging: {}", e);
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let Some(command) = args.command else {
        info!("No command given, configuration is valid.");
        return Ok(());
    };

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            if let Err(e) = run(config, command).await {
                error!("{}", e);
                exit(1);
            }
        });
    Ok(())
}
