//! Application execution logic.
//!
//! This module contains the command dispatch that drives the REST API
//! client and the incident webhook client.

use std::path::Path;

use thiserror::Error;

use squadcast::api::{ApiClient, ApiError, Service};
use squadcast::config::{Command, ConfigError, Settings, write_default_config};
use squadcast::transport::{HttpClient, ReqwestClient};
use squadcast::webhook::{Incident, WebhookClient, WebhookError};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Settings were insufficient for the requested command.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A REST API request failed.
    #[error("API request failed: {0}")]
    Api(#[from] ApiError),

    /// A webhook request failed.
    #[error("Webhook request failed: {0}")]
    Webhook(#[from] WebhookError),

    /// Service lookup by name matched nothing.
    #[error("No service named '{0}'")]
    ServiceNotFound(String),
}

/// Executes the requested command.
///
/// # Errors
///
/// Returns an error if the settings lack a required credential, an HTTP
/// request fails, or a named service does not exist.
///
/// # Coverage Note
///
/// Excluded from coverage because it binds the production HTTP client;
/// the dispatch logic is covered through [`run_command`].
#[cfg(not(tarpaulin_include))]
pub async fn execute(settings: &Settings, command: Command) -> Result<(), RunError> {
    run_command(settings, ReqwestClient::new(), command).await
}

/// Dispatches a single command against the given HTTP client.
async fn run_command<H>(settings: &Settings, http: H, command: Command) -> Result<(), RunError>
where
    H: HttpClient + Clone,
{
    match command {
        Command::Init { output } => init_config(&output),
        Command::Services => list_services(settings, http).await,
        Command::Service { name, id } => {
            show_service(settings, http, name.as_deref(), id.as_deref()).await
        }
        Command::Incident {
            service,
            api_key,
            message,
            description,
            status,
        } => {
            let incident = Incident::new(message, description, status.into());
            let api_key = if let Some(key) = api_key {
                key
            } else {
                // clap requires exactly one of --service and --api-key, so
                // an absent name can only fall out as a not-found error.
                let name = service.unwrap_or_default();
                lookup_api_key(settings, http.clone(), &name).await?
            };

            send_incident(settings, http, &api_key, &incident).await
        }
    }
}

/// Writes the configuration template for the init command.
fn init_config(output: &Path) -> Result<(), RunError> {
    write_default_config(output)?;
    println!("Configuration template written to: {}", output.display());

    Ok(())
}

/// Builds the REST client from resolved settings.
///
/// Fails when no refresh token was configured.
fn build_api_client<H: HttpClient>(settings: &Settings, http: H) -> Result<ApiClient<H>, RunError> {
    let refresh_token = settings.require_refresh_token()?;

    Ok(ApiClient::new(http, refresh_token).with_base_url(settings.api_url.clone()))
}

/// Lists every service visible to the authenticated account.
async fn list_services<H: HttpClient>(settings: &Settings, http: H) -> Result<(), RunError> {
    let client = build_api_client(settings, http)?;
    let services = client.services().await?;

    tracing::debug!("Listing {} service(s)", services.len());
    for service in &services {
        println!("{}  {}", service.id, service.name);
    }

    Ok(())
}

/// Shows one service, looked up by id when given, by name otherwise.
async fn show_service<H: HttpClient>(
    settings: &Settings,
    http: H,
    name: Option<&str>,
    id: Option<&str>,
) -> Result<(), RunError> {
    let client = build_api_client(settings, http)?;

    let service = if let Some(id) = id {
        client.service_by_id(id).await?
    } else {
        let name = name.unwrap_or_default();
        client
            .service_by_name(name)
            .await?
            .ok_or_else(|| RunError::ServiceNotFound(name.to_string()))?
    };

    print_service(&service);

    Ok(())
}

fn print_service(service: &Service) {
    println!("id:          {}", service.id);
    println!("name:        {}", service.name);
    if !service.slug.is_empty() {
        println!("slug:        {}", service.slug);
    }
    if !service.description.is_empty() {
        println!("description: {}", service.description);
    }
    println!("api key:     {}", service.api_key);
}

/// Resolves a service's webhook API key by name through the REST API.
async fn lookup_api_key<H: HttpClient>(
    settings: &Settings,
    http: H,
    name: &str,
) -> Result<String, RunError> {
    let client = build_api_client(settings, http)?;
    let service = client
        .service_by_name(name)
        .await?
        .ok_or_else(|| RunError::ServiceNotFound(name.to_string()))?;

    tracing::debug!("Resolved API key through service '{}'", service.name);

    Ok(service.api_key)
}

/// Posts an incident event through the key-scoped webhook.
async fn send_incident<H: HttpClient>(
    settings: &Settings,
    http: H,
    api_key: &str,
    incident: &Incident,
) -> Result<(), RunError> {
    let client = WebhookClient::new(http, api_key).with_base_url(settings.webhook_url.clone());
    client.create_incident(incident).await?;

    println!("Incident sent: {}", incident.message);

    Ok(())
}
