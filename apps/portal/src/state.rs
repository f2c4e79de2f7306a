use std::sync::Arc;

use crate::config::Config;
use crate::gateway::{ApiGateway, HttpApiGateway};
use crate::identity::{IdentityProvider, PlaceholderIdentity};

/// Collaborators shared by every view the portal mounts.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn ApiGateway>,
    /// Stand-in for an identity-capture step. Default: PlaceholderIdentity.
    pub identity: Arc<dyn IdentityProvider>,
    pub config: Config,
}

impl AppState {
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let gateway = HttpApiGateway::new(&config.api_url, config.request_timeout)?;
        let identity = PlaceholderIdentity::new(
            config.candidate_name.clone(),
            config.candidate_email.clone(),
        );

        Ok(Self {
            gateway: Arc::new(gateway),
            identity: Arc::new(identity),
            config,
        })
    }
}
