use std::sync::Arc;

use crate::config::Config;
use crate::email_client::EmailSender;
use crate::portfolio::repository::PortfolioRepository;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Outbound email provider. Default: ResendClient.
    pub email: Arc<dyn EmailSender>,
    /// Project/skill catalog. Default: InMemoryPortfolio seeded at startup.
    pub portfolio: Arc<dyn PortfolioRepository>,
}
