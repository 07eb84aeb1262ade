use crate::config::AppConfig;
use crate::services::availability::AvailabilityProvider;
use crate::services::messaging::MessagingProvider;

pub struct AppState {
    pub config: AppConfig,
    pub availability: Box<dyn AvailabilityProvider>,
    pub messaging: Box<dyn MessagingProvider>,
}
