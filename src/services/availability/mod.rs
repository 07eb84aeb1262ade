pub mod resdiary;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::AvailabilityResponse;

#[async_trait]
pub trait AvailabilityProvider: Send + Sync {
    async fn search(
        &self,
        restaurant: &str,
        date: &str,
        covers: &str,
    ) -> Result<AvailabilityResponse, AppError>;
}
