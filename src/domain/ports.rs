use crate::domain::model::Booking;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Best-effort outbound notification channel.
///
/// `Ok(true)` means delivered, `Ok(false)` means the integration is not
/// configured (disabled, no call attempted), `Err` carries the fault for
/// logging. Callers collapse all three to a boolean; a notifier failure
/// must never fail the booking itself.
#[async_trait]
pub trait Notifier: Send + Sync {
    fn name(&self) -> &'static str;

    async fn deliver(&self, booking: &Booking) -> Result<bool>;
}
