// Adapters layer: concrete notifier implementations for external services.

pub mod email;
pub mod sheets;
