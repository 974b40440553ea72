// Domain layer: booking model, notifier ports and the pure deep-link service.

pub mod model;
pub mod ports;
pub mod services;
