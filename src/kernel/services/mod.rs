//! Kernel services: ports (traits) and adapters (OS implementations).

pub mod adapters;
pub mod ports;
