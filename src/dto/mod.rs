use std::time::SystemTime;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

/// Game payloads.
pub mod game;
/// Health check payload.
pub mod health;
/// Stats and achievements payloads.
pub mod stats;
/// Team and player payloads.
pub mod team;
pub mod validation;

fn format_system_time(time: SystemTime) -> String {
    OffsetDateTime::from(time)
        .format(&Rfc3339)
        .unwrap_or_else(|_| "invalid-timestamp".into())
}
