//! # Indumath API
//!
//! The boundary a presentation layer calls into.
//!
//! ## Module Organization
//! ```text
//! indumath_api/
//! ├── lib.rs          ◄─── You are here (logging setup & exports)
//! ├── config.rs       ◄─── CalculatorConfig (TOML + environment)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Shared dispatch + chart types
//! │   ├── production.rs
//! │   ├── inventory.rs
//! │   ├── queue.rs
//! │   ├── breakeven.rs
//! │   └── config.rs   ◄─── Form defaults
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Host Startup                                      │
//! │                                                                         │
//! │  1. init_tracing()                                                      │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: info,indumath=debug, override with RUST_LOG              │
//! │                                                                         │
//! │  2. CalculatorConfig::load_or_default(None)                             │
//! │     • defaults → indumath.toml → INDUMATH_* environment                 │
//! │                                                                         │
//! │  3. Call commands::* per user action                                    │
//! │     • each call is independent; share the config behind an Arc          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```
//! use indumath_api::commands::queue::{analyze_queue, QueueRequest};
//! use indumath_api::CalculatorConfig;
//!
//! let config = CalculatorConfig::default();
//! let response = analyze_queue(&config, QueueRequest { arrival_rate: 2.0, service_rate: 4.0 }).unwrap();
//! assert_eq!(response.summary, "ρ = 0.50, L = 1.00, W = 0.50");
//! ```

pub mod commands;
pub mod config;
pub mod error;

use tracing_subscriber::EnvFilter;

pub use config::{CalculatorConfig, ConfigError, ConfigResult, FormDefaults};
pub use error::{ApiError, ApiResult, ErrorCode};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,indumath=debug";

/// Installs the global fmt subscriber.
///
/// Returns `false` when a subscriber was already installed; the existing one
/// stays in place.
pub fn init_tracing() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
