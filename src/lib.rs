#![doc(test(attr(deny(warnings))))]

//! Charity Form renders a single donation form in the terminal, wiring
//! declarative field descriptors to a pure validation schema and an emulated
//! submit handler that renders the collected values as JSON.

pub mod cli;
pub mod config;
pub mod errors;
pub mod form;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Charity Form tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
