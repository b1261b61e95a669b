// src/traces.rs

use std::sync::Once;

static TRACES_INIT: Once = Once::new();

/// Initialise tracing (une seule fois, appel répété sans effet).
///
/// Rien n’est installé si RUST_LOG est absent.
/// Ex: `RUST_LOG=calculatrice_rpn=debug` affiche chaque étape de réduction.
pub fn init_tracing() {
    TRACES_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filtre = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filtre)
                .init();
        }
    });
}
