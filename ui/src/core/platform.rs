//! Platform detection helpers and task spawning.

use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Native,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Native
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Native => "native",
        }
    }
}

/// Spawn a local future on the Dioxus runtime of the current component tree.
pub fn spawn_future(fut: impl Future<Output = ()> + 'static) {
    dioxus::prelude::spawn(fut);
}
