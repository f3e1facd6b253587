//! Bundled demo graph: a small "online-store" application with frontend,
//! backend and database tiers plus its config, secret and ingress.

use crate::error::Error;
use crate::model::GraphSnapshot;

const ONLINE_STORE_JSON: &str = include_str!("../demos/online-store.json");

/// Name of the only bundled demo.
pub const ONLINE_STORE: &str = "online-store";

pub fn online_store() -> Result<GraphSnapshot, Error> {
    GraphSnapshot::from_json(ONLINE_STORE_JSON)
}

/// Look up a bundled demo by name.
pub fn demo(name: &str) -> Option<Result<GraphSnapshot, Error>> {
    match name {
        ONLINE_STORE => Some(online_store()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_fixtures.rs"]
mod tests;
