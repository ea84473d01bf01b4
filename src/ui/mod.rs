//! Client-side rendered login UI (WASM)

pub mod apiclient;
pub mod components;
pub mod state;
