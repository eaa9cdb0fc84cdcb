//! Shared contracts for the excavation record frontend.
//!
//! Wire DTOs of the REST API, the artifact schema registry and the pure
//! view-model logic the UI builds on. Nothing here touches the browser.

pub mod domain;
pub mod enums;
pub mod shared;
