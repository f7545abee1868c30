//! Core processing building blocks: background classification, content
//! bounds, resize/compose, the prepare pipeline, save helpers, and the
//! placeholder generator. These are internal primitives consumed by the
//! high-level `api` module.
pub mod params;
pub mod placeholder;
pub mod processing;
