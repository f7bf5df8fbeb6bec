//! Banner component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! One module per campaign banner variant. Each module owns its property
//! schema, its copy, and its interaction reporting; the `registry` module
//! only routes by component name.

pub mod app_banner;
pub(crate) mod report;
pub mod subscriber_app_banner;
