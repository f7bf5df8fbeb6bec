//! Campaign banner components and name-based dispatch for Leptos hosts.
//!
//! SYSTEM CONTEXT
//! ==============
//! A campaign/messaging service decides *which* banner a reader should see
//! and supplies its component name plus an opaque property bag; this crate
//! owns *how* each banner renders and how reader interactions are reported
//! to the click-tracking and event-submission collaborators.

pub mod components;
pub mod registry;

pub use registry::{
    MessageBanner, MessageSinks, RenderFn, build_mappings, render_message, render_with, resolve,
};
