//! Name-based dispatch from campaign component names to banner renderers.
//!
//! DESIGN
//! ======
//! The renderer set is closed and known at compile time, so dispatch is a
//! plain immutable map built once from a const entry table rather than any
//! plugin machinery. Unknown names are a legal outcome: campaign
//! configuration may reference component types this build does not ship
//! yet, so a resolution miss renders nothing instead of failing.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use leptos::prelude::*;
use messages::{ComponentEvent, EventSink, Interaction, InteractionSink, MessageProperties};

use crate::components::{app_banner, subscriber_app_banner};

/// Renders one banner variant from the shared inputs.
pub type RenderFn = fn(MessageSinks, MessageProperties) -> AnyView;

/// The two collaborator capabilities every banner renders against.
///
/// Banners hold the sinks only for the duration of a render's interaction
/// handlers; nothing is retained across renders and no other side channel
/// exists.
#[derive(Clone)]
pub struct MessageSinks {
    interactions: Arc<dyn InteractionSink + Send + Sync>,
    events: Arc<dyn EventSink + Send + Sync>,
}

impl MessageSinks {
    /// Bundle a click-tracking sink and an event-submission sink.
    pub fn new<I, E>(interactions: I, events: E) -> Self
    where
        I: InteractionSink + Send + Sync + 'static,
        E: EventSink + Send + Sync + 'static,
    {
        Self {
            interactions: Arc::new(interactions),
            events: Arc::new(events),
        }
    }

    /// Forward a click descriptor to the tracking collaborator.
    pub fn record_click(&self, interaction: Interaction) {
        self.interactions.record_click(interaction);
    }

    /// Forward a structured event to the event collaborator.
    pub fn submit(&self, event: ComponentEvent) {
        self.events.submit(event);
    }
}

/// Default component mappings.
const COMPONENT_MAPPINGS: &[(&str, RenderFn)] = &[
    (app_banner::NAME, app_banner::render),
    (subscriber_app_banner::NAME, subscriber_app_banner::render),
];

static MAPPINGS: LazyLock<HashMap<&'static str, RenderFn>> =
    LazyLock::new(|| build_mappings(COMPONENT_MAPPINGS));

/// Build a dispatch table from `(name, renderer)` entries.
///
/// Duplicate names keep the last entry in slice order, so overrides are
/// visible at the registration site.
#[must_use]
pub fn build_mappings(entries: &[(&'static str, RenderFn)]) -> HashMap<&'static str, RenderFn> {
    entries.iter().copied().collect()
}

/// Look up the renderer registered under a component name.
///
/// Matching is exact and case-sensitive; any input string is legal.
#[must_use]
pub fn resolve(component_name: &str) -> Option<RenderFn> {
    MAPPINGS.get(component_name).copied()
}

/// Render against an explicit mapping table.
///
/// A miss returns `None` without invoking any renderer or sink.
#[must_use]
pub fn render_with(
    mappings: &HashMap<&'static str, RenderFn>,
    component_name: &str,
    sinks: MessageSinks,
    message_props: MessageProperties,
) -> Option<AnyView> {
    mappings
        .get(component_name)
        .map(|render| render(sinks, message_props))
}

/// Render the banner registered under `component_name`, or nothing.
#[must_use]
pub fn render_message(
    component_name: &str,
    sinks: MessageSinks,
    message_props: MessageProperties,
) -> Option<AnyView> {
    render_with(&MAPPINGS, component_name, sinks, message_props)
}

/// Host-facing entry point: renders the banner a campaign message names.
#[component]
pub fn MessageBanner(
    /// Component name supplied by the campaign service.
    component_name: String,
    sinks: MessageSinks,
    message_props: MessageProperties,
) -> impl IntoView {
    render_message(&component_name, sinks, message_props)
}
