//! Shared campaign-message and analytics models for banner rendering.
//!
//! This crate is UI-framework agnostic so component crates can consume it
//! directly for dispatch, property handling, and interaction reporting. It
//! owns three things: the opaque property bag a campaign message carries,
//! the structured analytics event shape the event collaborator expects, and
//! the two narrow sink contracts banners report through.


use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error returned by [`MessageProperties::from_value`].
#[derive(Debug, thiserror::Error)]
pub enum PropertiesError {
    /// The payload was not a JSON object of optional string values.
    #[error("malformed message properties payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Opaque property bag attached to a campaign message.
///
/// Keys map to optional string values; a key explicitly set to `null` reads
/// the same as an absent key. The dispatch layer forwards the bag verbatim
/// and requires no keys; each banner variant owns its own schema and
/// validates at its own boundary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageProperties(HashMap<String, Option<String>>);

impl MessageProperties {
    /// An empty property bag.
    #[must_use]
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Decode a raw campaign payload.
    ///
    /// # Errors
    ///
    /// Returns [`PropertiesError::Decode`] when the payload is not a JSON
    /// object whose values are strings or `null`.
    pub fn from_value(value: Value) -> Result<Self, PropertiesError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Look up a property, reading absent and explicit-`null` keys as `None`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Option::as_deref)
    }

    /// Set a property value, returning the bag for chained construction.
    #[must_use]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.0.insert(key.to_owned(), Some(value.to_owned()));
        self
    }

    /// Number of keys present, counting explicit-`null` entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the bag carries no keys at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Banner family reported to the analytics collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentType {
    /// General engagement/promotion banners.
    EngagementBanner,
    /// Banners addressed to existing digital subscribers.
    SubscriberBanner,
}

/// Measurable component-level interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentAction {
    /// The component was inserted into the page.
    Insert,
    /// The component became visible to the reader.
    View,
    /// A button inside the component was activated.
    Click,
    /// The component was dismissed.
    Dismiss,
}

/// Identity of the component an event refers to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    /// Banner family for aggregate reporting.
    pub component_type: ComponentType,
    /// Stable slug for the concrete banner, e.g. `"app_banner"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Free-form labels for downstream reporting.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

/// Structured analytics event submitted through an [`EventSink`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentEvent {
    /// Which component the event describes.
    pub component: Component,
    /// What happened.
    pub action: ComponentAction,
    /// Stringified button index for click/dismiss actions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Which interactive element inside a rendered banner was activated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    /// The banner's main call to action.
    Primary,
    /// The decline / not-interested action.
    Secondary,
    /// The close affordance.
    Dismiss,
}

/// Descriptor forwarded to the click-tracking collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    /// Role of the activated element.
    pub kind: InteractionKind,
    /// Stable per-variant button index (primary = 0, secondary = 1, close = 2).
    pub button_index: u32,
}

impl Interaction {
    /// Descriptor for the given element role and button index.
    #[must_use]
    pub fn new(kind: InteractionKind, button_index: u32) -> Self {
        Self { kind, button_index }
    }
}

/// UI-level click-tracking collaborator.
///
/// Calls are fire-and-forget: renderers invoke the sink synchronously, at
/// most once per user interaction, and never observe collaborator failures.
pub trait InteractionSink {
    /// Record that the described element was activated.
    fn record_click(&self, interaction: Interaction);
}

/// Structured analytics event collaborator.
///
/// Same fire-and-forget contract as [`InteractionSink`].
pub trait EventSink {
    /// Submit a component-level event for downstream reporting.
    fn submit(&self, event: ComponentEvent);
}

impl<F> InteractionSink for F
where
    F: Fn(Interaction),
{
    fn record_click(&self, interaction: Interaction) {
        self(interaction);
    }
}

impl<F> EventSink for F
where
    F: Fn(ComponentEvent),
{
    fn submit(&self, event: ComponentEvent) {
        self(event);
    }
}
