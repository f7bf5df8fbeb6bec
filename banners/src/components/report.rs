//! Shared interaction reporting helpers.
//!
//! Every button activation inside a banner produces two signals: an
//! interaction descriptor for UI-level click tracking and a structured
//! component event for downstream reporting. Keeping the pairing in one
//! place guarantees both collaborators see each activation exactly once
//! and that the two payloads never drift apart.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use messages::{
    Component, ComponentAction, ComponentEvent, ComponentType, Interaction, InteractionKind,
};

use crate::registry::MessageSinks;

/// Identity a banner reports itself under.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BannerTag {
    /// Banner family for aggregate reporting.
    pub component_type: ComponentType,
    /// Stable slug for the concrete banner.
    pub id: &'static str,
}

/// Report a button activation to both collaborators.
///
/// Primary and secondary activations surface as `CLICK` events; the close
/// affordance surfaces as `DISMISS`. The button index travels stringified
/// in the event `value`, matching what the campaign service records on its
/// side of the exchange.
pub(crate) fn report_activation(
    sinks: &MessageSinks,
    tag: BannerTag,
    kind: InteractionKind,
    button_index: u32,
) {
    sinks.record_click(Interaction::new(kind, button_index));

    let action = match kind {
        InteractionKind::Primary | InteractionKind::Secondary => ComponentAction::Click,
        InteractionKind::Dismiss => ComponentAction::Dismiss,
    };
    sinks.submit(ComponentEvent {
        component: Component {
            component_type: tag.component_type,
            id: Some(tag.id.to_owned()),
            labels: Vec::new(),
        },
        action,
        value: Some(button_index.to_string()),
    });
}
