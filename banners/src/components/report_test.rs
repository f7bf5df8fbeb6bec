use std::sync::{Arc, Mutex};

use messages::{ComponentEvent, Interaction, InteractionKind};

use super::*;
use crate::registry::MessageSinks;

#[derive(Clone, Default)]
struct Recorder {
    clicks: Arc<Mutex<Vec<Interaction>>>,
    events: Arc<Mutex<Vec<ComponentEvent>>>,
}

impl Recorder {
    fn sinks(&self) -> MessageSinks {
        let clicks = Arc::clone(&self.clicks);
        let events = Arc::clone(&self.events);
        MessageSinks::new(
            move |interaction: Interaction| clicks.lock().expect("clicks lock").push(interaction),
            move |event: ComponentEvent| events.lock().expect("events lock").push(event),
        )
    }

    fn clicks(&self) -> Vec<Interaction> {
        self.clicks.lock().expect("clicks lock").clone()
    }

    fn events(&self) -> Vec<ComponentEvent> {
        self.events.lock().expect("events lock").clone()
    }
}

const TAG: BannerTag = BannerTag {
    component_type: ComponentType::EngagementBanner,
    id: "probe_banner",
};

#[test]
fn activation_reaches_each_collaborator_exactly_once() {
    let recorder = Recorder::default();

    report_activation(&recorder.sinks(), TAG, InteractionKind::Primary, 0);

    assert_eq!(recorder.clicks().len(), 1);
    assert_eq!(recorder.events().len(), 1);
}

#[test]
fn primary_and_secondary_activations_surface_as_clicks() {
    let recorder = Recorder::default();
    let sinks = recorder.sinks();

    report_activation(&sinks, TAG, InteractionKind::Primary, 0);
    report_activation(&sinks, TAG, InteractionKind::Secondary, 1);

    let events = recorder.events();
    assert_eq!(events[0].action, ComponentAction::Click);
    assert_eq!(events[0].value.as_deref(), Some("0"));
    assert_eq!(events[1].action, ComponentAction::Click);
    assert_eq!(events[1].value.as_deref(), Some("1"));
}

#[test]
fn close_activation_surfaces_as_dismiss() {
    let recorder = Recorder::default();

    report_activation(&recorder.sinks(), TAG, InteractionKind::Dismiss, 2);

    let clicks = recorder.clicks();
    assert_eq!(clicks[0].kind, InteractionKind::Dismiss);
    let events = recorder.events();
    assert_eq!(events[0].action, ComponentAction::Dismiss);
    assert_eq!(events[0].value.as_deref(), Some("2"));
}

#[test]
fn events_carry_the_banner_identity() {
    let recorder = Recorder::default();

    report_activation(&recorder.sinks(), TAG, InteractionKind::Primary, 0);

    let events = recorder.events();
    assert_eq!(events[0].component.component_type, ComponentType::EngagementBanner);
    assert_eq!(events[0].component.id.as_deref(), Some("probe_banner"));
    assert!(events[0].component.labels.is_empty());
}
