use std::sync::{Arc, Mutex};

use messages::{ComponentAction, ComponentEvent, Interaction, InteractionKind, MessageProperties};

use super::*;

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

fn full_props() -> MessageProperties {
    MessageProperties::new()
        .with("header", "Read better with our app")
        .with("body", "Quality journalism on every device you own.")
}

#[test]
fn banner_copy_requires_header_and_body() {
    assert_eq!(banner_copy(&MessageProperties::new()), None);
    assert_eq!(
        banner_copy(&MessageProperties::new().with("header", "Read better with our app")),
        None
    );
    assert_eq!(
        banner_copy(&MessageProperties::new().with("body", "Quality journalism.")),
        None
    );
}

#[test]
fn banner_copy_defaults_the_call_to_action() {
    let copy = banner_copy(&full_props()).expect("required copy is present");
    assert_eq!(copy.header, "Read better with our app");
    assert_eq!(copy.cta, "Ok, got it");
}

#[test]
fn banner_copy_prefers_a_campaign_call_to_action() {
    let copy = banner_copy(&full_props().with("cta", "Get the app"))
        .expect("required copy is present");
    assert_eq!(copy.cta, "Get the app");
}

#[test]
fn confirm_reports_the_primary_action_once_to_each_collaborator() {
    let recorder = Recorder::default();

    confirm_click(&recorder.sinks());

    let clicks = recorder.clicks();
    assert_eq!(clicks.len(), 1);
    assert_eq!(clicks[0], Interaction::new(InteractionKind::Primary, 0));

    let events = recorder.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].action, ComponentAction::Click);
    assert_eq!(events[0].component.id.as_deref(), Some("app_banner"));
    assert_eq!(events[0].value.as_deref(), Some("0"));
}

#[test]
fn decline_reports_the_secondary_action() {
    let recorder = Recorder::default();

    decline_click(&recorder.sinks());

    let clicks = recorder.clicks();
    assert_eq!(clicks.len(), 1);
    assert_eq!(clicks[0], Interaction::new(InteractionKind::Secondary, 1));
    assert_eq!(recorder.events()[0].action, ComponentAction::Click);
}

#[test]
fn dismiss_descriptor_is_distinct_from_the_primary_descriptor() {
    let recorder = Recorder::default();
    let sinks = recorder.sinks();

    confirm_click(&sinks);
    dismiss_click(&sinks);

    let clicks = recorder.clicks();
    assert_eq!(clicks.len(), 2);
    assert_ne!(clicks[0], clicks[1]);
    assert_eq!(clicks[1].kind, InteractionKind::Dismiss);
    assert_eq!(recorder.events()[1].action, ComponentAction::Dismiss);
}
