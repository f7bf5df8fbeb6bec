//! Note-to-subscribers banner promoting the subscriber app experience.
//!
//! Copy is fixed editorial text; the only campaign-supplied property is the
//! reader's first name, and the greeting falls back to a plain salutation
//! when it is absent, so this banner always renders.

#[cfg(test)]
#[path = "subscriber_app_banner_test.rs"]
mod subscriber_app_banner_test;

use leptos::prelude::*;
use messages::{ComponentType, InteractionKind, MessageProperties};

use crate::components::report::{BannerTag, report_activation};
use crate::registry::MessageSinks;

/// Component name the campaign service uses to select this banner.
pub const NAME: &str = "SubscriberAppBanner";

const TAG: BannerTag = BannerTag {
    component_type: ComponentType::SubscriberBanner,
    id: "subscriber_app_banner",
};

const HEADER: &str = "A note to our digital subscribers";

const BODY: &str = "did you know that as a digital subscriber you can enjoy an enhanced \
                    experience of our quality, independent journalism on all your devices, \
                    including the live news app?";

const SEARCH_HINT: &str = "Search for \"live news\" in your app store";

/// Greeting line for the banner body.
///
/// Falls back to a plain salutation when the campaign did not supply a
/// usable first name.
fn greeting(props: &MessageProperties) -> String {
    match props.get("firstName") {
        Some(first_name) if !first_name.trim().is_empty() => format!("Hi {first_name},"),
        _ => "Hello,".to_owned(),
    }
}

/// Report the primary call-to-action press.
fn confirm_click(sinks: &MessageSinks) {
    report_activation(sinks, TAG, InteractionKind::Primary, 0);
}

/// Report the not-interested press.
fn decline_click(sinks: &MessageSinks) {
    report_activation(sinks, TAG, InteractionKind::Secondary, 1);
}

/// Report the close affordance press.
fn dismiss_click(sinks: &MessageSinks) {
    report_activation(sinks, TAG, InteractionKind::Dismiss, 2);
}

/// Registry entry point for this banner.
pub(crate) fn render(sinks: MessageSinks, message_props: MessageProperties) -> AnyView {
    view! { <SubscriberAppBanner sinks=sinks message_props=message_props /> }.into_any()
}

/// Subscriber note banner selected by campaign component name.
#[component]
pub fn SubscriberAppBanner(sinks: MessageSinks, message_props: MessageProperties) -> impl IntoView {
    let greeting_line = greeting(&message_props);
    let visible = RwSignal::new(true);

    move || {
        visible.get().then(|| {
            let confirm_sinks = sinks.clone();
            let decline_sinks = sinks.clone();
            let close_sinks = sinks.clone();
            view! {
                <div class="subscriber-app-banner">
                    <div class="subscriber-app-banner__content">
                        <div class="subscriber-app-banner__heading">{HEADER}</div>
                        <p class="subscriber-app-banner__body">
                            {greeting_line.clone()} " " {BODY}
                        </p>
                        <strong class="subscriber-app-banner__hint">{SEARCH_HINT}</strong>
                        <div class="subscriber-app-banner__actions">
                            <button
                                class="btn subscriber-app-banner__confirm"
                                on:click=move |_| {
                                    confirm_click(&confirm_sinks);
                                    visible.set(false);
                                }
                            >
                                "Ok, got it"
                            </button>
                            <button
                                class="btn subscriber-app-banner__decline"
                                on:click=move |_| {
                                    decline_click(&decline_sinks);
                                    visible.set(false);
                                }
                            >
                                "I'm not interested"
                            </button>
                        </div>
                    </div>
                    <button
                        class="subscriber-app-banner__close"
                        title="Close"
                        aria-label="Close"
                        on:click=move |_| {
                            dismiss_click(&close_sinks);
                            visible.set(false);
                        }
                    >
                        "✕"
                    </button>
                </div>
            }
        })
    }
}
