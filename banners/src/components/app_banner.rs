//! App install promotion banner.
//!
//! DESIGN
//! ======
//! All reader-facing copy arrives in the campaign property bag so editors
//! can re-run the campaign with new wording without a deploy. `header` and
//! `body` are required; a message missing either renders nothing rather
//! than showing a half-empty banner.

#[cfg(test)]
#[path = "app_banner_test.rs"]
mod app_banner_test;

use leptos::prelude::*;
use messages::{ComponentType, InteractionKind, MessageProperties};

use crate::components::report::{BannerTag, report_activation};
use crate::registry::MessageSinks;

/// Component name the campaign service uses to select this banner.
pub const NAME: &str = "AppBanner";

const TAG: BannerTag = BannerTag {
    component_type: ComponentType::EngagementBanner,
    id: "app_banner",
};

const DEFAULT_CTA: &str = "Ok, got it";

/// Copy resolved from the campaign property bag.
#[derive(Clone, Debug, PartialEq, Eq)]
struct BannerCopy {
    header: String,
    body: String,
    cta: String,
}

/// Resolve banner copy, or `None` when a required property is missing.
fn banner_copy(props: &MessageProperties) -> Option<BannerCopy> {
    let header = props.get("header")?.to_owned();
    let body = props.get("body")?.to_owned();
    let cta = props.get("cta").unwrap_or(DEFAULT_CTA).to_owned();
    Some(BannerCopy { header, body, cta })
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
    view! { <AppBanner sinks=sinks message_props=message_props /> }.into_any()
}

/// App promotion banner selected by campaign component name.
#[component]
pub fn AppBanner(sinks: MessageSinks, message_props: MessageProperties) -> impl IntoView {
    let copy = banner_copy(&message_props);
    if copy.is_none() {
        log::debug!("{NAME} message missing required copy; rendering nothing");
    }

    let visible = RwSignal::new(true);
    move || {
        if !visible.get() {
            return None;
        }
        copy.as_ref().map(|copy| {
            let confirm_sinks = sinks.clone();
            let decline_sinks = sinks.clone();
            let close_sinks = sinks.clone();
            view! {
                <div class="app-banner">
                    <div class="app-banner__content">
                        <div class="app-banner__heading">{copy.header.clone()}</div>
                        <p class="app-banner__body">{copy.body.clone()}</p>
                        <div class="app-banner__actions">
                            <button
                                class="btn app-banner__confirm"
                                on:click=move |_| {
                                    confirm_click(&confirm_sinks);
                                    visible.set(false);
                                }
                            >
                                {copy.cta.clone()}
                            </button>
                            <button
                                class="btn app-banner__decline"
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
                        class="app-banner__close"
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
