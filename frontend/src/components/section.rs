use log::warn;
use yew::prelude::*;

use crate::config;
use crate::dom;

/// Opens the booking page in a new tab.
pub fn book_consultation() -> Callback<MouseEvent> {
    Callback::from(|_: MouseEvent| {
        if let Err(err) = dom::open_external(config::BOOKING_URL) {
            warn!("could not open booking page: {}", err);
        }
    })
}

/// Scrolls to an in-page section, logging when it is missing.
pub fn jump_to(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Err(err) = dom::scroll_to_section(id) {
            warn!("could not scroll to #{}: {}", id, err);
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct SectionLabelProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub light: bool,
}

/// The small mono-spaced label above each section title.
#[function_component(SectionLabel)]
pub fn section_label(props: &SectionLabelProps) -> Html {
    html! {
        <div class={classes!("section-label", props.light.then_some("light"))}>
            <span class="section-label-line"></span>
            <span class="mono">{props.text.clone()}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Full-width page band with the shared padding and content width.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <section
            id={props.id.clone()}
            class={classes!("page-section", props.class.clone())}
        >
            <div class="page-section-inner">
                { for props.children.iter() }
            </div>
        </section>
    }
}
