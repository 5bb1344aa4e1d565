use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Wordmark with a star standing in for the dot of the i.
#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    html! {
        <svg
            class={props.class.clone()}
            viewBox="0 0 140 40"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
            aria-label={format!("{} Logo", config::BRAND_NAME)}
        >
            <text
                x="0"
                y="30"
                font-family="'Clash Display', sans-serif"
                font-weight="600"
                font-size="36"
                fill="currentColor"
                style="letter-spacing: -0.03em;"
            >
                {"aıtoma"}
            </text>
            <path
                d="M27 4 L28.5 9.5 L34 11 L28.5 12.5 L27 18 L25.5 12.5 L20 11 L25.5 9.5 Z"
                fill="#0A4DD3"
            />
        </svg>
    }
}
