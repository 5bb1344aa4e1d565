//! Thin wrappers over the browser APIs the components need.
//!
//! Everything fallible returns `UiError`; event handlers log and move on.

use js_sys::{Array, Function, Promise, Reflect};
use url::Url;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollToOptions, Window,
};

use crate::error::UiError;
use crate::motion::carousel::{ScrollMotion, ScrollRequest};

/// Height of the fixed header, kept clear when scrolling to a section.
pub const HEADER_OFFSET: f64 = 100.0;

pub fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or(UiError::NoWindow)
}

/// Wall-clock milliseconds, for timers that compare deadlines.
pub fn now() -> f64 {
    js_sys::Date::now()
}

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn media_matches(query: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|list| list.matches())
        .unwrap_or(false)
}

pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}

/// True for mouse-like devices; touch-only devices get no custom cursor.
pub fn has_fine_pointer() -> bool {
    media_matches("(pointer: fine)")
}

fn behavior(motion: ScrollMotion) -> ScrollBehavior {
    match motion {
        ScrollMotion::Instant => ScrollBehavior::Instant,
        ScrollMotion::Smooth => ScrollBehavior::Smooth,
    }
}

/// Applies a horizontal scroll request to a carousel container.
pub fn scroll_element_to(element: &Element, request: ScrollRequest) {
    let options = ScrollToOptions::new();
    options.set_left(request.offset);
    options.set_behavior(behavior(request.motion));
    element.scroll_to_with_scroll_to_options(&options);
}

/// Smooth-scrolls the page so the element with `id` sits below the header.
pub fn scroll_to_section(id: &'static str) -> Result<(), UiError> {
    let window = window()?;
    let document = window.document().ok_or(UiError::NoWindow)?;
    let section = document
        .get_element_by_id(id)
        .ok_or(UiError::MissingElement(id))?;
    let top = section.get_bounding_client_rect().top() + window.scroll_y()? - HEADER_OFFSET;

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Locks or releases page scrolling behind a full-screen overlay.
pub fn set_body_scroll_locked(locked: bool) -> Result<(), UiError> {
    let body = window()?
        .document()
        .and_then(|d| d.body())
        .ok_or(UiError::MissingElement("body"))?;
    let style = body.style();
    if locked {
        style.set_property("overflow", "hidden")?;
    } else {
        style.remove_property("overflow")?;
    }
    Ok(())
}

/// Only absolute `https` links leave the site.
pub fn validate_external(raw: &str) -> Result<Url, UiError> {
    let url = Url::parse(raw)?;
    if url.scheme() != "https" || url.host_str().is_none() {
        return Err(UiError::InvalidUrl(raw.to_string()));
    }
    Ok(url)
}

pub fn open_external(raw: &str) -> Result<(), UiError> {
    let url = validate_external(raw)?;
    window()?.open_with_url_and_target_and_features(url.as_str(), "_blank", "noopener,noreferrer")?;
    Ok(())
}

/// `navigator.clipboard.writeText`, looked up dynamically so insecure
/// contexts without a clipboard fail with an error instead of a trap.
pub async fn copy_to_clipboard(text: &str) -> Result<(), UiError> {
    let navigator = window()?.navigator();
    let clipboard = Reflect::get(&navigator, &"clipboard".into())?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(UiError::Js("clipboard unavailable".to_string()));
    }
    let write_text = Reflect::get(&clipboard, &"writeText".into())?.dyn_into::<Function>()?;
    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into::<Promise>()?;
    JsFuture::from(promise).await?;
    Ok(())
}

type WatchCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// An `IntersectionObserver` on one element, disconnected when dropped.
pub struct IntersectionWatch {
    observer: IntersectionObserver,
    _callback: WatchCallback,
}

impl IntersectionWatch {
    /// `on_change` receives the element's intersecting state and returns
    /// whether to keep watching.
    pub fn observe<F>(element: &Element, threshold: f64, mut on_change: F) -> Result<Self, UiError>
    where
        F: FnMut(bool) -> bool + 'static,
    {
        let callback: WatchCallback = Closure::wrap(Box::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !on_change(entry.is_intersecting()) {
                        observer.disconnect();
                        break;
                    }
                }
            },
        ) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for IntersectionWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accepts_https_links() {
        let url = validate_external(crate::config::BOOKING_URL).unwrap();
        assert_eq!(url.host_str(), Some("cal.com"));
        assert!(validate_external(crate::config::INSTAGRAM_URL).is_ok());
    }

    #[test]
    fn rejects_other_schemes_and_garbage() {
        for raw in ["http://cal.com/x", "javascript:alert(1)", "mailto:hello@aitoma.ai"] {
            assert_eq!(
                validate_external(raw),
                Err(UiError::InvalidUrl(raw.to_string())),
                "{raw}"
            );
        }
        assert!(matches!(
            validate_external("not a url"),
            Err(UiError::InvalidUrl(_))
        ));
    }
}
