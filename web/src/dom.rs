//! Thin wrappers over the browser APIs the page needs

use cronos_app::ScrollTarget;
use web_sys::{HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions};

/// Element id of the result panel
pub const RESULT_ID: &str = "result";

/// Text areas never shrink below this height
pub const MIN_TEXTAREA_HEIGHT_PX: i32 = 120;

/// Look up an element by id
///
/// A missing element is logged and reported as `None` so callers can carry
/// on without it.
pub fn element(id: &str) -> Option<web_sys::Element> {
    let found = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    if found.is_none() {
        log::warn!("Element #{} not found", id);
    }
    found
}

pub fn origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

/// Blocking `window.alert()`
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            log::warn!("alert() failed: {}", message);
        }
    }
}

pub fn open_in_new_tab(url: &str) {
    let opened = web_sys::window().map(|w| w.open_with_url_and_target(url, "_blank"));
    if !matches!(opened, Some(Ok(Some(_)))) {
        log::warn!("Could not open {}", url);
    }
}

pub fn scroll_to(target: ScrollTarget) {
    match target {
        ScrollTarget::Top => {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }
        ScrollTarget::Report => {
            if let Some(el) = element(RESULT_ID) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                el.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    }
}

/// Height in pixels for a text area whose content is `scroll_height` tall
pub fn fitted_height(scroll_height: i32) -> i32 {
    scroll_height.max(MIN_TEXTAREA_HEIGHT_PX)
}

/// Grow or shrink a text area to fit its content
///
/// The height is reset to `auto` first so `scrollHeight` reflects the content
/// rather than the previous size.
pub fn auto_resize(textarea: &HtmlTextAreaElement) {
    let style = textarea.style();
    if style.set_property("height", "auto").is_err() {
        log::warn!("Could not reset height of #{}", textarea.id());
        return;
    }
    let height = fitted_height(textarea.scroll_height());
    if style.set_property("height", &format!("{height}px")).is_err() {
        log::warn!("Could not resize #{}", textarea.id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fitted_height_has_a_floor() {
        assert_eq!(fitted_height(0), MIN_TEXTAREA_HEIGHT_PX);
        assert_eq!(fitted_height(40), MIN_TEXTAREA_HEIGHT_PX);
    }

    #[test]
    fn test_fitted_height_follows_content_without_a_ceiling() {
        assert_eq!(fitted_height(121), 121);
        assert_eq!(fitted_height(4000), 4000);
    }
}
