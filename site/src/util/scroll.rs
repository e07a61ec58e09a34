//! Browser scroll helpers.
//!
//! Smooth-scrolls to in-page anchors and resets the viewport on navigation.
//! Requires a browser environment; without the `hydrate` feature both
//! helpers compile to no-ops.

/// Smooth-scroll the element with the given id into view.
///
/// A missing element is a silent no-op, not an error.
pub fn to_section(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id));
        if let Some(element) = element {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Reset the viewport to the document origin.
pub fn to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}
