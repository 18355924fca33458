//! Smooth in-page scrolling and scroll-position reads.

/// Current vertical scroll offset, or `0` off-browser.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Smooth-scroll to a section by element id, offset by the fixed header's
/// height so the section title lands below it. Missing targets no-op.
pub fn scroll_to_section(id: &str) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let Some(target) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };

        let header_height = document
            .query_selector(".site-header")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            .map_or(0, |el| el.offset_height());

        let top = f64::from(target.offset_top() - header_height).max(0.0);
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}
