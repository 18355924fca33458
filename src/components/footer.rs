//! Page footer with the current copyright year.

use leptos::prelude::*;

use crate::content::OWNER_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    let year = {
        #[cfg(feature = "csr")]
        {
            js_sys::Date::new_0().get_full_year().to_string()
        }
        #[cfg(not(feature = "csr"))]
        {
            String::new()
        }
    };

    view! {
        <footer class="site-footer">
            <p>
                "\u{a9} " <span id="current-year">{year}</span> " "
                {OWNER_NAME}
                ". All rights reserved."
            </p>
        </footer>
    }
}
