//! Browser entry point. Trunk compiles this binary to WASM and mounts
//! the app onto `<body>`.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        log::debug!("mounting folio");
        leptos::mount::mount_to_body(folio::app::App);
    }
}
