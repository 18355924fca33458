//! Contact section: validated form with simulated submission, response
//! modal, and the embedded map.
//!
//! ERROR HANDLING
//! ==============
//! There is no backend: submission sleeps for the simulated request delay
//! and reports a random demo outcome. Validation failures stay local to
//! the field they belong to and never block typing.

use leptos::prelude::*;

use crate::state::form::{Field, FormState, SubmitStatus};
#[cfg(feature = "csr")]
use crate::state::form::{RESPONSE_AUTO_HIDE_MS, SHAKE_MS, SUBMIT_DELAY_MS};

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="section contact">
            <div class="section-header reveal-element">
                <p class="section-subtitle">"Say hello"</p>
                <h2 class="section-title">"Get In Touch"</h2>
                <span class="title-underline" aria-hidden="true"></span>
            </div>
            <div class="contact__layout">
                <ContactForm/>
                <div class="contact__map reveal-element">
                    <iframe
                        src="https://www.openstreetmap.org/export/embed.html?bbox=-122.52%2C37.70%2C-122.35%2C37.83&layer=mapnik"
                        title="Location map"
                        loading="lazy"
                    ></iframe>
                </div>
            </div>
            <ResponseModal/>
        </section>
    }
}

/// The contact form itself: four validated fields and a submit button
/// that disables while the simulated request is in flight.
#[component]
fn ContactForm() -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut started = false;
        form.update(|f| started = f.begin_submit());
        if !started {
            // Validation marked the failing fields; let their shakes settle.
            for field in Field::ALL {
                if form.get_untracked().field(field).shaking {
                    schedule_shake_settle(form, field);
                }
            }
            return;
        }
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                    SUBMIT_DELAY_MS,
                )))
                .await;
                // Demo outcome, heavily weighted toward success.
                let success = js_sys::Math::random() > 0.1;
                form.update(|f| f.finish_submit(success));
                if success {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                        RESPONSE_AUTO_HIDE_MS,
                    )))
                    .await;
                    form.update(|f| {
                        if f.status == SubmitStatus::Sent {
                            f.close_response();
                        }
                    });
                }
            });
        }
    };

    let sending = move || form.get().status == SubmitStatus::Sending;

    view! {
        <form id="contact-form" class="contact__form" novalidate=true on:submit=on_submit>
            <FormField field=Field::Name input_type="text"/>
            <FormField field=Field::Email input_type="email"/>
            <FormField field=Field::Subject input_type="text"/>
            <FormField field=Field::Message input_type="text" multiline=true/>
            <div class="form-submit">
                <button type="submit" class="btn btn--primary" disabled=sending>
                    <Show
                        when=move || !sending()
                        fallback=|| view! { <span>"Sending..."</span> }
                    >
                        <span>"Send Message"</span>
                    </Show>
                </button>
            </div>
        </form>
    }
}

/// One labeled form field: float label, live error message, shake on a
/// failed validation.
#[component]
fn FormField(
    field: Field,
    input_type: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();

    let outer_class = move || {
        let state = form.get();
        let slot = state.field(field);
        let mut class = String::from("form-field");
        if slot.focused {
            class.push_str(" focused");
        }
        if slot.has_content {
            class.push_str(" has-content");
        }
        class
    };
    let control_class = move || {
        let state = form.get();
        let slot = state.field(field);
        let mut class = String::from("form-control");
        if slot.error.is_some() {
            class.push_str(" error");
        }
        if slot.shaking {
            class.push_str(" shake");
        }
        class
    };

    let value = move || form.get().field(field).value.clone();
    let on_input = move |ev| form.update(|f| f.input(field, event_target_value(&ev)));
    let on_focus = move |_| form.update(|f| f.focus(field));
    let on_blur = move |_| {
        let mut failed = false;
        form.update(|f| failed = f.blur(field));
        if failed {
            schedule_shake_settle(form, field);
        }
    };

    let control = if multiline {
        view! {
            <textarea
                class=control_class
                rows="6"
                prop:value=value
                on:input=on_input
                on:focus=on_focus
                on:blur=on_blur
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                class=control_class
                type=input_type
                prop:value=value
                on:input=on_input
                on:focus=on_focus
                on:blur=on_blur
            />
        }
        .into_any()
    };

    view! {
        <div class=outer_class>
            <label class="form-label">{field.label()}</label>
            {control}
            {move || {
                form.get()
                    .field(field)
                    .error
                    .map(|e| view! { <div class="error-message">{e.message()}</div> })
            }}
        </div>
    }
}

/// Modal reporting the submission outcome. Closes on the button, a
/// backdrop click, or Escape; successful sends also auto-hide.
#[component]
fn ResponseModal() -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();

    // Escape closes the modal for the whole page session.
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
                move |event: web_sys::KeyboardEvent| {
                    if event.key() == "Escape" {
                        form.update(FormState::close_response);
                    }
                },
            );
            let _ = document
                .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
            on_keydown.forget();
        }
    }

    let outcome = move || {
        let state = form.get();
        match state.status {
            SubmitStatus::Sent => Some((
                "response-icon success",
                "Message Sent!",
                "Thank you for your message. I will get back to you as soon as possible.",
            )),
            SubmitStatus::Failed => Some((
                "response-icon error",
                "Sending Failed",
                "Sorry, something went wrong. Please try again or reach me directly by email.",
            )),
            _ => None,
        }
    };

    view! {
        <Show when=move || form.get().response_open()>
            <div
                id="form-response"
                class="form-response show"
                on:click=move |_| form.update(FormState::close_response)
            >
                <div
                    class="form-response__card"
                    on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                >
                    {move || {
                        outcome()
                            .map(|(icon_class, title, message)| {
                                view! {
                                    <span class=icon_class aria-hidden="true"></span>
                                    <h3 class="response-title">{title}</h3>
                                    <p class="response-message">{message}</p>
                                }
                            })
                    }}
                    <button
                        class="close-response btn"
                        on:click=move |_| form.update(FormState::close_response)
                    >
                        "Close"
                    </button>
                </div>
            </div>
        </Show>
    }
}

/// Drop the shake class once its animation has run.
fn schedule_shake_settle(form: RwSignal<FormState>, field: Field) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(SHAKE_MS)))
                .await;
            form.update(|f| f.settle_shake(field));
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (form, field);
    }
}
