//! Contact form page.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;
use leptos_meta::Title;

fn validate_contact_input(
    name: &str,
    email: &str,
    message: &str,
) -> Result<(String, String, String), &'static str> {
    let name = name.trim();
    let email = email.trim();
    let message = message.trim();
    if name.is_empty() {
        return Err("Enter your name.");
    }
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if message.is_empty() {
        return Err("Enter a message.");
    }
    Ok((name.to_owned(), email.to_owned(), message.to_owned()))
}

/// Contact form: posts to the remote API and reports inline.
#[component]
pub fn ContactPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (name_value, email_value, message_value) =
            match validate_contact_input(&name.get(), &email.get(), &message.get()) {
                Ok(values) => values,
                Err(text) => {
                    info.set(text.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::send_contact(&name_value, &email_value, &message_value).await {
                Ok(()) => {
                    message.set(String::new());
                    info.set("Thanks! We'll get back to you shortly.".to_owned());
                }
                Err(e) => info.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (name_value, email_value, message_value);
            busy.set(false);
        }
    };

    view! {
        <Title text="Contact | Skymart"/>
        <div class="contact-page">
            <h1>"Get in touch"</h1>
            <form class="contact-form" on:submit=on_submit>
                <input
                    class="contact-input"
                    type="text"
                    placeholder="Your name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="contact-input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <textarea
                    class="contact-textarea"
                    placeholder="How can we help?"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
                <button class="contact-button" type="submit" disabled=move || busy.get()>
                    "Send Message"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="contact-message">{move || info.get()}</p>
                </Show>
            </form>
        </div>
    }
}
