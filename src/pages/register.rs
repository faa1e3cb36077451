//! Registration page: account form plus the OTP verification hand-off.
//!
//! A successful registration does not log the user in — it opens the OTP
//! modal for the registered email, and the modal completes the session on
//! verification.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::guards::RequireGuest;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::RegisterResponse;
use crate::state::otp::OtpFlow;
use crate::state::toast::ToastState;
use crate::util::validate::{RegisterErrors, validate_register};

/// The backend signals a created account by returning its id.
#[cfg(any(test, feature = "hydrate"))]
fn registration_opens_otp(resp: &RegisterResponse) -> bool {
    resp.id > 0
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let otp_flow = expect_context::<RwSignal<OtpFlow>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let agree_terms = RwSignal::new(false);
    let errors = RwSignal::new(RegisterErrors::default());
    let submitting = RwSignal::new(false);

    // Called from the submit continuation, which can outlive the page; the
    // writes degrade to no-ops once the form signals are disposed.
    let reset_form = move || {
        let _ = email.try_set(String::new());
        let _ = password.try_set(String::new());
        let _ = confirm.try_set(String::new());
        let _ = agree_terms.try_set(false);
        let _ = errors.try_set(RegisterErrors::default());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        let field_errors =
            validate_register(&email_value, &password_value, &confirm.get(), agree_terms.get());
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(RegisterErrors::default());
        submitting.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::auth_api::register(&email_value, &password_value).await {
                Ok(resp) if registration_opens_otp(&resp) => {
                    crate::state::toast::toast_success(
                        toasts,
                        "OTP has been sent to your account. Please verify to continue.",
                    );
                    otp_flow.set(OtpFlow::open(resp.email));
                    reset_form();
                }
                Ok(_) => {
                    crate::state::toast::toast_error(toasts, "Registration failed", None);
                }
                Err(e) => {
                    crate::state::toast::toast_error(
                        toasts,
                        "Registration failed",
                        Some(e.message()),
                    );
                }
            }
            let _ = submitting.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (toasts, otp_flow, reset_form, email_value, password_value);
    };

    view! {
        <RequireGuest>
            <div class="auth-page">
                <div class="auth-card">
                    <h1>"Create your account"</h1>
                    <form class="auth-form" on:submit=on_submit>
                        <label class="auth-form__label">
                            "Email"
                            <input
                                class="auth-form__input"
                                type="email"
                                placeholder="you@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        <Show when=move || errors.get().email.is_some()>
                            <p class="auth-form__error">{move || errors.get().email.unwrap_or_default()}</p>
                        </Show>
                        <label class="auth-form__label">
                            "Password"
                            <input
                                class="auth-form__input"
                                type="password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>
                        <Show when=move || errors.get().password.is_some()>
                            <p class="auth-form__error">{move || errors.get().password.unwrap_or_default()}</p>
                        </Show>
                        <label class="auth-form__label">
                            "Confirm Password"
                            <input
                                class="auth-form__input"
                                type="password"
                                prop:value=move || confirm.get()
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                            />
                        </label>
                        <Show when=move || errors.get().confirm.is_some()>
                            <p class="auth-form__error">{move || errors.get().confirm.unwrap_or_default()}</p>
                        </Show>
                        <label class="auth-form__checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || agree_terms.get()
                                on:change=move |_| agree_terms.update(|v| *v = !*v)
                            />
                            "I agree to the Terms of Service and Privacy Policy"
                        </label>
                        <Show when=move || errors.get().terms.is_some()>
                            <p class="auth-form__error">{move || errors.get().terms.unwrap_or_default()}</p>
                        </Show>
                        <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Creating account..." } else { "Create Account" }}
                        </button>
                    </form>
                    <p class="auth-card__switch">
                        "Already registered? "
                        <A href="/login">"Sign in"</A>
                    </p>
                </div>
            </div>
        </RequireGuest>
    }
}
