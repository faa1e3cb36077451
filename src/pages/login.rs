//! Login page with email + password form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wrapped in `RequireGuest`: a successful login feeds the profile into the
//! session store and the guard handles the hop to the dashboard. Unverified
//! accounts are routed back into the OTP flow instead of being logged in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::guards::RequireGuest;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::UserProfile;
use crate::state::otp::OtpFlow;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::validate::validate_email;

/// What to do with a successful login response.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoginOutcome {
    /// Verified account: log in and let the guest guard redirect.
    Verified,
    /// Account exists but never confirmed its OTP: reopen verification.
    NeedsVerification,
}

#[cfg(any(test, feature = "hydrate"))]
fn classify_login(profile: &UserProfile) -> LoginOutcome {
    if profile.verified {
        LoginOutcome::Verified
    } else {
        LoginOutcome::NeedsVerification
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let otp_flow = expect_context::<RwSignal<OtpFlow>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<&'static str>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();

        email_error.set(validate_email(&email_value).err());
        password_error.set(if password_value.is_empty() {
            Some("Password is required")
        } else {
            None
        });
        if email_error.get().is_some() || password_error.get().is_some() {
            return;
        }
        submitting.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::auth_api::login(&email_value, &password_value).await {
                Ok(profile) => match classify_login(&profile) {
                    LoginOutcome::Verified => {
                        crate::state::session::login_session(session, profile);
                    }
                    LoginOutcome::NeedsVerification => {
                        crate::state::toast::toast_info(
                            toasts,
                            "Please verify your email to continue.",
                        );
                        otp_flow.set(OtpFlow::open(email_value));
                    }
                },
                Err(e) => {
                    crate::state::toast::toast_error(toasts, e.message(), None);
                }
            }
            // A verified login redirects the guard away from this page, so
            // the flag may already be disposed when we get here.
            let _ = submitting.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (session, toasts, otp_flow, email_value, password_value);
    };

    view! {
        <RequireGuest>
            <div class="auth-page">
                <div class="auth-card">
                    <h1>"Welcome back"</h1>
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
                        <Show when=move || email_error.get().is_some()>
                            <p class="auth-form__error">{move || email_error.get().unwrap_or_default()}</p>
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
                        <Show when=move || password_error.get().is_some()>
                            <p class="auth-form__error">{move || password_error.get().unwrap_or_default()}</p>
                        </Show>
                        <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                        </button>
                    </form>
                    <p class="auth-card__switch">
                        "No account yet? "
                        <A href="/register">"Create one"</A>
                    </p>
                </div>
            </div>
        </RequireGuest>
    }
}
