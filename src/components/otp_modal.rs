//! Email verification modal for the 6-digit OTP flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opened by the register and login pages when an account needs
//! verification. On success it logs the verified profile into the session
//! store and closes; the guest guard on the page underneath takes over the
//! navigation to the dashboard. On failure it clears the input and stays
//! open for a retry.
//!
//! The modal is unmounted the moment the flow closes, which disposes its
//! local signals. In-flight tasks write back through `try_set` and the
//! countdown loop carries an alive flag, so a verify or resend that
//! resolves after close lands on no-ops instead of disposed signals.

#[cfg(test)]
#[path = "otp_modal_test.rs"]
mod otp_modal_test;

use leptos::prelude::*;

use crate::state::otp::{OtpFlow, otp_ready, sanitize_otp_input};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;

/// Countdown value after a one-second tick, or `None` once the signal
/// backing the label is gone and the loop should stop.
#[cfg(any(test, feature = "hydrate"))]
fn countdown_after_tick(left: Option<u32>) -> Option<u32> {
    match left {
        Some(left) if left > 1 => Some(left - 1),
        Some(_) => Some(0),
        None => None,
    }
}

#[component]
pub fn OtpModal(flow: RwSignal<OtpFlow>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let otp = RwSignal::new(String::new());
    let resending = RwSignal::new(false);
    let countdown = RwSignal::new(0u32);

    #[cfg(feature = "hydrate")]
    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    #[cfg(feature = "hydrate")]
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let close = move || {
        otp.set(String::new());
        flow.update(|f| *f = std::mem::take(f).close());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if flow.get().is_verifying() {
            return;
        }
        let code = otp.get();
        if !otp_ready(&code) {
            crate::state::toast::toast_error(toasts, "Please enter a 6-digit OTP", None);
            return;
        }
        let Some(email) = flow.get().email().map(ToOwned::to_owned) else {
            return;
        };
        flow.update(|f| *f = std::mem::take(f).begin_verify());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::auth_api::verify_otp(&email, &code).await {
                Ok(resp) => {
                    let _ = otp.try_set(String::new());
                    crate::state::session::login_session(session, resp.into_profile());
                    crate::state::toast::toast_success(
                        toasts,
                        "Your account has been verified successfully!",
                    );
                    // Closing the flow unmounts the modal; the guest guard
                    // on the underlying page navigates to the dashboard.
                    flow.set(OtpFlow::Closed);
                }
                Err(_) => {
                    let _ = otp.try_set(String::new());
                    flow.update(|f| *f = std::mem::take(f).fail());
                    crate::state::toast::toast_error(
                        toasts,
                        "Invalid OTP",
                        Some("Please check your email and try again.".to_owned()),
                    );
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (session, email, code);
    };

    let on_resend = move |_| {
        if resending.get() || countdown.get() > 0 {
            return;
        }
        let Some(email) = flow.get().email().map(ToOwned::to_owned) else {
            return;
        };
        resending.set(true);
        otp.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                match crate::net::auth_api::resend_otp(&email).await {
                    Ok(_) => {
                        crate::state::toast::toast_success(toasts, "OTP resent successfully!");
                        let _ = resending.try_set(false);
                        let _ = countdown.try_set(crate::state::otp::RESEND_COOLDOWN_SECS);
                        loop {
                            gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                            if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                                break;
                            }
                            match countdown_after_tick(countdown.try_get_untracked()) {
                                Some(0) | None => {
                                    let _ = countdown.try_set(0);
                                    break;
                                }
                                Some(left) => {
                                    let _ = countdown.try_set(left);
                                }
                            }
                        }
                    }
                    Err(e) => {
                        crate::state::toast::toast_error(
                            toasts,
                            "Failed to resend OTP",
                            Some(e.message()),
                        );
                        let _ = resending.try_set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = email;
    };

    let resend_label = move || {
        if resending.get() {
            "Resending...".to_owned()
        } else if countdown.get() > 0 {
            format!("Resend in {}s", countdown.get())
        } else {
            "Resend OTP".to_owned()
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div class="dialog otp-modal" on:click=move |ev| ev.stop_propagation()>
                <h2>"Verify Your Email"</h2>
                <p class="otp-modal__subtitle">
                    "We've sent a 6-digit code to "
                    <span class="otp-modal__email">
                        {move || flow.get().email().unwrap_or_default().to_owned()}
                    </span>
                </p>
                <form class="otp-modal__form" on:submit=on_submit>
                    <label class="dialog__label">
                        "6-Digit OTP"
                        <input
                            class="dialog__input otp-modal__input"
                            type="text"
                            inputmode="numeric"
                            placeholder="000000"
                            maxlength="6"
                            prop:value=move || otp.get()
                            on:input=move |ev| {
                                otp.set(sanitize_otp_input(&event_target_value(&ev)));
                            }
                        />
                    </label>
                    <button
                        class="btn btn--primary otp-modal__submit"
                        type="submit"
                        disabled=move || !otp_ready(&otp.get()) || flow.get().is_verifying()
                    >
                        {move || if flow.get().is_verifying() { "Verifying..." } else { "Verify Email" }}
                    </button>
                </form>
                <div class="otp-modal__resend">
                    <p>"Didn't receive the code?"</p>
                    <button
                        class="btn"
                        on:click=on_resend
                        disabled=move || resending.get() || (countdown.get() > 0)
                    >
                        {resend_label}
                    </button>
                </div>
                <button class="btn otp-modal__back" on:click=move |_| close()>
                    "Back to Registration"
                </button>
            </div>
        </div>
    }
}
