//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! All shared state (session store, OTP flow, toast queue) is created here
//! and provided via context, so pages and components depend on injection
//! rather than globals. The initial session check fires exactly once per
//! tab load; until it resolves, guards see `Unknown` and wait.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::otp_modal::OtpModal;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, register::RegisterPage,
    upload_context::UploadContextPage,
};
use crate::state::otp::OtpFlow;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let toasts = RwSignal::new(ToastState::default());
    let otp_flow = RwSignal::new(OtpFlow::default());

    provide_context(session);
    provide_context(toasts);
    provide_context(otp_flow);

    // Resolve the session exactly once per tab load. Guards wait on the
    // Unknown phase until this lands.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::state::session::refresh_session(session).await;
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/replexify-web.css"/>
        <Title text=crate::config::APP_NAME/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("upload-context") view=UploadContextPage/>
            </Routes>
        </Router>

        <Show when=move || otp_flow.get().is_open()>
            <OtpModal flow=otp_flow/>
        </Show>
        <ToastHost/>
    }
}
