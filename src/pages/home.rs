//! Public marketing landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::faq_section::FaqSection;
use crate::components::footer::Footer;
use crate::components::install_modal::InstallModal;
use crate::components::navbar::Navbar;
use crate::components::testimonials_section::TestimonialsSection;

#[component]
pub fn HomePage() -> impl IntoView {
    let show_install = RwSignal::new(false);

    view! {
        <div class="home-page">
            <Navbar/>
            <section class="hero">
                <h1 class="hero__title">"AI customer support that sounds like you"</h1>
                <p class="hero__subtitle">
                    "Replexify answers repetitive support tickets in seconds, grounded in your own docs and past conversations."
                </p>
                <div class="hero__actions">
                    <A href="/register" attr:class="btn btn--primary hero__cta">
                        "Get Started Free"
                    </A>
                    <button class="btn hero__install" on:click=move |_| show_install.set(true)>
                        "Connect a Channel"
                    </button>
                </div>
            </section>
            <TestimonialsSection/>
            <FaqSection/>
            <Footer/>
            <InstallModal open=show_install/>
        </div>
    }
}
