//! Single-quote testimonial section for the landing page.

use leptos::prelude::*;

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    view! {
        <section class="testimonials" id="testimonials">
            <blockquote class="testimonials__quote">
                <p>
                    "Our response time went from "
                    <span class="testimonials__highlight">"4 hours to 30 seconds"</span>
                    " with Replexify"
                </p>
                <footer class="testimonials__attribution">
                    <cite>"Phil Kwok"</cite>
                    <span class="testimonials__role">"Co-founder, EasyA"</span>
                </footer>
            </blockquote>
        </section>
    }
}
