//! Demo landing page
//!
//! A minimal page carrying the markup the effects look for, so they can be
//! tried with `trunk serve` without the production site. The effects are
//! attached once the view is mounted, exactly as a server-rendered page
//! would call `enhancePage`.

use leptos::prelude::*;

use crate::dom;
use crate::page::{PageEffects, load_config};

/// Testimonials shown by the demo carousel
pub const TESTIMONIALS: [(&str, &str); 3] = [
    ("Set up in an afternoon, and our sign-ups doubled.", "Priya, founder"),
    ("The onboarding finally makes sense to new customers.", "Marco, product lead"),
    ("Support answered before I finished my coffee.", "Jules, operations"),
];

/// Demo page with hero, reveal sections and the testimonial carousel
#[component]
pub fn DemoPage() -> impl IntoView {
    let effects = StoredValue::new_local(None::<PageEffects>);

    Effect::new(move |_| {
        let attached = dom::window().and_then(|window| {
            let document = dom::document(&window)?;
            let config = load_config(&document);
            Ok(PageEffects::attach(&window, &document, &config))
        });
        match attached {
            Ok(fx) => effects.set_value(Some(fx)),
            Err(e) => tracing::warn!("demo effects not attached: {}", e),
        }
    });

    on_cleanup(move || {
        effects.update_value(|fx| {
            if let Some(fx) = fx.take() {
                fx.dispose();
            }
        });
    });

    view! {
        <header class="hero">
            <div class="parallax-bg"></div>
            <h1 class="reveal">"Launch pages that move"</h1>
            <p class="reveal" data-delay="150">"Scroll down to see the effects."</p>
        </header>
        <main>
            <section class="reveal" data-delay="300">
                <h2>"Why teams pick us"</h2>
                <p>"Fast setup, clear pricing, real support."</p>
            </section>
            <section class="testimonials reveal">
                <div class="overflow-hidden">
                    <div id="testimonialSlider" class="flex transition-transform">
                        {TESTIMONIALS
                            .iter()
                            .map(|(quote, author)| {
                                view! {
                                    <blockquote class="w-full shrink-0">
                                        <p>{*quote}</p>
                                        <cite>{*author}</cite>
                                    </blockquote>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <button id="prevBtn" aria-label="Previous testimonial">"‹"</button>
                <button id="nextBtn" aria-label="Next testimonial">"›"</button>
                <div id="testimonialDots">
                    {(0..TESTIMONIALS.len())
                        .map(|i| {
                            view! {
                                <button
                                    class="dot bg-gray-300"
                                    aria-label=format!("Show testimonial {}", i + 1)
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </main>
    }
}
