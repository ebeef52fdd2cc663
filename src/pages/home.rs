//! Marketing landing page.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

/// Public landing page with the hero pitch and feature highlights.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Skymart | Professional Drones"/>
        <div class="home-page">
            <section class="hero">
                <h1>"Flight-ready drones for work and play"</h1>
                <p class="hero__subtitle">
                    "Survey, film, inspect and race with hardware trusted by professionals."
                </p>
                <A href="/products" attr:class="hero__cta">"Browse the catalog"</A>
            </section>
            <section class="features">
                <article class="features__item">
                    <h2>"Free shipping"</h2>
                    <p>"Every order ships free, fully insured, within two business days."</p>
                </article>
                <article class="features__item">
                    <h2>"Certified support"</h2>
                    <p>"Licensed pilots on staff answer setup and repair questions."</p>
                </article>
                <article class="features__item">
                    <h2>"Two-year warranty"</h2>
                    <p>"Crash coverage included on every airframe we sell."</p>
                </article>
            </section>
        </div>
    }
}
