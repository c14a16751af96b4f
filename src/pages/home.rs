use yew::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::config;
use crate::sections::Section;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <section id={Section::Home.dom_id()} class="hero-section">
            <div class="hero-glow"></div>
            <h2 class="hero-title">{Section::Home.heading()}</h2>
            <p class="hero-tagline">
                {"Expertise in Directing, Photography, Videography, and Editing."}
            </p>
            <FallbackImage
                src={config::HERO_IMAGE}
                fallback={config::HERO_FALLBACK}
                alt={format!("Creative visual work showcase by {}", config::OWNER_ALIAS)}
                class="hero-image"
            />
            <style>
                {r#"
                .hero-section {
                    position: relative;
                    overflow: hidden;
                    min-height: calc(100vh - 18rem);
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    text-align: center;
                    padding: 4rem 2rem;
                    border-radius: 12px;
                    background: linear-gradient(135deg, #16151A, #262626, #873800);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                }
                .hero-glow {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(45deg, #16151A, transparent, #F67011);
                    opacity: 0.3;
                    pointer-events: none;
                }
                .hero-title {
                    position: relative;
                    font-size: clamp(2.25rem, 6vw, 3.75rem);
                    color: #FFE4D0;
                    margin: 0 0 1.5rem 0;
                    letter-spacing: -0.02em;
                }
                .hero-tagline {
                    position: relative;
                    color: #878787;
                    font-size: 1.25rem;
                    margin-bottom: 2.5rem;
                }
                .hero-image {
                    position: relative;
                    max-width: 100%;
                    height: auto;
                    border-radius: 8px;
                    border: 2px solid #F67011;
                    transition: transform 0.5s ease;
                }
                .hero-image:hover {
                    transform: scale(1.05);
                }
                "#}
            </style>
        </section>
    }
}
