use yew::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::config;
use crate::sections::Section;

const BIO: &str = "Bradley Magomere, also known as Director Brad, is a passionate visual storyteller with a background in journalism and mass communication. His diverse skill set in directing, photography, videography, and editing allows him to approach each project with a unique perspective and a commitment to bringing narratives to life. With a keen eye for detail and a dedication to creative excellence, Director Brad transforms ideas into compelling visual experiences.";

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={Section::About.dom_id()} class="about-section panel">
            <FallbackImage
                src={config::HEADSHOT_IMAGE}
                fallback={config::HEADSHOT_FALLBACK}
                alt={format!("Headshot of {} ({})", config::OWNER_NAME, config::OWNER_ALIAS)}
                class="about-headshot"
            />
            <div class="about-text">
                <h2>{Section::About.heading()}</h2>
                <p>{BIO}</p>
            </div>
            <style>
                {r#"
                .about-section {
                    display: flex;
                    align-items: center;
                    gap: 3rem;
                }
                .about-headshot {
                    width: 12rem;
                    height: 12rem;
                    flex-shrink: 0;
                    object-fit: cover;
                    border-radius: 50%;
                    border: 4px solid #F67011;
                }
                .about-text {
                    flex: 1;
                }
                .about-text p {
                    color: #878787;
                    font-size: 1.1rem;
                    line-height: 1.7;
                }
                @media (max-width: 768px) {
                    .about-section {
                        flex-direction: column;
                        text-align: center;
                    }
                }
                "#}
            </style>
        </section>
    }
}
