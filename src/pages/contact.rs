use yew::prelude::*;

use crate::config;
use crate::links::{dial_link, mail_link, whatsapp_link};
use crate::sections::Section;

#[function_component(Contact)]
pub fn contact() -> Html {
    let call_link = dial_link(config::PHONE_DISPLAY);
    let whatsapp = whatsapp_link(config::PHONE_DIGITS, config::WHATSAPP_GREETING);

    html! {
        <section id={Section::Contact.dom_id()} class="contact-section panel">
            <h2>{Section::Contact.heading()}</h2>
            <p class="contact-intro">
                {"Ready to bring your vision to life? Get in touch to discuss your project or explore more of my work."}
            </p>

            <div class="contact-lines">
                <p>
                    <span class="contact-icon" aria-hidden="true">{"📞"}</span>
                    {"Phone: "}
                    <a href={call_link.clone()}>{config::PHONE_DISPLAY}</a>
                </p>
                <p>
                    <span class="contact-icon" aria-hidden="true">{"✉️"}</span>
                    {"Email: "}
                    <a href={mail_link(config::EMAIL)}>{config::EMAIL}</a>
                </p>
            </div>

            <div class="contact-actions">
                <a href={call_link} class="contact-button call-button">{"Call Now"}</a>
                <a href={whatsapp} target="_blank" rel="noopener noreferrer" class="contact-button whatsapp-button">
                    {"Message on WhatsApp"}
                </a>
            </div>

            <div class="contact-socials">
                <a href={config::INSTAGRAM_PROFILE} target="_blank" rel="noopener noreferrer" aria-label="Instagram">
                    {"Instagram"}
                </a>
                <a href={config::TIKTOK_PROFILE} target="_blank" rel="noopener noreferrer" aria-label="TikTok">
                    {"TikTok"}
                </a>
            </div>
            <p class="contact-outro">
                {"Connect with me on social media or reach out directly for collaborations."}
            </p>
            <style>
                {r#"
                .contact-section {
                    text-align: center;
                }
                .contact-intro,
                .contact-outro {
                    color: #878787;
                }
                .contact-outro {
                    font-size: 0.85rem;
                    margin-top: 1.5rem;
                }
                .contact-lines {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 2rem;
                    font-size: 1.15rem;
                    color: #878787;
                }
                .contact-lines a {
                    color: #FFE4D0;
                    margin-left: 0.5rem;
                }
                .contact-icon {
                    margin-right: 0.5rem;
                }
                .contact-actions {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1.5rem;
                    margin-top: 1.5rem;
                }
                .contact-button {
                    display: inline-block;
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    font-weight: 500;
                    text-decoration: none;
                    color: #16151A;
                    transition: transform 0.3s ease, background 0.3s ease;
                }
                .contact-button:hover {
                    transform: translateY(-0.25rem);
                }
                .call-button {
                    background: #F67011;
                }
                .call-button:hover {
                    background: #873800;
                }
                .whatsapp-button {
                    background: #FFE4D0;
                }
                .whatsapp-button:hover {
                    background: #878787;
                }
                .contact-socials {
                    display: flex;
                    justify-content: center;
                    gap: 1.5rem;
                    margin-top: 2rem;
                }
                .contact-socials a {
                    color: #878787;
                    transition: color 0.3s ease;
                }
                .contact-socials a:hover {
                    color: #F67011;
                }
                "#}
            </style>
        </section>
    }
}
