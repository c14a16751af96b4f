use yew::prelude::*;

use crate::sections::Section;

struct ServiceCard {
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
    // (rate, optional note)
    rates: &'static [(&'static str, Option<&'static str>)],
}

const SERVICES: &[ServiceCard] = &[
    ServiceCard {
        icon: "🎬",
        title: "Directing",
        blurb: "Bringing your creative vision to the screen. Specializing in leading projects from concept to completion.",
        rates: &[
            ("Short Film/Music Video: KES 15,000+", Some("(Consult for quote)")),
            ("TV Segment/Episode: KES 10,000+", Some("(Per segment)")),
            ("Commercial/Ad Spot: KES 20,000+", Some("(Concept to basic prod.)")),
            ("Day Rate (Production): KES 8,000+", Some("(Director's fee, up to 8 hrs)")),
        ],
    },
    ServiceCard {
        icon: "📷",
        title: "Photography",
        blurb: "Capturing moments and stories through compelling still images for portraits, events, and commercial needs.",
        rates: &[
            ("Portrait Session: KES 4,000+", Some("(1hr, 10 edited photos)")),
            ("Event Hourly: KES 2,000/hr+", Some("(Min. 2 hrs)")),
            ("Event Half-Day (4hrs): KES 7,000+", None),
            ("Event Full-Day (8hrs): KES 12,000+", None),
            ("Commercial Shoot: KES 10,000+", Some("(Consult for specifics)")),
            ("Additional Edited Photo: KES 200", None),
        ],
    },
    ServiceCard {
        icon: "🎥",
        title: "Videography",
        blurb: "Producing high-quality video content for events, corporate needs, documentaries, and more.",
        rates: &[
            ("Event Hourly: KES 4,000/hr+", Some("(Min. 2 hrs, basic edit)")),
            ("Event Half-Day (4hrs): KES 12,000+", Some("(Edited highlight)")),
            ("Event Full-Day (8hrs): KES 25,000+", Some("(Comprehensive edit)")),
            ("Corporate Video: KES 20,000+", Some("(Short promo, consult)")),
            ("Basic Package: KES 12,000+", Some("(e.g. Simple promo, ~2min)")),
            ("Standard Package: KES 25,000+", Some("(e.g. Event highlight, ~5min)")),
        ],
    },
    ServiceCard {
        icon: "✂️",
        title: "Video & Photo Editing",
        blurb: "Transforming raw footage and images into polished, professional content. Comprehensive post-production.",
        rates: &[
            ("Video Editing Project: KES 5,000+", Some("(Basic, complexity dependent)")),
            ("Photo Retouching: KES 200-400/photo", Some("(Complexity based)")),
            ("Hourly Editing Rate: KES 2,000/hr+", None),
            ("Basic Editing Package: KES 8,000+", Some("(Approx. 5-6 hrs work)")),
        ],
    },
];

fn render_card(card: &ServiceCard) -> Html {
    html! {
        <div class="service-card" key={card.title}>
            <div class="service-icon" aria-hidden="true">{card.icon}</div>
            <h3>{card.title}</h3>
            <p class="service-blurb">{card.blurb}</p>
            <div class="service-rates">
                <h4>{"Rates:"}</h4>
                <ul>
                    { for card.rates.iter().map(|(rate, note)| html! {
                        <li>
                            {*rate}
                            if let Some(note) = note {
                                <span class="rate-note">{*note}</span>
                            }
                        </li>
                    }) }
                </ul>
            </div>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id={Section::Services.dom_id()} class="services-section panel">
            <h2>{Section::Services.heading()}</h2>
            <div class="services-grid">
                { for SERVICES.iter().map(render_card) }
            </div>
            <p class="services-note">
                {"Please note: Rates are indicative starting points. Prices may vary based on project scope, complexity, specific requirements, and travel. "}
                <strong>{"Contact for a detailed quote."}</strong>
            </p>
            <style>
                {r#"
                .services-section {
                    text-align: center;
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 2rem;
                    margin-top: 2.5rem;
                }
                .service-card {
                    display: flex;
                    flex-direction: column;
                    background: #16151A;
                    border: 1px solid #F67011;
                    border-radius: 8px;
                    padding: 1.5rem;
                    transition: transform 0.3s ease, border-color 0.3s ease;
                }
                .service-card:hover {
                    transform: translateY(-0.5rem);
                    border-color: #FFE4D0;
                }
                .service-icon {
                    font-size: 2.25rem;
                    margin-bottom: 1rem;
                }
                .service-card h3 {
                    color: #FFE4D0;
                    margin: 0 0 0.75rem 0;
                }
                .service-blurb {
                    flex-grow: 1;
                    color: #878787;
                    font-size: 0.9rem;
                    line-height: 1.6;
                }
                .service-rates {
                    margin-top: 1rem;
                    padding-top: 1rem;
                    border-top: 1px solid #F67011;
                    color: #878787;
                    font-size: 0.85rem;
                }
                .service-rates h4 {
                    color: #FFE4D0;
                    margin: 0 0 0.5rem 0;
                }
                .service-rates ul {
                    margin: 0;
                    padding-left: 1rem;
                    text-align: left;
                }
                .rate-note {
                    display: block;
                    font-size: 0.75rem;
                    color: #6b6b6b;
                }
                .services-note {
                    margin-top: 2.5rem;
                    color: #878787;
                }
                .services-note strong {
                    color: #FFE4D0;
                }
                "#}
            </style>
        </section>
    }
}
