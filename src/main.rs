use yew::prelude::*;
use log::{debug, info};
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};

mod config;
mod embeds;
mod links;
mod sections;
mod portfolio {
    pub mod catalog;
    pub mod filter;
    pub mod models;
}
mod components {
    pub mod fallback_image;
    pub mod footer;
    pub mod nav;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod portfolio;
    pub mod services;
}

use components::{footer::Footer, nav::Nav};
use pages::{
    about::About,
    contact::Contact,
    home::Home,
    portfolio::Portfolio,
    services::Services,
};
use portfolio::catalog::{self, Catalog};
use sections::{NavState, Section};


fn render_section(section: Section, catalog: &Catalog, on_contact_click: &Callback<()>) -> Html {
    match section {
        Section::Home => {
            info!("Rendering Home section");
            html! { <Home key="home" /> }
        },
        Section::About => {
            info!("Rendering About section");
            html! { <About key="about" /> }
        },
        Section::Services => {
            info!("Rendering Services section");
            html! { <Services key="services" /> }
        },
        Section::Portfolio => {
            info!("Rendering Portfolio section");
            html! {
                <Portfolio
                    key="portfolio"
                    catalog={catalog.clone()}
                    on_contact_click={on_contact_click.clone()}
                />
            }
        },
        Section::Contact => {
            info!("Rendering Contact section");
            html! { <Contact key="contact" /> }
        },
    }
}

fn scroll_to_section(section: Section) {
    if let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.dom_id()))
    {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    } else {
        debug!("No element for section {}", section.dom_id());
    }
}


#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub catalog: Catalog,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let nav = use_state(NavState::default);

    let navigate = {
        let nav = nav.clone();
        Callback::from(move |section: Section| {
            debug!("Navigating to {}", section.dom_id());
            nav.set(nav.navigate(section));
        })
    };

    let toggle_menu = {
        let nav = nav.clone();
        Callback::from(move |_: ()| {
            nav.set(nav.toggle_menu());
        })
    };

    // Effects run after commit, so the target section is in the DOM by now
    {
        let target = nav.current;
        let wants_scroll = nav.wants_scroll();
        use_effect_with_deps(move |_| {
            if wants_scroll {
                scroll_to_section(target);
            }
            || ()
        }, nav.scroll_seq);
    }

    let on_contact_click = navigate.reform(|_| Section::Contact);

    html! {
        <div class="site-root">
            <Nav state={(*nav).clone()} on_navigate={navigate} on_toggle_menu={toggle_menu} />
            <main class="site-main">
                { render_section(nav.current, &props.catalog, &on_contact_click) }
            </main>
            <Footer />
            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    background: #16151A;
                    color: #FFE4D0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    -webkit-font-smoothing: antialiased;
                }
                .site-root {
                    min-height: 100vh;
                    padding-top: 7rem;
                }
                .site-main {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 2rem 1rem;
                    scroll-margin-top: 7rem;
                }
                .site-main section {
                    scroll-margin-top: 7rem;
                }
                .panel {
                    background: #262626;
                    border: 2px solid #F67011;
                    border-radius: 12px;
                    padding: 3rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                }
                .panel h2 {
                    color: #FFE4D0;
                    font-size: 2.25rem;
                    margin-top: 0;
                }
                @media (max-width: 768px) {
                    .panel {
                        padding: 1.5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting portfolio site");
    let catalog = catalog::load_or_empty();
    yew::Renderer::<App>::with_props(AppProps { catalog }).render();
}
