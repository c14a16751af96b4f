use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::sections::{NavState, Section};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub state: NavState,
    pub on_navigate: Callback<Section>,
    pub on_toggle_menu: Callback<()>,
}

/// Reads the `data-section` key of the clicked nav entry.
fn clicked_section(e: &MouseEvent) -> Section {
    let key = e
        .target_dyn_into::<Element>()
        .and_then(|el| el.closest("[data-section]").ok().flatten())
        .and_then(|el| el.get_attribute("data-section"))
        .unwrap_or_default();
    Section::parse(&key)
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { state, on_navigate, on_toggle_menu } = props;

    let on_link_click = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(clicked_section(&e));
        })
    };

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let menu_class = if state.menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <h1 class="nav-logo" data-section={Section::Home.dom_id()} onclick={on_link_click.clone()}>
                    {config::OWNER_NAME}
                </h1>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle navigation menu">
                    { if state.menu_open { "✕" } else { "☰" } }
                </button>

                <ul class={menu_class} aria-label="Main navigation">
                    { for Section::ALL.iter().map(|section| {
                        let active = state.is_active(*section);
                        html! {
                            <li key={section.dom_id()}>
                                <button
                                    class={classes!("nav-link", active.then(|| "active"))}
                                    data-section={section.dom_id()}
                                    aria-current={active.then(|| "page")}
                                    onclick={on_link_click.clone()}
                                >
                                    {section.label()}
                                </button>
                            </li>
                        }
                    }) }
                </ul>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 20;
                    padding: 1rem;
                    background: rgba(22, 21, 26, 0.9);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid #F67011;
                    box-sizing: border-box;
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    margin: 0;
                    font-size: 1.75rem;
                    font-weight: 800;
                    cursor: pointer;
                    background: linear-gradient(to right, #F67011, #873800);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: #FFE4D0;
                    font-size: 1.5rem;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .nav-links {
                    display: flex;
                    gap: 1.5rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .nav-link {
                    background: none;
                    border: none;
                    border-bottom: 2px solid transparent;
                    color: #878787;
                    font-size: 1.1rem;
                    padding: 0.5rem 0.75rem;
                    cursor: pointer;
                    transition: color 0.3s ease;
                }
                .nav-link:hover {
                    color: #F67011;
                }
                .nav-link.active {
                    color: #F67011;
                    font-weight: 600;
                    border-bottom-color: #F67011;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: block;
                    }
                    .nav-links {
                        display: none;
                        width: 100%;
                    }
                    .nav-links.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1rem;
                        padding: 1rem 0;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
