use gloo_timers::callback::Timeout;
use log::{debug, warn};
use yew::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::config;
use crate::embeds::{self, DomScriptHost};
use crate::portfolio::catalog::Catalog;
use crate::portfolio::filter::{Filter, GridView};
use crate::portfolio::models::{Media, PortfolioItem};
use crate::sections::Section;

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub catalog: Catalog,
    pub on_contact_click: Callback<()>,
}

fn render_media(item: &PortfolioItem) -> Html {
    match &item.media {
        Media::GalleryLink { thumbnail_url, link } => html! {
            <a href={link.clone()} target="_blank" rel="noopener noreferrer" class="media-gallery">
                <FallbackImage
                    src={thumbnail_url.clone()}
                    fallback={config::GALLERY_FALLBACK}
                    alt={item.title.clone()}
                    class="media-thumb"
                />
                <div class="media-overlay">
                    <span class="overlay-pill">{"↗ View Gallery"}</span>
                </div>
            </a>
        },
        Media::ShortVideo { media_url } => html! {
            <div class="media-embed media-dark">
                <blockquote
                    class="tiktok-embed"
                    cite={media_url.clone()}
                    data-video-id={item.media.video_id().unwrap_or_default().to_string()}
                >
                    <div class="embed-fallback">
                        <p>{"Loading TikTok..."}</p>
                        <a href={media_url.clone()} target="_blank" rel="noopener noreferrer">{"View on TikTok"}</a>
                    </div>
                </blockquote>
            </div>
        },
        Media::PhotoPost { media_url } => html! {
            <div class="media-embed media-light">
                <blockquote
                    class="instagram-media"
                    data-instgrm-captioned="true"
                    data-instgrm-permalink={media_url.clone()}
                    data-instgrm-version="14"
                >
                    <div class="embed-fallback">
                        <p>{"Loading Instagram post..."}</p>
                        <a href={media_url.clone()} target="_blank" rel="noopener noreferrer">{"View on Instagram"}</a>
                    </div>
                </blockquote>
            </div>
        },
    }
}

fn render_card(item: &PortfolioItem) -> Html {
    html! {
        <div class="portfolio-card" key={item.id} data-category={item.category.id()}>
            <div class="portfolio-media">
                { render_media(item) }
            </div>
            <div class="portfolio-body">
                <span class={item.category.badge_class()}>{item.category.badge_label()}</span>
                <h3>{item.title.clone()}</h3>
                <p>{item.description.clone()}</p>
                <div class="portfolio-link">
                    <a href={item.media.external_url().to_string()} target="_blank" rel="noopener noreferrer">
                        {format!("↗ {}", item.media.link_label())}
                    </a>
                </div>
            </div>
        </div>
    }
}

#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    let filter = use_state(Filter::default);
    let is_loading = use_state(|| true);

    // Spinner while the embed scripts get going
    {
        let is_loading = is_loading.clone();
        use_effect_with_deps(move |_| {
            let timeout = Timeout::new(config::PORTFOLIO_SETTLE_MS, move || {
                is_loading.set(false);
            });
            move || drop(timeout)
        }, ());
    }

    let view = GridView::build(*is_loading, &props.catalog, *filter);

    // Runs after the cards are committed, so the provider hooks find their blockquotes
    {
        let providers = match &view {
            GridView::Cards(cards) => embeds::providers_for(cards.iter().copied()),
            GridView::Loading | GridView::Empty => Vec::new(),
        };
        use_effect_with_deps(move |_| {
            if !providers.is_empty() {
                match DomScriptHost::new() {
                    Ok(host) => embeds::load_all(&host, &providers),
                    Err(e) => warn!("Skipping embeds: {}", e),
                }
            }
            || ()
        }, (*filter, *is_loading));
    }

    let on_contact = {
        let on_contact_click = props.on_contact_click.clone();
        Callback::from(move |_: MouseEvent| on_contact_click.emit(()))
    };

    html! {
        <section id={Section::Portfolio.dom_id()} class="portfolio-section panel">
            <h2>{Section::Portfolio.heading()}</h2>
            <p class="portfolio-intro">
                {"Explore my diverse range of visual storytelling projects across photography, videography, and social media content."}
            </p>

            <div class="filter-buttons">
                { for Filter::buttons().map(|f| {
                    let selected = f == *filter;
                    let onclick = {
                        let filter = filter.clone();
                        Callback::from(move |_: MouseEvent| {
                            debug!("Portfolio filter set to {:?}", f);
                            filter.set(f);
                        })
                    };
                    html! {
                        <button
                            key={f.label()}
                            class={classes!("filter-button", selected.then(|| "selected"))}
                            {onclick}
                        >
                            {f.label()}
                        </button>
                    }
                }) }
            </div>

            {
                match &view {
                    GridView::Loading => html! {
                        <div class="portfolio-loading">
                            <div class="spinner"></div>
                        </div>
                    },
                    GridView::Empty => html! {
                        <div class="portfolio-empty">
                            <p>{"No projects found in this category."}</p>
                        </div>
                    },
                    GridView::Cards(cards) => html! {
                        <div class="portfolio-grid">
                            { for cards.iter().map(|item| render_card(item)) }
                        </div>
                    },
                }
            }

            <div class="portfolio-cta">
                <button class="cta-button" onclick={on_contact}>
                    {"Ready to Create Something Amazing?"}
                </button>
                <p>{"Have a project in mind? Let's discuss how we can bring your vision to life."}</p>
            </div>
            <style>
                {r#"
                .portfolio-section {
                    text-align: center;
                }
                .portfolio-intro {
                    color: #878787;
                    font-size: 1.1rem;
                    max-width: 48rem;
                    margin: 0 auto 2rem auto;
                }
                .filter-buttons {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-bottom: 2rem;
                }
                .filter-button {
                    padding: 0.5rem 1rem;
                    border: none;
                    border-radius: 9999px;
                    background: #16151A;
                    color: #878787;
                    font-weight: 500;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .filter-button:hover {
                    background: #1e1e1e;
                    color: #FFE4D0;
                }
                .filter-button.selected {
                    background: #F67011;
                    color: #FFE4D0;
                }
                .portfolio-loading {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    height: 16rem;
                }
                .spinner {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    border-top: 2px solid #F67011;
                    border-bottom: 2px solid #F67011;
                    animation: spin 1s linear infinite;
                }
                @keyframes spin {
                    to { transform: rotate(360deg); }
                }
                .portfolio-empty {
                    padding: 3rem 0;
                    color: #878787;
                    font-size: 1.1rem;
                }
                .portfolio-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                    gap: 2rem;
                }
                .portfolio-card {
                    display: flex;
                    flex-direction: column;
                    background: #16151A;
                    border: 1px solid #262626;
                    border-radius: 8px;
                    overflow: hidden;
                    text-align: left;
                    transition: transform 0.3s ease, border-color 0.3s ease;
                }
                .portfolio-card:hover {
                    transform: translateY(-0.25rem);
                    border-color: #F67011;
                }
                .portfolio-media {
                    position: relative;
                    height: 15rem;
                    overflow: hidden;
                }
                .media-gallery {
                    display: block;
                    width: 100%;
                    height: 100%;
                }
                .media-thumb {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .media-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.3);
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .portfolio-card:hover .media-overlay {
                    opacity: 1;
                }
                .overlay-pill {
                    background: #F67011;
                    color: white;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                }
                .media-embed {
                    width: 100%;
                    height: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow-y: auto;
                }
                .media-dark {
                    background: black;
                    color: white;
                }
                .media-light {
                    background: white;
                    color: #16151A;
                }
                .media-embed blockquote {
                    width: 100%;
                    margin: 0;
                }
                .embed-fallback {
                    padding: 1rem;
                    text-align: center;
                }
                .embed-fallback a,
                .portfolio-link a {
                    color: #F67011;
                }
                .portfolio-body {
                    flex-grow: 1;
                    display: flex;
                    flex-direction: column;
                    padding: 1.25rem;
                }
                .portfolio-body h3 {
                    color: #FFE4D0;
                    margin: 0.75rem 0 0.5rem 0;
                }
                .portfolio-body p {
                    flex-grow: 1;
                    color: #878787;
                    font-size: 0.9rem;
                }
                .portfolio-link {
                    margin-top: auto;
                    padding-top: 0.75rem;
                    border-top: 1px solid #262626;
                    font-size: 0.9rem;
                }
                .badge {
                    align-self: flex-start;
                    padding: 0.25rem 0.5rem;
                    border-radius: 9999px;
                    font-size: 0.75rem;
                    font-weight: 600;
                }
                .badge-photo {
                    background: #1e3a8a;
                    color: #dbeafe;
                }
                .badge-video {
                    background: #581c87;
                    color: #f3e8ff;
                }
                .badge-social {
                    background: #7c2d12;
                    color: #ffedd5;
                }
                .portfolio-cta {
                    margin-top: 3rem;
                }
                .portfolio-cta p {
                    color: #878787;
                    font-size: 0.9rem;
                    margin-top: 1rem;
                }
                .cta-button {
                    padding: 0.75rem 2rem;
                    border: 1px solid #FFE4D0;
                    border-radius: 9999px;
                    background: linear-gradient(to right, #F67011, #873800);
                    color: #FFE4D0;
                    font-size: 1.1rem;
                    font-weight: 700;
                    cursor: pointer;
                    transition: transform 0.3s ease;
                }
                .cta-button:hover {
                    transform: scale(1.05);
                }
                "#}
            </style>
        </section>
    }
}
