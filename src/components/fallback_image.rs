use web_sys::HtmlImageElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FallbackImageProps {
    pub src: AttrValue,
    pub fallback: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// `<img>` that swaps to a placeholder once if the real image fails to load.
#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let onerror = {
        let fallback = props.fallback.clone();
        Callback::from(move |e: Event| {
            if let Some(img) = e.target_dyn_into::<HtmlImageElement>() {
                // The placeholder failing too must not loop
                if img.src() != fallback.as_str() {
                    log::debug!("Image {} failed, using placeholder", img.src());
                    img.set_src(&fallback);
                }
            }
        })
    };

    html! {
        <img
            src={props.src.clone()}
            alt={props.alt.clone()}
            class={props.class.clone()}
            loading="lazy"
            {onerror}
        />
    }
}
