use log::{debug, error, info, warn};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};
use web_sys::{window, Document, HtmlScriptElement};

use crate::portfolio::models::{Media, PortfolioItem};

/// Third-party scripts that turn `<blockquote>` placeholders into rich posts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmbedProvider {
    TikTok,
    Instagram,
}

impl EmbedProvider {
    pub fn for_media(media: &Media) -> Option<EmbedProvider> {
        match media {
            Media::GalleryLink { .. } => None,
            Media::ShortVideo { .. } => Some(EmbedProvider::TikTok),
            Media::PhotoPost { .. } => Some(EmbedProvider::Instagram),
        }
    }

    pub fn script_id(self) -> &'static str {
        match self {
            EmbedProvider::TikTok => "tiktok-embed-script",
            EmbedProvider::Instagram => "instagram-embed-script",
        }
    }

    pub fn script_url(self) -> &'static str {
        match self {
            EmbedProvider::TikTok => "https://www.tiktok.com/embed.js",
            EmbedProvider::Instagram => "https://www.instagram.com/embed.js",
        }
    }

    /// Object path on `window` holding the reprocess function, and its name.
    fn hook(self) -> (&'static [&'static str], &'static str) {
        match self {
            EmbedProvider::TikTok => (&["tiktokEmbed", "lib"], "render"),
            EmbedProvider::Instagram => (&["instgrm", "Embeds"], "process"),
        }
    }

    pub fn placeholder_selector(self) -> &'static str {
        match self {
            EmbedProvider::TikTok => "blockquote.tiktok-embed",
            EmbedProvider::Instagram => "blockquote.instagram-media",
        }
    }
}

/// Providers needed by `items`, first-seen order, no repeats.
pub fn providers_for<'a, I>(items: I) -> Vec<EmbedProvider>
where
    I: IntoIterator<Item = &'a PortfolioItem>,
{
    let mut providers = Vec::new();
    for provider in items.into_iter().filter_map(|item| EmbedProvider::for_media(&item.media)) {
        if !providers.contains(&provider) {
            providers.push(provider);
        }
    }
    providers
}

#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("no window available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl EmbedError {
    fn from_js(value: JsValue) -> EmbedError {
        EmbedError::Dom(format!("{:?}", value))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Script element was added; its load handler runs the hook.
    Attached,
    /// Script was already present and the hook ran.
    Reprocessed,
    /// Script was already present but has not defined its hook yet.
    HookPending,
}

/// The bits of the document the loader touches.
pub trait ScriptHost {
    fn has_script(&self, id: &str) -> bool;
    fn attach_script(&self, provider: EmbedProvider) -> Result<(), EmbedError>;
    /// Runs the provider's reprocess hook. `Ok(false)` when the hook is not defined yet.
    fn reprocess(&self, provider: EmbedProvider) -> Result<bool, EmbedError>;
}

pub fn ensure_loaded<H>(host: &H, provider: EmbedProvider) -> Result<LoadOutcome, EmbedError>
where
    H: ScriptHost + ?Sized,
{
    if !host.has_script(provider.script_id()) {
        host.attach_script(provider)?;
        return Ok(LoadOutcome::Attached);
    }
    if host.reprocess(provider)? {
        Ok(LoadOutcome::Reprocessed)
    } else {
        Ok(LoadOutcome::HookPending)
    }
}

/// Ensures every provider in `providers` is loaded. Failures are logged only;
/// the fallback links in the markup stay usable.
pub fn load_all<H>(host: &H, providers: &[EmbedProvider])
where
    H: ScriptHost + ?Sized,
{
    for provider in providers {
        match ensure_loaded(host, *provider) {
            Ok(outcome) => debug!("Embed {:?}: {:?}", provider, outcome),
            Err(e) => warn!("Embed {:?} could not be loaded: {}", provider, e),
        }
    }
}

pub struct DomScriptHost {
    document: Document,
}

impl DomScriptHost {
    pub fn new() -> Result<DomScriptHost, EmbedError> {
        let document = window()
            .ok_or(EmbedError::NoWindow)?
            .document()
            .ok_or(EmbedError::NoDocument)?;
        Ok(DomScriptHost { document })
    }
}

impl ScriptHost for DomScriptHost {
    fn has_script(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn attach_script(&self, provider: EmbedProvider) -> Result<(), EmbedError> {
        let body = self.document.body().ok_or(EmbedError::NoBody)?;
        let script: HtmlScriptElement = self
            .document
            .create_element("script")
            .map_err(EmbedError::from_js)?
            .dyn_into()
            .map_err(|_| EmbedError::Dom("created element is not a script".to_string()))?;

        script.set_src(provider.script_url());
        script.set_id(provider.script_id());
        script.set_async(true);
        script.set_defer(true);

        let onload = Closure::<dyn Fn()>::new(move || match run_hook(provider) {
            Ok(true) => info!("{:?} embeds processed", provider),
            Ok(false) => warn!("{:?} script loaded without its embed hook", provider),
            Err(e) => error!("{:?} embed hook failed: {}", provider, e),
        });
        script.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        let onerror = Closure::<dyn Fn()>::new(move || {
            gloo_console::error!("Failed to load script:", provider.script_url());
        });
        script.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();

        body.append_child(&script).map_err(EmbedError::from_js)?;
        Ok(())
    }

    fn reprocess(&self, provider: EmbedProvider) -> Result<bool, EmbedError> {
        run_hook(provider)
    }
}

fn run_hook(provider: EmbedProvider) -> Result<bool, EmbedError> {
    let window = window().ok_or(EmbedError::NoWindow)?;
    let (path, method) = provider.hook();

    let mut target = JsValue::from(window.clone());
    for key in path {
        target = Reflect::get(&target, &JsValue::from_str(key)).map_err(EmbedError::from_js)?;
        if target.is_undefined() || target.is_null() {
            return Ok(false);
        }
    }
    let hook = Reflect::get(&target, &JsValue::from_str(method)).map_err(EmbedError::from_js)?;
    let Some(hook) = hook.dyn_ref::<Function>() else {
        return Ok(false);
    };

    let called = match provider {
        EmbedProvider::Instagram => hook.call0(&target),
        EmbedProvider::TikTok => {
            let document = window.document().ok_or(EmbedError::NoDocument)?;
            let placeholders = document
                .query_selector_all(provider.placeholder_selector())
                .map_err(EmbedError::from_js)?;
            hook.call1(&target, &placeholders)
        }
    };
    called.map_err(EmbedError::from_js)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::catalog;
    use crate::portfolio::filter::{filter_items, Filter};
    use crate::portfolio::models::Category;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeHost {
        scripts: RefCell<Vec<&'static str>>,
        hooks_ready: Cell<bool>,
        reprocessed: RefCell<Vec<EmbedProvider>>,
        fail_attach: bool,
    }

    impl ScriptHost for FakeHost {
        fn has_script(&self, id: &str) -> bool {
            self.scripts.borrow().iter().any(|s| *s == id)
        }

        fn attach_script(&self, provider: EmbedProvider) -> Result<(), EmbedError> {
            if self.fail_attach {
                return Err(EmbedError::NoBody);
            }
            self.scripts.borrow_mut().push(provider.script_id());
            Ok(())
        }

        fn reprocess(&self, provider: EmbedProvider) -> Result<bool, EmbedError> {
            if !self.hooks_ready.get() {
                return Ok(false);
            }
            self.reprocessed.borrow_mut().push(provider);
            Ok(true)
        }
    }

    #[test]
    fn same_script_twice_attaches_once() {
        let host = FakeHost::default();
        host.hooks_ready.set(true);

        assert_eq!(ensure_loaded(&host, EmbedProvider::Instagram).unwrap(), LoadOutcome::Attached);
        assert_eq!(ensure_loaded(&host, EmbedProvider::Instagram).unwrap(), LoadOutcome::Reprocessed);

        let scripts = host.scripts.borrow();
        assert_eq!(scripts.iter().filter(|s| **s == "instagram-embed-script").count(), 1);
        assert_eq!(*host.reprocessed.borrow(), vec![EmbedProvider::Instagram]);
    }

    #[test]
    fn attached_script_without_hook_is_pending() {
        let host = FakeHost::default();
        ensure_loaded(&host, EmbedProvider::TikTok).unwrap();
        assert_eq!(ensure_loaded(&host, EmbedProvider::TikTok).unwrap(), LoadOutcome::HookPending);
        assert_eq!(host.scripts.borrow().len(), 1);
    }

    #[test]
    fn providers_are_independent() {
        let host = FakeHost::default();
        load_all(&host, &[EmbedProvider::TikTok, EmbedProvider::Instagram]);
        load_all(&host, &[EmbedProvider::Instagram, EmbedProvider::TikTok]);
        assert_eq!(
            *host.scripts.borrow(),
            vec!["tiktok-embed-script", "instagram-embed-script"]
        );
    }

    #[test]
    fn attach_failure_is_swallowed_by_load_all() {
        let host = FakeHost { fail_attach: true, ..FakeHost::default() };
        assert!(matches!(
            ensure_loaded(&host, EmbedProvider::TikTok),
            Err(EmbedError::NoBody)
        ));
        load_all(&host, &[EmbedProvider::TikTok]);
        assert!(host.scripts.borrow().is_empty());
    }

    #[test]
    fn providers_follow_displayed_items() {
        let catalog = catalog::load().unwrap();
        assert_eq!(
            providers_for(catalog.iter()),
            vec![EmbedProvider::TikTok, EmbedProvider::Instagram]
        );

        let videos = filter_items(&catalog, Filter::Only(Category::Videography));
        assert_eq!(providers_for(videos.iter().copied()), vec![EmbedProvider::TikTok]);

        let social = filter_items(&catalog, Filter::Only(Category::Social));
        assert_eq!(providers_for(social.iter().copied()), vec![EmbedProvider::Instagram]);
    }

    #[test]
    fn galleries_need_no_script() {
        let catalog = catalog::load().unwrap();
        let galleries: Vec<_> = catalog
            .iter()
            .filter(|i| matches!(i.media, Media::GalleryLink { .. }))
            .collect();
        assert!(!galleries.is_empty());
        assert!(providers_for(galleries).is_empty());
    }
}
