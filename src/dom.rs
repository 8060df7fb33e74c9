use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up a required element by id and cast it.
pub fn require_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow!("#{} has unexpected type: {:?}", id, e))
}

/// Look up a required element by selector under `root` and cast it.
pub fn require_selector<T: JsCast>(root: &web::Element, selector: &str) -> anyhow::Result<T> {
    root.query_selector(selector)
        .map_err(|e| anyhow!("bad selector {}: {:?}", selector, e))?
        .ok_or_else(|| anyhow!("missing {}", selector))?
        .dyn_into::<T>()
        .map_err(|e| anyhow!("{} has unexpected type: {:?}", selector, e))
}

pub fn require_document_selector<T: JsCast>(
    document: &web::Document,
    selector: &str,
) -> anyhow::Result<T> {
    document
        .query_selector(selector)
        .map_err(|e| anyhow!("bad selector {}: {:?}", selector, e))?
        .ok_or_else(|| anyhow!("missing {}", selector))?
        .dyn_into::<T>()
        .map_err(|e| anyhow!("{} has unexpected type: {:?}", selector, e))
}

/// Optional elements (audio panel, status line) may be absent.
#[inline]
pub fn find_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

#[inline]
pub fn find_selector(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn add_listener<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::error!("add {} listener: {:?}", event, e);
    }
    closure.forget();
}

/// Like [`add_listener`], but the browser drops the listener after its first call.
pub fn add_listener_once<E>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let options = web::AddEventListenerOptions::new();
    options.set_once(true);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        log::error!("add {} listener: {:?}", event, e);
    }
    closure.forget();
}

#[inline]
pub fn set_text(el: &web::Element, text: &str) {
    el.set_text_content(Some(text));
}
