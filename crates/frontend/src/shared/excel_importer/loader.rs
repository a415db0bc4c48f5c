//! On-demand loading of the SheetJS script.
//!
//! The script tag is injected on the first import and awaited through its
//! `load`/`error` events, raced against a timeout. All callers share one
//! in-flight load; a failed load is forgotten so the next attempt starts over.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use futures::future::{select, Either, FutureExt, LocalBoxFuture, Shared};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::error::ImportError;

pub const LOAD_TIMEOUT_SECS: u32 = 10;

const SCRIPT_MARKER: &str = "data-sheetjs";
const SCRIPT_MARKER_VALUE: &str = "xlsx";

/// One shared load at a time. Callers arriving while a load runs await the
/// same future; a success stays cached, a failure clears the slot.
pub struct LoadOnce<T, E> {
    slot: RefCell<Option<Shared<LocalBoxFuture<'static, Result<T, E>>>>>,
}

impl<T, E> LoadOnce<T, E>
where
    T: Clone + 'static,
    E: Clone + 'static,
{
    pub fn new() -> Self {
        Self {
            slot: RefCell::new(None),
        }
    }

    /// `loader` runs only when no load is cached or in flight
    pub async fn get_or_load<F, Fut>(&self, loader: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>> + 'static,
    {
        let load = self
            .slot
            .borrow_mut()
            .get_or_insert_with(|| loader().boxed_local().shared())
            .clone();

        let result = load.clone().await;
        if result.is_err() {
            let mut slot = self.slot.borrow_mut();
            // a retry may already have replaced the failed load
            if slot.as_ref().is_some_and(|current| current.ptr_eq(&load)) {
                *slot = None;
            }
        }
        result
    }
}

impl<T, E> Default for LoadOnce<T, E>
where
    T: Clone + 'static,
    E: Clone + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    static SHEETJS_LOAD: Rc<LoadOnce<(), ImportError>> = Rc::new(LoadOnce::new());
}

/// `true` once the `XLSX` global is present
pub fn sheetjs_available() -> bool {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("XLSX"))
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false)
}

/// Make SheetJS available, loading it from `url` at most once at a time
pub async fn ensure_sheetjs_loaded(url: &str) -> Result<(), ImportError> {
    if sheetjs_available() {
        return Ok(());
    }

    let memo = SHEETJS_LOAD.with(Rc::clone);
    let result = memo
        .get_or_load(|| {
            log::info!("Carregando SheetJS de {}", url);
            inject_and_wait(url.to_string(), LOAD_TIMEOUT_SECS)
        })
        .await;
    if let Err(e) = &result {
        log::error!("SheetJS indisponível: {}", e);
    }
    result
}

fn load_failed(context: &str, err: JsValue) -> ImportError {
    ImportError::LoadFailed(format!("{}: {:?}", context, err))
}

async fn inject_and_wait(url: String, timeout_secs: u32) -> Result<(), ImportError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ImportError::LoadFailed("documento indisponível".into()))?;
    let head = document
        .head()
        .ok_or_else(|| ImportError::LoadFailed("<head> ausente".into()))?;

    // A tag left by an earlier failed attempt never fires again
    let selector = format!("script[{}=\"{}\"]", SCRIPT_MARKER, SCRIPT_MARKER_VALUE);
    if let Ok(Some(stale)) = document.query_selector(&selector) {
        stale.remove();
    }

    let script: web_sys::HtmlScriptElement = document
        .create_element("script")
        .map_err(|e| load_failed("create_element", e))?
        .dyn_into()
        .map_err(|_| ImportError::LoadFailed("elemento <script> inesperado".into()))?;
    script.set_src(&url);
    script.set_async(true);
    script
        .set_attribute(SCRIPT_MARKER, SCRIPT_MARKER_VALUE)
        .map_err(|e| load_failed("set_attribute", e))?;

    let settled = js_sys::Promise::new(&mut |resolve, reject| {
        script.set_onload(Some(&resolve));
        script.set_onerror(Some(&reject));
    });

    head.append_child(&script)
        .map_err(|e| load_failed("append_child", e))?;

    let loaded = JsFuture::from(settled);
    let timeout = TimeoutFuture::new(timeout_secs * 1000);
    futures::pin_mut!(loaded, timeout);

    match select(loaded, timeout).await {
        Either::Left((Ok(_), _)) if sheetjs_available() => {
            log::info!("SheetJS carregado");
            Ok(())
        }
        Either::Left((Ok(_), _)) => Err(ImportError::LoadFailed(
            "o script carregou mas não definiu XLSX".into(),
        )),
        Either::Left((Err(_), _)) => Err(ImportError::LoadFailed(format!(
            "não foi possível baixar {}",
            url
        ))),
        Either::Right(_) => Err(ImportError::LoadTimeout {
            seconds: timeout_secs,
        }),
    }
}
