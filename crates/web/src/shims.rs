use cfg_if::cfg_if;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, EventTarget, Window};

use crate::{Result, WebError};

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    //
    // For more details see
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(WebError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(WebError::NoDocument)
}

/// Finds the first element matching `selector` and casts it to the concrete
/// element type `T`, e.g. [`web_sys::HtmlInputElement`].
pub fn query<T: JsCast>(document: &Document, selector: &str) -> Result<T> {
    let element = document
        .query_selector(selector)
        .map_err(|err| WebError::InvalidSelector {
            selector: selector.to_owned(),
            reason: describe_js_value(&err),
        })?
        .ok_or_else(|| WebError::MissingElement(selector.to_owned()))?;

    element
        .dyn_into::<T>()
        .map_err(|_| WebError::WrongElementType {
            selector: selector.to_owned(),
            expected: short_type_name::<T>(),
        })
}

/// Attaches `handler` as a listener for `event` on `target` for the lifetime
/// of the page. The closure is intentionally leaked: page-level listeners are
/// never removed.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|err| WebError::ListenerFailed {
            event: event.to_owned(),
            reason: describe_js_value(&err),
        })?;
    closure.forget();
    Ok(())
}

/// `true` once the document is past `loading`.
pub fn is_document_ready(document: &Document) -> bool {
    document.ready_state() != "loading"
}

/// Runs `ready` once the document has been parsed.
///
/// When the document is already past `loading` the callback runs
/// immediately and its result is returned. Otherwise it waits for
/// `DOMContentLoaded` and a failure can only be logged.
pub fn on_document_ready<F, E>(ready: F) -> std::result::Result<(), E>
where
    F: FnOnce() -> std::result::Result<(), E> + 'static,
    E: From<WebError> + std::fmt::Display + 'static,
{
    let document = document()?;
    if is_document_ready(&document) {
        return ready();
    }

    let callback = Closure::once_into_js(move || {
        if let Err(err) = ready() {
            neo_logs::error!("DOMContentLoaded handler failed: {}", err);
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        .map_err(|err| WebError::ListenerFailed {
            event: String::from("DOMContentLoaded"),
            reason: describe_js_value(&err),
        })?;
    Ok(())
}

/// Renders a thrown or rejected JS value as text.
///
/// Strings are returned as-is, `Error` objects as their message and
/// everything else through its debug representation.
pub fn describe_js_value(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{value:?}")
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Spawns and runs a thread-local [`Future`] in a platform-independent way.
///
/// This can be used to interface with any `async` code by spawning a task
/// to run a `Future`.
///
/// ## Limitations
///
/// When in WASM: this uses Promises underneath and hence will be async.
///
/// When in test: this blocks current thread until the future completes.
///
/// When in normal runtime: this blocks current thread and schedules
/// future on current thread for completion until the future completion,
/// which means if you call it in a different thread then it runs the
/// future in that thread till completion.
pub fn spawn_local<F>(future: F)
where
    F: futures::Future<Output = ()> + 'static,
{
    cfg_if! {
        if #[cfg(target_arch="wasm32")] {
            wasm_bindgen_futures::spawn_local(future);
        } else if #[cfg(any(test, doctest))] {
            tokio_test::block_on(future);
        } else {
            futures::executor::block_on(future);
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::{cell::Cell, rc::Rc};

    use wasm_bindgen_test::wasm_bindgen_test;
    use web_sys::{HtmlElement, HtmlInputElement};

    use super::*;

    fn page(html: &str) -> Document {
        let document = document().unwrap();
        document.body().unwrap().set_inner_html(html);
        document
    }

    #[wasm_bindgen_test]
    fn query_casts_to_the_requested_element_type() {
        let document = page(r#"<input id="name" value="Ann" />"#);

        let input: HtmlInputElement = query(&document, "#name").unwrap();

        assert_eq!(input.value(), "Ann");
    }

    #[wasm_bindgen_test]
    fn query_reports_missing_element() {
        let document = page("<p></p>");

        let result = query::<HtmlElement>(&document, "#apis");

        assert_eq!(result.unwrap_err(), WebError::MissingElement(String::from("#apis")));
    }

    #[wasm_bindgen_test]
    fn query_reports_wrong_element_type() {
        let document = page(r#"<div id="name"></div>"#);

        let result = query::<HtmlInputElement>(&document, "#name");

        assert_eq!(
            result.unwrap_err(),
            WebError::WrongElementType {
                selector: String::from("#name"),
                expected: "HtmlInputElement",
            }
        );
    }

    #[wasm_bindgen_test]
    fn query_reports_invalid_selector() {
        let document = page("<p></p>");

        let result = query::<HtmlElement>(&document, "##");

        assert!(matches!(result, Err(WebError::InvalidSelector { .. })));
    }

    #[wasm_bindgen_test]
    fn ready_document_runs_callback_immediately() {
        let ran = Rc::new(Cell::new(false));
        let marker = ran.clone();

        let result = on_document_ready(move || {
            marker.set(true);
            Ok::<(), WebError>(())
        });

        assert!(result.is_ok());
        assert!(ran.get());
    }

    #[wasm_bindgen_test]
    fn ready_document_returns_callback_error() {
        let result = on_document_ready(|| Err(WebError::MissingElement(String::from("#apis"))));

        assert_eq!(result.unwrap_err(), WebError::MissingElement(String::from("#apis")));
    }

    #[wasm_bindgen_test]
    fn listener_receives_dispatched_events() {
        let document = page(r#"<div id="target"></div>"#);
        let target: HtmlElement = query(&document, "#target").unwrap();
        let seen = Rc::new(Cell::new(0));
        let counter = seen.clone();

        listen(&target, "ping", move |_| counter.set(counter.get() + 1)).unwrap();
        target
            .dispatch_event(&web_sys::Event::new("ping").unwrap())
            .unwrap();

        assert_eq!(seen.get(), 1);
    }
}
