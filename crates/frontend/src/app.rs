//! wasm entry points and DOM event wiring.

use std::{cell::Cell, future::Future, rc::Rc};

use anyhow::Context;
use neo_bridge::{Backend, Bridge, TauriBridge};
use wasm_bindgen::prelude::*;

use crate::{Controller, Elements, FrontendConfig, FrontendResult};

thread_local! {
    static STARTED: Cell<bool> = const { Cell::new(false) };
}

fn is_started() -> bool {
    STARTED.with(Cell::get)
}

fn mark_started() {
    STARTED.with(|started| started.set(true));
}

/// Module start: mounts with the embedded `frontend.toml` unless it disables
/// `autostart`.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    neo_web::set_panic_hook();

    let config = FrontendConfig::embedded().map_err(|err| js_error(&err.to_string()))?;
    if !config.autostart {
        return Ok(());
    }

    boot(config).map_err(|err| js_error(&format!("{err:#}")))
}

/// Mounts with a config handed over from JavaScript, same shape as
/// `frontend.toml`. `undefined` falls back to the embedded config.
#[wasm_bindgen(js_name = startWith)]
pub fn start_with(config: JsValue) -> Result<(), JsValue> {
    neo_web::set_panic_hook();

    let config = if config.is_undefined() || config.is_null() {
        FrontendConfig::embedded().map_err(|err| js_error(&err.to_string()))?
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|err| js_error(&format!("invalid frontend config: {err}")))?
    };

    boot(config).map_err(|err| js_error(&format!("{err:#}")))
}

fn boot(config: FrontendConfig) -> anyhow::Result<()> {
    if let Err(err) = neo_web::log::init_console_logging(config.max_level()) {
        // the host page may have installed its own subscriber
        neo_logs::debug!("{}", err);
    }

    if is_started() {
        neo_logs::warn!("frontend already started, ignoring second start");
        return Ok(());
    }

    neo_web::on_document_ready(move || start_once(&config, TauriBridge))
        .context("failed to mount the frontend")?;

    Ok(())
}

/// Mounts unless an earlier start already did. Only a successful mount
/// counts as started, so a failed one can be retried with `startWith`.
fn start_once<B: Bridge + 'static>(config: &FrontendConfig, bridge: B) -> FrontendResult<()> {
    if is_started() {
        neo_logs::warn!("frontend already started, ignoring second start");
        return Ok(());
    }

    mount(config, bridge)?;
    mark_started();
    Ok(())
}

/// Binds the page elements, wires the form and dropdown listeners and starts
/// filling the dropdown.
fn mount<B: Bridge + 'static>(
    config: &FrontendConfig,
    bridge: B,
) -> FrontendResult<Rc<Controller<Elements, B>>> {
    let document = neo_web::document()?;
    let elements = Elements::bind(&document, &config.elements)?;
    let form = elements.form.clone();
    let apis = elements.apis.clone();

    let controller = Rc::new(Controller::new(
        elements,
        Backend::new(bridge),
        config.on_api_select,
    ));

    let on_submit = controller.clone();
    neo_web::listen(&form, "submit", move |event| {
        event.prevent_default();
        let controller = on_submit.clone();
        reject_unhandled(async move { controller.greet().await });
    })?;

    let on_change = controller.clone();
    neo_web::listen(&apis, "change", move |_| {
        let controller = on_change.clone();
        let api_name = controller.view().selected_api();
        neo_web::spawn_local(async move {
            controller.select_api(&api_name).await;
        });
    })?;

    neo_logs::info!(mode = ?controller.mode(), "frontend mounted");

    let loader = controller.clone();
    reject_unhandled(async move { loader.populate_apis().await.map(|_| ()) });
    Ok(controller)
}

/// Runs `task` as a promise nobody awaits, so a failure surfaces as an
/// unhandled rejection in the webview console.
fn reject_unhandled<F>(task: F)
where
    F: Future<Output = FrontendResult<()>> + 'static,
{
    let _ = wasm_bindgen_futures::future_to_promise(async move {
        task.await
            .map(|()| JsValue::UNDEFINED)
            .map_err(|err| js_error(&err.to_string()))
    });
}

fn js_error(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}
