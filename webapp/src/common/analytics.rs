use dioxus::prelude::*;
use js_sys::{Array, Function, JSON, Reflect};
use tracing::{debug, error};
use wasm_bindgen::{JsCast, JsValue};

use common::analytics::{AnalyticsEvent, AnalyticsSink, AnalyticsTracker};

use crate::common::{
    SITE_CONFIG,
    dom::{document, js_error, window},
    storage::BrowserStorage,
};

const GTAG_SRC: &str = "https://www.googletagmanager.com/gtag/js";

pub type Analytics = AnalyticsTracker<BrowserStorage, GtagSink>;

// there is one tracker per page; components report through this signal
pub static ANALYTICS: GlobalSignal<Analytics> = Signal::global(|| {
    AnalyticsTracker::new(
        SITE_CONFIG.analytics.clone(),
        BrowserStorage,
        Some(GtagSink),
    )
});

// hands events to window.gtag
#[derive(Clone, Copy, Debug, Default)]
pub struct GtagSink;

fn gtag() -> anyhow::Result<Function> {
    let window = window()?;
    let gtag = Reflect::get(&window, &JsValue::from_str("gtag")).map_err(js_error)?;

    gtag.dyn_into::<Function>()
        .map_err(|_| anyhow::Error::msg("gtag is not loaded"))
}

fn js_params(params: &serde_json::Value) -> anyhow::Result<JsValue> {
    JSON::parse(&serde_json::to_string(params)?).map_err(js_error)
}

impl AnalyticsSink for GtagSink {
    fn send(&mut self, _tracking_id: &str, event: &AnalyticsEvent) -> anyhow::Result<()> {
        let params = js_params(&serde_json::Value::Object(event.params.clone()))?;

        gtag()?
            .call3(
                &JsValue::NULL,
                &JsValue::from_str("event"),
                &JsValue::from_str(event.name),
                &params,
            )
            .map_err(js_error)?;
        Ok(())
    }

    fn consent_denied(&mut self) -> anyhow::Result<()> {
        let params = js_params(&serde_json::json!({ "analytics_storage": "denied" }))?;

        gtag()?
            .call3(
                &JsValue::NULL,
                &JsValue::from_str("consent"),
                &JsValue::from_str("update"),
                &params,
            )
            .map_err(js_error)?;
        Ok(())
    }
}

// load gtag.js and define window.gtag, unless something already did
pub fn install_gtag(tracking_id: &str) -> anyhow::Result<()> {
    let window = window()?;

    if gtag().is_ok() {
        debug!("gtag already loaded");
        return Ok(());
    }

    let document = document()?;
    let script = document.create_element("script").map_err(js_error)?;
    script.set_attribute("async", "").map_err(js_error)?;
    script
        .set_attribute("src", &format!("{GTAG_SRC}?id={tracking_id}"))
        .map_err(js_error)?;

    document
        .head()
        .ok_or_else(|| anyhow::Error::msg("document has no head"))?
        .append_child(&script)
        .map_err(js_error)?;

    let data_layer = Reflect::get(&window, &JsValue::from_str("dataLayer")).map_err(js_error)?;
    if data_layer.is_undefined() {
        Reflect::set(&window, &JsValue::from_str("dataLayer"), &Array::new()).map_err(js_error)?;
    }

    // gtag pushes its arguments object, not an array, so this has to be a plain js function
    let gtag = Function::new_no_args("window.dataLayer.push(arguments);");
    Reflect::set(&window, &JsValue::from_str("gtag"), &gtag).map_err(js_error)?;

    gtag.call2(&JsValue::NULL, &JsValue::from_str("js"), &js_sys::Date::new_0())
        .map_err(js_error)?;

    let config = js_params(&serde_json::json!({
        "anonymize_ip": true,
        "cookie_flags": "SameSite=None;Secure",
    }))?;
    gtag.call3(
        &JsValue::NULL,
        &JsValue::from_str("config"),
        &JsValue::from_str(tracking_id),
        &config,
    )
    .map_err(js_error)?;

    debug!("google analytics initialized");
    Ok(())
}

// called once from App
pub fn init_analytics() {
    let tracking_id = ANALYTICS.with(|a| {
        a.can_track()
            .then(|| a.config().tracking_id.clone())
            .flatten()
    });

    if let Some(tracking_id) = tracking_id {
        if let Err(err) = install_gtag(&tracking_id) {
            error!("failed to load analytics: {err}");
        }
    }
}

// a visitor opting back in mid-visit gets gtag loaded right away
pub fn set_opt_out(opt_out: bool) {
    if ANALYTICS.with_mut(|a| a.set_opt_out(opt_out)) {
        init_analytics();
    }
}

pub fn track(f: impl FnOnce(&mut Analytics) -> bool) {
    ANALYTICS.with_mut(|a| {
        f(a);
    });
}
