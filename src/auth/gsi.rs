//! Google Identity Services interop.
//!
//! The provider ships as a script loaded from a fixed external origin at
//! runtime. [`ProviderScript`] owns the injected `<script>` element as a
//! scoped resource; [`install_sign_in`] wires the loaded library to a
//! credential handler and renders the sign-in button.

use js_sys::{Object, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

/// Fixed origin the provider client library is loaded from.
pub const GSI_SCRIPT_URL: &str = "https://accounts.google.com/gsi/client";

#[wasm_bindgen]
extern "C" {
    /// Argument of the provider's credential callback.
    pub type CredentialResponse;

    #[wasm_bindgen(method, getter)]
    pub fn credential(this: &CredentialResponse) -> String;

    #[wasm_bindgen(js_namespace = ["google", "accounts", "id"], js_name = initialize)]
    fn gsi_initialize(config: &JsValue);

    #[wasm_bindgen(js_namespace = ["google", "accounts", "id"], js_name = renderButton)]
    fn gsi_render_button(parent: &web_sys::Element, options: &JsValue);

    #[wasm_bindgen(js_namespace = ["google", "accounts", "id"], js_name = disableAutoSelect)]
    fn gsi_disable_auto_select();
}

/// Display options for the provider-rendered sign-in button.
#[derive(Debug, Clone, Serialize)]
pub struct ButtonOptions {
    pub theme: &'static str,
    pub size: &'static str,
    pub text: &'static str,
    pub width: u32,
}

impl Default for ButtonOptions {
    fn default() -> Self {
        Self {
            theme: "outline",
            size: "large",
            text: "signin_with",
            width: 250,
        }
    }
}

/// True once the provider script has loaded and installed its global.
pub fn provider_ready() -> bool {
    web_sys::window()
        .map(|window| Reflect::has(window.as_ref(), &JsValue::from_str("google")).unwrap_or(false))
        .unwrap_or(false)
}

/// Ask the provider to forget any cached automatic sign-in choice.
///
/// No-op when the client library never finished loading.
pub fn disable_auto_select() {
    if provider_ready() {
        gsi_disable_auto_select();
    }
}

/// Configure the loaded provider library and render the sign-in button.
///
/// Must only run after the client script has loaded; the gate calls it from
/// the script's load continuation, so the provider can never invoke the
/// credential handler before `initialize` has registered it. The handler is
/// handed over to the provider for the lifetime of the page; there is no
/// deregistration call.
pub fn install_sign_in(
    client_id: &str,
    mount_id: &str,
    mut on_credential: impl FnMut(String) + 'static,
) -> Result<(), JsValue> {
    let callback =
        Closure::<dyn FnMut(CredentialResponse)>::new(move |response: CredentialResponse| {
            on_credential(response.credential());
        });

    let config = Object::new();
    Reflect::set(
        &config,
        &JsValue::from_str("client_id"),
        &JsValue::from_str(client_id),
    )?;
    Reflect::set(&config, &JsValue::from_str("callback"), callback.as_ref())?;
    gsi_initialize(&config);
    callback.forget();

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let mount = document
        .get_element_by_id(mount_id)
        .ok_or_else(|| JsValue::from_str("sign-in mount point missing"))?;
    let options = serde_wasm_bindgen::to_value(&ButtonOptions::default())
        .map_err(JsValue::from)?;
    gsi_render_button(&mount, &options);

    Ok(())
}

/// The provider client script, injected into the page as a scoped resource.
///
/// Dropping the handle detaches the load handler and removes the element
/// again, whether or not the load ever completed. A load still in flight is
/// simply abandoned; there is no cancellation token.
pub struct ProviderScript {
    element: HtmlScriptElement,
    _onload: Closure<dyn FnMut()>,
}

impl ProviderScript {
    /// Append the client script to the document body and run `on_ready` once
    /// it has loaded.
    pub fn inject(on_ready: impl FnOnce() + 'static) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let element: HtmlScriptElement = document.create_element("script")?.dyn_into()?;
        element.set_src(GSI_SCRIPT_URL);
        element.set_async(true);
        element.set_defer(true);

        let mut on_ready = Some(on_ready);
        let onload = Closure::<dyn FnMut()>::new(move || {
            if let Some(ready) = on_ready.take() {
                ready();
            }
        });
        element.set_onload(Some(onload.as_ref().unchecked_ref()));

        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("no document body"))?;
        body.append_child(&element)?;

        tracing::debug!(src = GSI_SCRIPT_URL, "provider script injected");

        Ok(Self {
            element,
            _onload: onload,
        })
    }
}

impl Drop for ProviderScript {
    fn drop(&mut self) {
        self.element.set_onload(None);
        self.element.remove();
        tracing::debug!("provider script removed");
    }
}
