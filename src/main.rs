use hostingpro::config::Config;
use hostingpro::web::{App, AppProps};

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!("Starting HostingPro site");

    let config = Config::load();
    tracing::info!(client_id = %config.google_client_id, "Configuration loaded");
    if !config.has_client_id() {
        tracing::warn!("GOOGLE_CLIENT_ID not set at build time; sign-in will fail at the provider");
    }

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
