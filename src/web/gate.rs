use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::auth::claims::{decode_credential, IdentityClaims};
use crate::auth::gsi::{self, ProviderScript};

/// Element the provider renders its sign-in button into.
const SIGN_IN_MOUNT_ID: &str = "googleSignInButton";

/// Pause between a successful decode and the view switch. Purely cosmetic:
/// long enough for the loading indicator to be seen, not a timeout.
const SIGN_IN_TRANSITION_MS: u32 = 500;

const SIGN_IN_FAILED_NOTICE: &str = "Login gagal. Silakan coba lagi.";

#[derive(Properties, PartialEq)]
pub struct SessionGateProps {
    /// Application identifier handed to the identity provider.
    pub client_id: AttrValue,
    /// Raised once a credential has been decoded into an identity.
    pub on_sign_in: Callback<IdentityClaims>,
}

/// The signed-out view: a login box with the provider's sign-in button.
///
/// On first display the provider script is injected as a scoped resource;
/// the effect destructor removes it again on teardown regardless of whether
/// the load ever completed.
#[function_component(SessionGate)]
pub fn session_gate(props: &SessionGateProps) -> Html {
    let loading = use_state(|| false);

    {
        let loading = loading.clone();
        let on_sign_in = props.on_sign_in.clone();
        let client_id = props.client_id.clone();
        use_effect_with((), move |_| {
            let script = ProviderScript::inject(move || {
                if !gsi::provider_ready() {
                    tracing::warn!("provider script loaded but its global is missing");
                    return;
                }

                let result =
                    gsi::install_sign_in(&client_id, SIGN_IN_MOUNT_ID, move |credential| {
                        handle_credential(&credential, &loading, &on_sign_in);
                    });
                match result {
                    Ok(()) => tracing::info!("provider initialized, sign-in button rendered"),
                    Err(error) => {
                        tracing::error!(?error, "failed to initialize provider sign-in")
                    }
                }
            });

            let script = match script {
                Ok(handle) => Some(handle),
                Err(error) => {
                    tracing::error!(?error, "failed to inject provider script");
                    None
                }
            };
            move || drop(script)
        });
    }

    html! {
        <div class="login-container">
            <div class="login-box">
                <div class="logo">
                    <h1>{ "🚀 HostingPro" }</h1>
                </div>
                <h2>{ "Selamat Datang" }</h2>
                <p class="login-subtitle">{ "Silakan login untuk melanjutkan" }</p>

                <div class="google-login-wrapper">
                    if *loading {
                        <div class="loading">{ "Loading..." }</div>
                    } else {
                        <div id={SIGN_IN_MOUNT_ID}></div>
                    }
                </div>
            </div>
        </div>
    }
}

/// Decode the provider credential and either schedule the switch to the
/// authenticated view or surface a single failure notice.
fn handle_credential(
    credential: &str,
    loading: &UseStateHandle<bool>,
    on_sign_in: &Callback<IdentityClaims>,
) {
    loading.set(true);
    tracing::debug!(credential_len = credential.len(), "credential received");

    match decode_credential(credential) {
        Ok(identity) => {
            tracing::info!(
                name = ?identity.name,
                email = ?identity.email,
                "credential decoded"
            );
            let loading = loading.clone();
            let on_sign_in = on_sign_in.clone();
            Timeout::new(SIGN_IN_TRANSITION_MS, move || {
                loading.set(false);
                on_sign_in.emit(identity);
            })
            .forget();
        }
        Err(error) => {
            let credential_hash = format!("{:x}", md5::compute(credential));
            tracing::error!(
                error = %error,
                credential_hash = %credential_hash,
                credential_len = credential.len(),
                "credential decode failed"
            );
            loading.set(false);
            show_failure_notice();
        }
    }
}

/// Blocking, dismiss-only notice; the failure is handled entirely here.
fn show_failure_notice() {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(SIGN_IN_FAILED_NOTICE);
    }
}
