use yew::prelude::*;

use crate::auth::gsi;
use crate::auth::session::{Session, SessionAction};
use crate::config::Config;

use super::{Hero, ProductCatalog, SessionGate, SiteFooter, SiteHeader};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Config,
}

/// Root component. Owns the session state cell and decides which of the two
/// top-level views is visible: the sign-in gate or the site shell.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let session = use_reducer_eq(Session::default);

    let on_sign_in = {
        let session = session.clone();
        Callback::from(move |identity| session.dispatch(SessionAction::SignIn(identity)))
    };

    let on_sign_out = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            tracing::info!("signing out");
            session.dispatch(SessionAction::SignOut);
            // Also drop the provider's cached auto sign-in choice, if the
            // integration is still active.
            gsi::disable_auto_select();
        })
    };

    match session.identity() {
        None => html! {
            <SessionGate client_id={props.config.google_client_id.clone()} {on_sign_in} />
        },
        Some(user) => html! {
            <div class="app">
                <SiteHeader user={user.clone()} {on_sign_out} />
                <Hero />
                <ProductCatalog />
                <SiteFooter />
            </div>
        },
    }
}
