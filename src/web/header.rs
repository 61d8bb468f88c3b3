use yew::prelude::*;

use crate::auth::claims::IdentityClaims;

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub user: IdentityClaims,
    pub on_sign_out: Callback<MouseEvent>,
}

/// Authenticated header: brand, nav links, identity summary, logout.
#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let user = &props.user;

    html! {
        <header class="header">
            <div class="container">
                <div class="header-content">
                    <div class="logo">
                        <h1>{ "🚀 HostingPro" }</h1>
                    </div>
                    <nav class="nav">
                        <a href="#home">{ "Beranda" }</a>
                        <a href="#products">{ "Produk" }</a>
                        <a href="#about">{ "Tentang" }</a>
                        <a href="#contact">{ "Kontak" }</a>
                    </nav>
                    <div class="user-menu">
                        <img
                            src={user.picture_url()}
                            alt={user.display_name()}
                            class="user-avatar"
                        />
                        <span class="user-name">{ user.display_name() }</span>
                        <button onclick={props.on_sign_out.clone()} class="btn-logout">
                            { "Logout" }
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}
