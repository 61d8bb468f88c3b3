use yew::prelude::*;

/// Static hero banner. The call-to-action button is inert.
#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="container">
                <div class="hero-content">
                    <h1 class="hero-title">{ "Solusi Hosting Terbaik untuk Bisnis Anda" }</h1>
                    <p class="hero-subtitle">
                        { "VPS, RDP, dan Hosting berkualitas tinggi dengan harga terjangkau" }
                    </p>
                    <button class="btn-primary">{ "Mulai Sekarang" }</button>
                </div>
            </div>
        </section>
    }
}
