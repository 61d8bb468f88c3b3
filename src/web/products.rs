use yew::prelude::*;

use crate::catalog::{format_rupiah, ProductCard, CATALOG};

/// The catalog section: one card per configured offering, in order.
#[function_component(ProductCatalog)]
pub fn product_catalog() -> Html {
    html! {
        <section id="products" class="products">
            <div class="container">
                <h2 class="section-title">{ "Paket Layanan Kami" }</h2>
                <p class="section-subtitle">{ "Pilih paket yang sesuai dengan kebutuhan Anda" }</p>
                <div class="products-grid">
                    { for CATALOG.iter().map(product_card) }
                </div>
            </div>
        </section>
    }
}

/// One catalog entry as a card. The purchase button is inert.
fn product_card(card: &ProductCard) -> Html {
    html! {
        <div class="product-card">
            <div class="product-icon">{ card.icon }</div>
            <h3 class="product-title">{ card.name }</h3>
            <div class="product-price">
                <span class="price">{ format!("Rp {}", format_rupiah(card.monthly_price)) }</span>
                <span class="period">{ "/bulan" }</span>
            </div>
            <ul class="product-features">
                { for card.features.iter().map(|feature| html! {
                    <li>{ format!("✓ {feature}") }</li>
                }) }
            </ul>
            <button class="btn-buy">{ "Beli Sekarang" }</button>
        </div>
    }
}
