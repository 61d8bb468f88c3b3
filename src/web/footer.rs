use yew::prelude::*;

/// Static footer: contact and informational content only.
#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    html! {
        <footer class="footer">
            <div class="container">
                <div class="footer-content">
                    <div class="footer-section">
                        <h3>{ "HostingPro" }</h3>
                        <p>{ "Penyedia layanan hosting terpercaya di Indonesia" }</p>
                    </div>
                    <div class="footer-section">
                        <h4>{ "Layanan" }</h4>
                        <ul>
                            <li>{ "VPS Hosting" }</li>
                            <li>{ "RDP Windows" }</li>
                            <li>{ "Shared Hosting" }</li>
                            <li>{ "Cloud Hosting" }</li>
                        </ul>
                    </div>
                    <div class="footer-section">
                        <h4>{ "Perusahaan" }</h4>
                        <ul>
                            <li>{ "Tentang Kami" }</li>
                            <li>{ "Kontak" }</li>
                            <li>{ "Karir" }</li>
                            <li>{ "Blog" }</li>
                        </ul>
                    </div>
                    <div class="footer-section">
                        <h4>{ "Kontak" }</h4>
                        <ul>
                            <li>{ "📧 info@hostingpro.com" }</li>
                            <li>{ "📱 +62 812-3456-7890" }</li>
                            <li>{ "📍 Jakarta, Indonesia" }</li>
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{ "© 2024 HostingPro. All rights reserved." }</p>
                </div>
            </div>
        </footer>
    }
}
