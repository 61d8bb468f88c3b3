//! Yew components for the two top-level views.
//!
//! [`SessionGate`] is shown while signed out; [`SiteHeader`], [`Hero`],
//! [`ProductCatalog`] and [`SiteFooter`] compose the authenticated site
//! shell. [`App`] owns the session state and switches between the two.

mod app;
mod footer;
mod gate;
mod header;
mod hero;
mod products;

pub use app::{App, AppProps};
pub use footer::SiteFooter;
pub use gate::SessionGate;
pub use header::SiteHeader;
pub use hero::Hero;
pub use products::ProductCatalog;
