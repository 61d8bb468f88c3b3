//! The fixed product catalog.
//!
//! Compile-time configuration data: the offerings never change at runtime
//! and are rendered in the order listed here.

mod models;

pub use models::{format_rupiah, ProductCard};

/// The product line-up, in display order.
pub static CATALOG: &[ProductCard] = &[
    ProductCard {
        name: "VPS Starter",
        monthly_price: 50_000,
        icon: "💻",
        features: &[
            "1 CPU Core",
            "1 GB RAM",
            "20 GB SSD",
            "1 TB Bandwidth",
            "Full Root Access",
        ],
    },
    ProductCard {
        name: "VPS Professional",
        monthly_price: 150_000,
        icon: "🖥️",
        features: &[
            "2 CPU Cores",
            "4 GB RAM",
            "80 GB SSD",
            "3 TB Bandwidth",
            "Full Root Access",
        ],
    },
    ProductCard {
        name: "RDP Windows",
        monthly_price: 200_000,
        icon: "🪟",
        features: &[
            "4 CPU Cores",
            "8 GB RAM",
            "100 GB SSD",
            "Windows Server",
            "Remote Desktop",
        ],
    },
    ProductCard {
        name: "Shared Hosting",
        monthly_price: 25_000,
        icon: "🌐",
        features: &[
            "5 GB Storage",
            "Unlimited Bandwidth",
            "5 Email Accounts",
            "cPanel",
            "SSL Gratis",
        ],
    },
    ProductCard {
        name: "Cloud Hosting",
        monthly_price: 100_000,
        icon: "☁️",
        features: &[
            "20 GB SSD",
            "Unlimited Bandwidth",
            "Auto Backup",
            "CDN Gratis",
            "99.9% Uptime",
        ],
    },
    ProductCard {
        name: "Dedicated Server",
        monthly_price: 1_500_000,
        icon: "🏢",
        features: &[
            "Intel Xeon",
            "32 GB RAM",
            "1 TB SSD",
            "10 TB Bandwidth",
            "Full Control",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_six_offerings() {
        assert_eq!(CATALOG.len(), 6);
    }

    #[test]
    fn test_catalog_order_and_prices() {
        let summary: Vec<(&str, u64)> = CATALOG
            .iter()
            .map(|card| (card.name, card.monthly_price))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("VPS Starter", 50_000),
                ("VPS Professional", 150_000),
                ("RDP Windows", 200_000),
                ("Shared Hosting", 25_000),
                ("Cloud Hosting", 100_000),
                ("Dedicated Server", 1_500_000),
            ]
        );
    }

    #[test]
    fn test_every_offering_has_five_features() {
        for card in CATALOG {
            assert_eq!(card.features.len(), 5, "{} feature count", card.name);
        }
    }

    #[test]
    fn test_catalog_prices_render_with_grouping() {
        let rendered: Vec<String> = CATALOG
            .iter()
            .map(|card| format_rupiah(card.monthly_price))
            .collect();
        assert_eq!(
            rendered,
            vec!["50.000", "150.000", "200.000", "25.000", "100.000", "1.500.000"]
        );
    }
}
