//! Application constants

pub const APP_TITLE: &str = "HelloSolana";
pub const APP_DESCRIPTION: &str = "A Solana dApp built with Next.js";

pub const COPYRIGHT_YEAR: u16 = 2024;

/// Header navigation: (label, anchor)
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Features", "#features"),
    ("About", "#about"),
    ("Contact", "#contact"),
];

/// Stats band: (value, label)
pub const STATS: &[(&str, &str)] = &[
    ("1000+", "Active Users"),
    ("50+", "Integrated dApps"),
    ("99.9%", "Uptime"),
];

/// Footer link columns: (heading, links)
pub const FOOTER_COLUMNS: &[(&str, &[&str])] = &[
    ("Product", &["Features", "Pricing", "API"]),
    ("Resources", &["Documentation", "Tutorials", "Support"]),
    ("Company", &["About", "Blog", "Contact"]),
];

/// Id of the static loading overlay in index.html
pub const LOADING_ELEMENT_ID: &str = "leptos-loading";
