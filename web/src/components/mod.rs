//! UI Components

pub mod cta;
pub mod features;
pub mod footer;
pub mod hero;
pub mod icons;
pub mod navbar;
pub mod stats;
pub mod wallet_button;
pub mod wallet_connection;

pub use cta::CallToAction;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use stats::Stats;
pub use wallet_button::WalletMultiButton;
pub use wallet_connection::WalletConnection;
