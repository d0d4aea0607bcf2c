pub mod config;
pub mod content;
pub mod i18n;
pub mod seo;
pub mod server;
