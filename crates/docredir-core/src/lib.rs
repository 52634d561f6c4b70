pub mod config;
pub mod location;
pub mod logging;
pub mod redirector;
pub mod redirects;
pub mod script;
