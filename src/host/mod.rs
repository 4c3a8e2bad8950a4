pub mod browser;
pub mod env;

pub use browser::BrowserEnv;
pub use env::HostEnv;
