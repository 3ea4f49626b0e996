mod config;
mod home;
mod not_found;

pub use config::ConfigPage;
pub use home::Home;
pub use not_found::NotFound;
