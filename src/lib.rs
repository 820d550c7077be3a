pub mod app;
pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod session;
pub mod state;
pub mod ui;

pub use app::router;
pub use client::RemoteClient;
pub use config::Config;
pub use state::AppState;
