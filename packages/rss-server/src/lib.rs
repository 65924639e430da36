pub mod config;
pub mod handlers;
pub mod state;

pub use config::ServerConfig;
pub use state::ServerState;
