pub mod analysis;
pub mod health;
pub mod history;
pub mod provider;
pub mod server;
pub mod session;
pub mod tracker;
pub mod trends;
