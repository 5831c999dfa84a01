pub mod analysis;
pub mod common;
pub mod history;
pub mod provider;
pub mod session;
pub mod trends;
