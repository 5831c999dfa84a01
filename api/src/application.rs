pub mod http;
pub mod session_middleware;
pub mod session_sweeper;
