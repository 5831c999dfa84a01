pub mod geo;
pub mod llm;
pub mod session;
