pub mod config;
pub mod error;
pub mod logging;

// Pipeline stages, in execution order.
pub mod extract;
pub mod describe;
pub mod category;
pub mod classify;
pub mod storage;
pub mod pipeline;
