pub mod gateway;
pub mod merge;
pub mod ports;
pub mod session;
