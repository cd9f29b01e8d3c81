//! Infrastructure Layer - 端口的具体实现

pub mod adapters;
