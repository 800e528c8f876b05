//! Ports - trait boundaries between the learning core and infrastructure

pub mod observer;
pub mod repository;

pub use observer::Observer;
pub use repository::PolicyStore;
