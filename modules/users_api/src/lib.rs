pub mod api;
pub mod contract;
pub mod domain;
pub mod infra;

pub use domain::service::Service;
