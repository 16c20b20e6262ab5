pub mod models;
pub mod naming;
