#![deny(unused_variables)]
#![deny(dead_code)]
#![deny(unused_imports)]
#![deny(clippy::no_effect_underscore_binding)]
pub mod classify;
pub mod confusion;
pub mod session;
pub mod tier;
pub mod types;

#[path = "../dataset/mod.rs"]
pub mod dataset;

#[path = "../dashboard/mod.rs"]
pub mod dashboard;
