// src/ui/mod.rs
pub mod home;
pub mod history;

pub use home::HomeAction;
