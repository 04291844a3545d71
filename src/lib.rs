pub mod components;
pub mod config;
pub mod input;
pub mod loader;
pub mod models;
pub mod search;
pub mod stage;
pub mod view;
pub mod widget;
