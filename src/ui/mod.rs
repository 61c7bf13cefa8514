pub mod alert;
pub mod app;
pub mod demo;
pub mod dialog;
pub mod events;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
