//! Core, DOM-free primitives and helpers for the Web UI.
pub mod color;
pub mod demo;
pub mod icon;
pub mod label;
pub mod preferences;
pub mod store;
pub mod theme;
