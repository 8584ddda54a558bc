//! Core domain logic of the course portal: session lifecycle, the backend
//! contract and the display rules shared by the pages

pub mod api;
pub mod config;
pub mod dashboard;
pub mod display;
pub mod filter;
pub mod menu;
pub mod session;
pub mod validation;

#[cfg(test)]
mod tests;
