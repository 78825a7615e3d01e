pub mod app;
pub mod components;
pub mod config;
pub mod movies;
pub mod pages;
pub mod styles;
