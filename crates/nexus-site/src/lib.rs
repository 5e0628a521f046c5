//! NexusData Documentation Site
//!
//! A Leptos server-rendered website: homepage with sidebar menu and feature
//! grid, plus placeholder login and signup forms.

pub mod app;
pub mod components;
pub mod fileserv;
pub mod forms;
pub mod pages;
