//! Shared UI state provided through Leptos context.

pub mod menu;
