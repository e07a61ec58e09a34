//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the static content panels, reading the
//! shared menu signal from Leptos context where navigation is involved.

pub mod contact;
pub mod footer;
pub mod header;
pub mod hero;
pub mod icons;
pub mod services;
