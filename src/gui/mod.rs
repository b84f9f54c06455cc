//! gui/mod.rs
//!
//! This folder contains ONLY frontend concerns:
//! - app state ('ArtiFactual') and messages ('Message')
//! - update logic ('update()')
//! - view layout ('view()')
//! - subscriptions (file drops, resize, animation ticks)
//! - theme, assets, status symbol animation

pub(crate) mod assets;
pub(crate) mod state;
pub(crate) mod status;
pub(crate) mod subscription;
pub(crate) mod theme;
pub(crate) mod update;
pub(crate) mod view;

// Re-export the entry points main.rs needs.
pub(crate) use state::ArtiFactual;
pub(crate) use subscription::subscription;
pub(crate) use theme::theme;
pub(crate) use update::update;
pub(crate) use view::view;
