//! View component framework
//!
//! - [`view`]: the [`View`] trait, its element cache and callback registry
//! - [`render`]: mounting views into containers and taking them out again

pub mod render;
pub mod view;

pub use render::{remove, render, replace, RenderPosition};
pub use view::{Callback, CallbackRegistry, View, ViewBase};
