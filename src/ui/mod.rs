//! HTML rendering layer with component-based architecture.
//!
//! This module turns page state into markup through composable section
//! components. It provides theme support and keeps the dynamic parts of the
//! page (install button, pull indicator) in addressable slots.
//!
//! # Architecture
//!
//! ```text
//! PageState → compute_viewmodel → PageViewModel → components → HTML
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable page state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Section renderers
//! - [`helpers`]: Escaping and formatting utilities
//! - [`theme`]: Color schemes and CSS custom properties

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render_body, render_document, render_install_slot, render_pull_slot};
pub use theme::Theme;
pub use viewmodel::{InstallView, PageViewModel, PullIndicator};
