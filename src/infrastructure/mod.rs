//! Infrastructure layer: everything that touches the outside world.
//!
//! In the browser (wasm32) this is the shim that owns DOM listeners, timers
//! and the deferred install prompt, translating between browser events and the
//! application layer's [`Event`](crate::Event)/[`Action`](crate::Action) model.
//! Natively it is the static site writer used by the binary.
//!
//! # Modules
//!
//! - [`site`]: Writes `index.html` and the web app manifest to a directory
//! - `browser`: Window/document access and client probing (wasm32)
//! - `listener`: RAII DOM event subscription (wasm32)
//! - `timer`: RAII `setTimeout` guard (wasm32)
//! - `prompt`: `beforeinstallprompt` bridge (wasm32)
//! - `mount`: Mounted page and exported entry points (wasm32)

pub mod site;

#[cfg(target_arch = "wasm32")]
pub mod browser;
#[cfg(target_arch = "wasm32")]
pub mod listener;
#[cfg(target_arch = "wasm32")]
pub mod mount;
#[cfg(target_arch = "wasm32")]
pub mod prompt;
#[cfg(target_arch = "wasm32")]
pub mod timer;

pub use site::write_site;

#[cfg(target_arch = "wasm32")]
pub use mount::{mount_landing, unmount_landing, MountedPage};
