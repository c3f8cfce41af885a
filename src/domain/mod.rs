//! Domain layer for the landing page.
//!
//! This module contains the types that describe what the page shows and who is
//! looking at it, independent of the browser APIs used to display it.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`content`]: Static page copy (hero, panels, team roster, footer)
//! - [`platform`]: Client description and user-agent classification for the
//!   install fallback
//!
//! # Examples
//!
//! ```
//! use leavedesk_landing::domain::{Result, SiteContent};
//!
//! fn load() -> Result<SiteContent> {
//!     let content = SiteContent::default();
//!     content.validate()?;
//!     Ok(content)
//! }
//!
//! assert!(load().is_ok());
//! ```

pub mod content;
pub mod error;
pub mod platform;

pub use content::{Footer, FooterLink, Hero, Panel, Product, SiteContent, TeamMember, TeamSection};
pub use error::{LandingError, Result};
pub use platform::{ClientInfo, FallbackKind, UserAgentRules};
