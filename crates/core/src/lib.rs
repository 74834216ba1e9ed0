//! The essential ideas of the YJ Publicidad site behavior layer.
//!
//! This crate holds the renderer-agnostic vocabulary shared by the runtime
//! and its hosts: the fixed set of [`Page`]s and their slide [`Direction`]
//! policy, the role-addressed [`dom`] targets with their marker classes and
//! ARIA attributes, keyboard and window events, the [`Clipboard`] capability,
//! the contact form data model, the email compose builders, and the tunable
//! [`Settings`].
//!
//! Nothing here touches a real document. Hosts translate these types to and
//! from their rendering surface; the [`runtime`] drives them.
//!
//! [`Clipboard`]: clipboard::Clipboard
//! [`runtime`]: ../yj_site_runtime/index.html
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod clipboard;
pub mod compose;
pub mod contact;
pub mod dom;
pub mod event;
pub mod keyboard;
pub mod page;
pub mod settings;
pub mod time;
pub mod window;

pub use contact::{FormData, Panel};
pub use dom::{Aria, Class, NavSet, Target};
pub use event::Event;
pub use page::{Direction, Page};
pub use settings::Settings;
pub use window::Size;
