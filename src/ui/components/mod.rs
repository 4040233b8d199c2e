//! Reusable markup components, rendered with maud.
//!
//! # Components
//!
//! - [`link_button`]: Anchor styled as a call-to-action
//! - [`card`], [`feature_card`]: Bordered containers

mod card;
mod link_button;

pub use card::{card, feature_card};
pub use link_button::{LinkSize, LinkVariant, link_button};
