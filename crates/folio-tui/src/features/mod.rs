//! Feature slices of the page.

pub mod contact;
pub mod hero;
pub mod page;
