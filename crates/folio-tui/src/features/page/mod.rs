//! Page slice: section builders, layout, scrolling, reveal and the header.

pub mod header;
pub mod layout;
pub mod reveal;
pub mod scroll;
pub mod sections;

pub use header::{NavItem, nav_hit, nav_items, section_for_key};
pub use layout::{PageLayout, PageView, ScreenAreas, back_to_top_area, build, screen_areas};
pub use reveal::RevealState;
pub use scroll::ScrollState;
