//! Shared building blocks for the page slices.

pub mod field;
pub mod notice;
pub mod scrollbar;
pub mod style;
pub mod task;
pub mod text;

pub use field::TextField;
pub use notice::{Notice, NoticeKind, NoticeSlot};
pub use scrollbar::Scrollbar;
pub use style::{Style, StyledLine, StyledSpan};
pub use task::{TaskId, TaskSeq, TaskState};
