//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Snapshot`](crate::Snapshot). Nothing here
//! knows about history or whose turn it is beyond what callers pass in.

pub mod draw;
pub mod status;
pub mod win;

pub use draw::is_full;
pub use status::{Status, status};
pub use win::{WinLine, WinnerResult, evaluate};
