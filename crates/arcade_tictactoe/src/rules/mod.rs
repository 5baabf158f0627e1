//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). They are shared by live
//! play and by search, so none of them keep state or log per call.

pub mod terminal;
pub mod win;

pub use terminal::{evaluate, Evaluation, Status};
pub use win::{find_winning_line, LINES};
