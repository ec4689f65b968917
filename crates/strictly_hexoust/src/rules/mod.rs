//! Game rules for HexOust.
//!
//! Pure functions over a [`GridIndex`](crate::GridIndex) and a board view.
//! Rules never notify anyone and never touch the turn state; the
//! [`Engine`](crate::Engine) composes them into moves.

pub mod capture;
pub mod group;
pub mod placement;
pub mod win;

pub use capture::{CaptureOutcome, CapturePlan, Tentative, attempt_capture, plan_capture};
pub use group::{Group, collect_group};
pub use placement::{can_place_quietly, touches_own_stone};
pub use win::{check_winner, is_wiped_out};
