//! `tt-grid`: cell occupancy actors and the torus grid.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`state`]     | `CellState`: the synchronous occupancy state machine        |
//! | [`cell`]      | `Cell`: handle to one cell's actor task                     |
//! | [`displace`]  | `DisplaceHandle` / `DisplaceInbox`: wild traveler mailbox   |
//! | [`grid`]      | `Grid`: `width × height` cells with torus neighbours        |
//! | [`error`]     | `GridError`, `GridResult<T>`                                 |
//!
//! # Occupancy model
//!
//! Each cell is owned by one tokio task that holds a [`CellState`] and
//! answers requests from its mailbox one at a time:
//!
//! ```text
//!   agent ──query──▶ ┌──────────┐
//!   agent ──occupy─▶ │ cell task│ ── reply (oneshot) ──▶ agent
//!   agent ──free───▶ └──────────┘
//! ```
//!
//! The mailbox totally orders every transition of a cell, and `occupy`
//! refuses instead of waiting when the cell is taken.  No agent ever blocks
//! inside a cell; all waiting happens in the caller's retry loop.  There are
//! no cross-cell locks.

pub mod cell;
pub mod displace;
pub mod error;
pub mod grid;
pub mod state;


pub use cell::Cell;
pub use displace::{displace_channel, DisplaceHandle, DisplaceInbox, DisplaceRequest, Displacement};
pub use error::{GridError, GridResult};
pub use grid::Grid;
pub use state::{CellSnapshot, CellState, Claim, Occupant, OccupantKind};
