//! Core types for the reactive-chess rules engine.
//!
//! This crate provides the fundamental value types shared by the engine
//! and the bots:
//! - [`Color`] for the two sides
//! - [`PieceKind`] and [`Piece`] for piece identity
//! - [`Square`] for board coordinates, with algebraic notation parsing
//!
//! Everything here is a small `Copy` value; game logic lives in the
//! `reactive-engine` crate.

mod color;
mod piece;
mod square;

pub use color::Color;
pub use piece::{Piece, PieceKind};
pub use square::{ParseSquareError, Square};
