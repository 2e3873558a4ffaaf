//! Uniform-random move selection.
//!
//! This is the whole of the opponent: no evaluation, no search, just a
//! uniform pick over everything the side to move may do. Useful as the
//! automated side of a casual game and as a stress test for the move
//! generator.

use rand::seq::SliceRandom;
use rand::Rng;
use reactive_core::Square;
use reactive_engine::Game;

/// Picks a move for the side to move, uniformly at random.
///
/// Every legal `(from, to)` pair of the side to move goes into one
/// flattened list and the pick is uniform over that list, so a piece with
/// more legal moves is proportionally more likely to be chosen. Returns
/// `None` when the side to move has no legal move at all (checkmate, the
/// stalemate-like dead end, or an already finished game); the caller
/// treats that as a no-op.
pub fn select_random_move<R: Rng + ?Sized>(game: &Game, rng: &mut R) -> Option<(Square, Square)> {
    let mut candidates = Vec::new();
    for (from, _) in game.board().pieces_of(game.turn()) {
        for to in game.legal_moves(from) {
            candidates.push((from, to));
        }
    }
    candidates.choose(rng).copied()
}
