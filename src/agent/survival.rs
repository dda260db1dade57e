//! Flood-fill fallback for when no path to the food exists
//!
//! Each legal first move is scored by the area reachable from its landing
//! cell. Chasing open space keeps the snake alive until eating becomes
//! possible again.

use std::collections::VecDeque;

use crate::game::{Direction, GameState, Position};

use super::planner::{cell_index, is_open_after};
use super::SCAN_ORDER;

/// Pick the legal move with the most room left, None when boxed in
///
/// Ties keep the earliest direction in `SCAN_ORDER`.
pub fn survival_move(state: &GameState) -> Option<Direction> {
    let head = state.snake.head();
    let mut best: Option<(Direction, usize)> = None;

    for dir in SCAN_ORDER {
        let next = head.step(dir);
        if !is_open_after(state, next, 0) {
            continue;
        }

        let area = reachable_area(state, next);
        match best {
            Some((_, best_area)) if area <= best_area => {}
            _ => best = Some((dir, area)),
        }
    }

    best.map(|(dir, _)| dir)
}

/// Count the cells reachable from `start`, including `start` itself
///
/// The body is a static wall for this estimate, except the tail cell, which
/// frees up on the very next move. How the rest of the body drains over time
/// is deliberately ignored: the count is a cheap lower-ish bound on room, not
/// a simulation.
pub fn reachable_area(state: &GameState, start: Position) -> usize {
    if !state.is_in_bounds(start) {
        return 0;
    }

    let board_size = state.board_size;
    let mut visited = vec![false; board_size * board_size];

    let len = state.snake.len();
    for (i, cell) in state.snake.cells().enumerate() {
        if i + 1 < len {
            visited[cell_index(cell, board_size)] = true;
        }
    }

    let start_index = cell_index(start, board_size);
    if visited[start_index] {
        return 0;
    }
    visited[start_index] = true;

    let mut queue = VecDeque::from([start]);
    let mut count = 0;

    while let Some(pos) = queue.pop_front() {
        count += 1;

        for dir in SCAN_ORDER {
            let next = pos.step(dir);
            if !state.is_in_bounds(next) {
                continue;
            }
            let next_index = cell_index(next, board_size);
            if visited[next_index] {
                continue;
            }
            visited[next_index] = true;
            queue.push_back(next);
        }
    }

    count
}
