//! Breadth-first path planning over the grid
//!
//! The search is time-aware: a body cell counts as open at the depth where
//! its segment will have vacated, so plans may chase the tail through space
//! that is blocked right now. Obstacles only ever open up as depth grows,
//! which keeps plain breadth-first order optimal.

use std::collections::VecDeque;

use crate::game::{Direction, GameState, Position};

use super::SCAN_ORDER;

/// Flat index of a position for per-cell bookkeeping
pub(crate) fn cell_index(pos: Position, board_size: usize) -> usize {
    pos.y as usize * board_size + pos.x as usize
}

/// Whether `cell` can be entered by the next move once `elapsed` moves have
/// already been made
///
/// The segment `i` places from the tail pops on move `i + 1`, so its cell is
/// open once more than `i` moves have gone by. With nothing elapsed the whole
/// body blocks, the tail included: the landing check runs before the tail
/// vacates, exactly like the collision rule.
pub(crate) fn is_open_after(state: &GameState, cell: Position, elapsed: usize) -> bool {
    if !state.is_in_bounds(cell) {
        return false;
    }

    match state.snake.index_from_tail(cell) {
        Some(i) => i < elapsed,
        None => true,
    }
}

/// Shortest move sequence from the head to the food, empty when the food is
/// unreachable
///
/// Neighbors expand in `SCAN_ORDER`. The first move never reverses into the
/// neck, and the food only ever appears as the final cell of the plan, so
/// replaying a plan cannot grow the snake mid-way and stall the vacating
/// schedule the search relied on.
pub fn find_path(state: &GameState) -> Vec<Direction> {
    let board_size = state.board_size;
    let start = state.snake.head();

    let mut visited = vec![false; board_size * board_size];
    let mut parents: Vec<Option<(usize, Direction)>> = vec![None; board_size * board_size];
    let mut queue = VecDeque::new();

    visited[cell_index(start, board_size)] = true;
    queue.push_back((start, 0usize));

    while let Some((pos, depth)) = queue.pop_front() {
        for dir in SCAN_ORDER {
            let next = pos.step(dir);
            if !is_open_after(state, next, depth) {
                continue;
            }

            let next_index = cell_index(next, board_size);
            if visited[next_index] {
                continue;
            }
            visited[next_index] = true;
            parents[next_index] = Some((cell_index(pos, board_size), dir));

            if next == state.food {
                return walk_back(&parents, cell_index(start, board_size), next_index);
            }

            queue.push_back((next, depth + 1));
        }
    }

    Vec::new()
}

/// Rebuild the move sequence by walking parent links from the food back to
/// the head
fn walk_back(
    parents: &[Option<(usize, Direction)>],
    start: usize,
    goal: usize,
) -> Vec<Direction> {
    let mut path = Vec::new();
    let mut at = goal;

    while at != start {
        let Some((prev, dir)) = parents[at] else { break };
        path.push(dir);
        at = prev;
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{ControlMode, Snake};

    fn state_with(snake: Snake, food: Position, board_size: usize) -> GameState {
        GameState::new(snake, food, board_size, ControlMode::Auto)
    }

    #[test]
    fn test_straight_line_path() {
        let snake = Snake::new(Position::new(2, 2), Direction::Right, 1);
        let state = state_with(snake, Position::new(5, 2), 8);

        let path = find_path(&state);

        assert_eq!(path, vec![Direction::Right; 3]);
    }

    #[test]
    fn test_adjacent_food_is_one_step() {
        let snake = Snake::new(Position::new(2, 2), Direction::Right, 1);
        let state = state_with(snake, Position::new(2, 1), 8);

        let path = find_path(&state);

        assert_eq!(path, vec![Direction::Up]);
    }

    #[test]
    fn test_body_forces_detour() {
        // Food sits directly behind a length-2 snake. The direct cell is the
        // neck, so the plan has to loop around.
        let snake = Snake::from_cells(
            [Position::new(2, 2), Position::new(3, 2)],
            Direction::Left,
        );
        let state = state_with(snake, Position::new(4, 2), 6);

        let path = find_path(&state);

        assert_eq!(path.len(), 4);
        assert_ne!(path[0], Direction::Right);
    }

    #[test]
    fn test_first_move_never_reverses() {
        // Food behind a length-3 snake: the shortest legal route goes around
        // and is two moves longer than the straight-line distance.
        let snake = Snake::from_cells(
            [
                Position::new(3, 3),
                Position::new(4, 3),
                Position::new(5, 3),
            ],
            Direction::Left,
        );
        let state = state_with(snake, Position::new(6, 3), 8);

        let path = find_path(&state);

        assert_eq!(path.len(), 5);
        assert_ne!(path[0], Direction::Right);
    }

    #[test]
    fn test_path_through_vacating_wall() {
        // The body forms a full-height wall splitting the board, with the
        // tail at the top. Crossing is only possible where segments have
        // vacated by the time the head arrives, which costs a detour: the
        // straight-line distance is 4 but the best crossing needs 12 moves.
        let snake = Snake::from_cells(
            [
                Position::new(4, 0),
                Position::new(3, 0),
                Position::new(3, 1),
                Position::new(3, 2),
                Position::new(3, 3),
                Position::new(3, 4),
                Position::new(3, 5),
                Position::new(3, 6),
            ],
            Direction::Right,
        );
        let state = state_with(snake, Position::new(0, 0), 7);

        let path = find_path(&state);

        assert_eq!(path.len(), 12);
    }

    #[test]
    fn test_boxed_in_head_finds_nothing() {
        // Head sealed into a corner by its own body. No waiting moves exist,
        // so the search exhausts immediately.
        let snake = Snake::from_cells(
            [
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(1, 1),
                Position::new(0, 1),
            ],
            Direction::Left,
        );
        let state = state_with(snake, Position::new(2, 2), 3);

        assert!(find_path(&state).is_empty());
    }

    #[test]
    fn test_passability_depth_rule() {
        // Length 3: head (3,3), middle (4,3), tail (5,3)
        let snake = Snake::from_cells(
            [
                Position::new(3, 3),
                Position::new(4, 3),
                Position::new(5, 3),
            ],
            Direction::Left,
        );
        let state = state_with(snake, Position::new(0, 0), 8);

        // Tail vacates after one move, middle after two, head after three
        assert!(!is_open_after(&state, Position::new(5, 3), 0));
        assert!(is_open_after(&state, Position::new(5, 3), 1));
        assert!(!is_open_after(&state, Position::new(4, 3), 1));
        assert!(is_open_after(&state, Position::new(4, 3), 2));
        assert!(!is_open_after(&state, Position::new(3, 3), 2));
        assert!(is_open_after(&state, Position::new(3, 3), 3));

        // Free cells are open immediately, walls never open
        assert!(is_open_after(&state, Position::new(0, 0), 0));
        assert!(!is_open_after(&state, Position::new(-1, 3), 100));
        assert!(!is_open_after(&state, Position::new(8, 3), 100));
    }
}
