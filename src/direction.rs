/// Canonical movement directions on the grid.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four headings, in a fixed order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the `(dx, dy)` unit vector; y grows downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Outcome of asking the arbiter for a new heading.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Proposal {
    Accept {
        direction: Direction,
        /// Set only when the proposal is the one that starts the game.
        starts_game: bool,
    },
    Reject,
}

impl Proposal {
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accept { .. })
    }
}

/// Decides whether a requested heading may replace the current one.
///
/// Before the game starts any heading is taken and starts the game. Once
/// started, only perpendicular turns are legal: reversals and same-axis
/// repeats are both rejected. The arbiter never touches game state itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectionArbiter;

impl DirectionArbiter {
    #[must_use]
    pub fn propose(current: Option<Direction>, requested: Direction, started: bool) -> Proposal {
        if !started {
            return Proposal::Accept {
                direction: requested,
                starts_game: true,
            };
        }

        let Some(current) = current else {
            return Proposal::Reject;
        };

        let (req_x, req_y) = requested.delta();
        let (cur_x, cur_y) = current.delta();
        let perpendicular = (req_x != 0 && cur_x == 0) || (req_y != 0 && cur_y == 0);

        if perpendicular {
            Proposal::Accept {
                direction: requested,
                starts_game: false,
            }
        } else {
            Proposal::Reject
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, DirectionArbiter, Proposal};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn any_direction_starts_a_waiting_game() {
        for direction in Direction::ALL {
            assert_eq!(
                DirectionArbiter::propose(None, direction, false),
                Proposal::Accept {
                    direction,
                    starts_game: true,
                }
            );
        }
    }

    #[test]
    fn reversal_is_rejected_once_started() {
        for direction in Direction::ALL {
            assert_eq!(
                DirectionArbiter::propose(Some(direction), direction.opposite(), true),
                Proposal::Reject
            );
        }
    }

    #[test]
    fn same_axis_repeat_is_rejected() {
        assert_eq!(
            DirectionArbiter::propose(Some(Direction::Left), Direction::Left, true),
            Proposal::Reject
        );
        assert_eq!(
            DirectionArbiter::propose(Some(Direction::Down), Direction::Down, true),
            Proposal::Reject
        );
    }

    #[test]
    fn perpendicular_turns_are_accepted() {
        assert_eq!(
            DirectionArbiter::propose(Some(Direction::Up), Direction::Left, true),
            Proposal::Accept {
                direction: Direction::Left,
                starts_game: false,
            }
        );
        assert!(
            DirectionArbiter::propose(Some(Direction::Right), Direction::Down, true).is_accepted()
        );
    }

    #[test]
    fn started_game_without_heading_rejects() {
        assert_eq!(
            DirectionArbiter::propose(None, Direction::Up, true),
            Proposal::Reject
        );
    }
}
