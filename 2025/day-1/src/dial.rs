use crate::error::Error;
use crate::instruction::{Direction, Instruction};

/// Shape of the dial: how many positions it has and where the pointer starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialConfig {
    size: u32,
    start: u32,
}

impl DialConfig {
    pub const DEFAULT_SIZE: u32 = 100;
    pub const DEFAULT_START: u32 = 50;

    pub fn new(size: u32, start: u32) -> Result<Self, Error> {
        if size == 0 || start >= size {
            return Err(Error::InvalidConfig { size, start });
        }
        Ok(Self { size, start })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    /// Turns the pointer from `position` and reports where it stops and how
    /// many times it reset through zero on the way.
    ///
    /// Right turns count one reset per multiple of `size` reached, landing
    /// included. Left turns count one reset per full `size` travelled below
    /// zero, plus one when the pointer comes to rest exactly on zero from
    /// above. A negative click count leaves the dial untouched.
    pub fn turn(&self, direction: Direction, clicks: i64, position: u32) -> Turn {
        debug_assert!(position < self.size, "position {position} is off the dial");

        if clicks < 0 {
            return Turn {
                resets: 0,
                position,
            };
        }

        // Widen so that `clicks` up to i64::MAX can't overflow the sum.
        let size = i128::from(self.size);
        let clicks = i128::from(clicks);
        let current = i128::from(position);

        match direction {
            Direction::Right => {
                let total = current + clicks;
                Turn {
                    resets: (total / size) as u64,
                    position: (total % size) as u32,
                }
            }
            Direction::Left => {
                let total = current - clicks;
                let landed_on_zero = total == 0 && clicks > 0;
                Turn {
                    resets: (total.abs() / size) as u64 + u64::from(landed_on_zero),
                    // rem_euclid keeps the position non-negative (-10 wraps to 90)
                    position: total.rem_euclid(size) as u32,
                }
            }
        }
    }
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            start: Self::DEFAULT_START,
        }
    }
}

/// Outcome of a single turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub resets: u64,
    pub position: u32,
}

pub fn turn_dial(config: &DialConfig, direction: Direction, clicks: i64, position: u32) -> Turn {
    config.turn(direction, clicks, position)
}

/// A dial that remembers where its pointer is between turns.
#[derive(Debug, Clone)]
pub struct Dial {
    config: DialConfig,
    position: u32,
}

impl Dial {
    pub fn new(config: DialConfig) -> Self {
        Self {
            config,
            position: config.start(),
        }
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn config(&self) -> &DialConfig {
        &self.config
    }

    pub fn apply(&mut self, instruction: Instruction) -> Turn {
        let turn = self
            .config
            .turn(instruction.direction, instruction.clicks, self.position);
        self.position = turn.position;
        turn
    }
}

impl Default for Dial {
    fn default() -> Self {
        Self::new(DialConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use rstest::rstest;

    fn turn(resets: u64, position: u32) -> Turn {
        Turn { resets, position }
    }

    #[rstest]
    #[case::right_within_lap(Direction::Right, 49, turn(0, 99))]
    #[case::right_lands_on_zero(Direction::Right, 50, turn(1, 0))]
    #[case::right_one_reset(Direction::Right, 52, turn(1, 2))]
    #[case::right_many_resets(Direction::Right, 585, turn(6, 35))]
    #[case::left_within_lap(Direction::Left, 10, turn(0, 40))]
    #[case::left_lands_on_zero(Direction::Left, 50, turn(1, 0))]
    #[case::left_past_zero(Direction::Left, 51, turn(0, 99))]
    #[case::left_full_lap_to_zero(Direction::Left, 150, turn(1, 0))]
    #[case::right_no_clicks(Direction::Right, 0, turn(0, 50))]
    #[case::left_no_clicks(Direction::Left, 0, turn(0, 50))]
    fn turns_from_default_start(
        #[case] direction: Direction,
        #[case] clicks: i64,
        #[case] expected: Turn,
    ) {
        let config = DialConfig::default();
        assert_eq!(
            expected,
            turn_dial(&config, direction, clicks, config.start())
        );
    }

    #[rstest]
    #[case(Direction::Right)]
    #[case(Direction::Left)]
    fn negative_clicks_are_ignored(#[case] direction: Direction) {
        let config = DialConfig::default();
        assert_eq!(turn(0, 50), turn_dial(&config, direction, -1, 50));
        assert_eq!(turn(0, 0), turn_dial(&config, direction, i64::MIN, 0));
    }

    #[test]
    fn huge_click_counts_do_not_overflow() {
        let config = DialConfig::default();
        let right = turn_dial(&config, Direction::Right, i64::MAX, 99);
        assert_eq!(turn(92_233_720_368_547_759, 6), right);

        let left = turn_dial(&config, Direction::Left, i64::MAX, 0);
        assert_eq!(turn(92_233_720_368_547_758, 93), left);
    }

    #[rstest]
    #[case::small_dial(DialConfig::new(10, 5), Direction::Right, 25, turn(3, 0))]
    #[case::small_dial_left(DialConfig::new(10, 5), Direction::Left, 7, turn(0, 8))]
    #[case::single_position(DialConfig::new(1, 0), Direction::Right, 3, turn(3, 0))]
    fn honors_custom_config(
        #[case] config: Result<DialConfig, Error>,
        #[case] direction: Direction,
        #[case] clicks: i64,
        #[case] expected: Turn,
    ) -> miette::Result<()> {
        let config = config?;
        assert_eq!(expected, config.turn(direction, clicks, config.start()));
        Ok(())
    }

    #[rstest]
    #[case(0, 0)]
    #[case(100, 100)]
    #[case(10, 42)]
    fn rejects_invalid_config(#[case] size: u32, #[case] start: u32) {
        assert!(matches!(
            DialConfig::new(size, start),
            Err(Error::InvalidConfig { .. })
        ));
    }

    #[test]
    fn dial_carries_position_between_turns() {
        let mut dial = Dial::default();
        let first = dial.apply(Instruction {
            direction: Direction::Right,
            clicks: 50,
        });
        assert_eq!(turn(1, 0), first);
        assert_eq!(0, dial.position());

        let second = dial.apply(Instruction {
            direction: Direction::Right,
            clicks: 133,
        });
        assert_eq!(turn(1, 33), second);
        assert_eq!(33, dial.position());
    }

    proptest! {
        #[test]
        fn right_turn_is_plain_modular_arithmetic(position in 0u32..100, clicks in 0i64..1_000_000) {
            let config = DialConfig::default();
            let total = i64::from(position) + clicks;
            let got = config.turn(Direction::Right, clicks, position);
            prop_assert_eq!(got.position, (total % 100) as u32);
            prop_assert_eq!(got.resets, (total / 100) as u64);
        }

        #[test]
        fn negative_clicks_never_move_the_dial(position in 0u32..100, clicks in i64::MIN..0, left in any::<bool>()) {
            let direction = if left { Direction::Left } else { Direction::Right };
            let got = DialConfig::default().turn(direction, clicks, position);
            prop_assert_eq!(got, Turn { resets: 0, position });
        }

        #[test]
        fn positions_stay_on_the_dial(position in 0u32..100, clicks in 0i64..10_000, left in any::<bool>()) {
            let direction = if left { Direction::Left } else { Direction::Right };
            let got = DialConfig::default().turn(direction, clicks, position);
            prop_assert!(got.position < 100);
        }

        #[test]
        fn turning_back_and_forth_returns_to_start(clicks in 0i64..100) {
            let config = DialConfig::default();
            let start = config.start();

            let left = config.turn(Direction::Left, clicks, start);
            let left_right = config.turn(Direction::Right, clicks, left.position);
            prop_assert_eq!(left_right.position, start);

            let right = config.turn(Direction::Right, clicks, start);
            let right_left = config.turn(Direction::Left, clicks, right.position);
            prop_assert_eq!(right_left.position, start);

            prop_assert_eq!(
                left.resets + left_right.resets,
                right.resets + right_left.resets
            );
        }

        #[test]
        fn turning_back_and_forth_returns_to_any_start(start in 0u32..100, clicks in 0i64..10_000) {
            let config = DialConfig::new(100, start).unwrap();

            let left = config.turn(Direction::Left, clicks, start);
            prop_assert_eq!(config.turn(Direction::Right, clicks, left.position).position, start);

            let right = config.turn(Direction::Right, clicks, start);
            prop_assert_eq!(config.turn(Direction::Left, clicks, right.position).position, start);
        }
    }
}
