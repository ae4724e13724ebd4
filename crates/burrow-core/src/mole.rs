//! The cave mole: a small animation state machine.
//!
//! The mole is purely cosmetic and never reads plan state. It wanders
//! between the cave walls, occasionally stopping or turning around, and
//! walks over to the punching bag when asked.
//!
//! Positions are percentages of the cave width. Every call to
//! [`Mole::tick`] advances the animation by one frame; randomness comes from
//! the caller's [`rand::Rng`] so frames can be replayed.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Left wall the mole bounces off.
pub const MIN_X: i32 = 20;
/// Right wall the mole bounces off.
pub const MAX_X: i32 = 80;
/// Starting position.
pub const START_X: i32 = 50;
/// Position of the punching bag.
pub const BAG_X: i32 = 75;
/// Distance from the bag at which the mole stops and punches.
pub const PUNCH_RANGE: i32 = 3;
/// Per-frame chance of starting or stopping a wander.
pub const TOGGLE_CHANCE: f64 = 0.3;
/// Per-frame chance of turning around while wandering.
pub const TURN_CHANCE: f64 = 0.05;

const WANDER_STEP: i32 = 1;
const BAG_STEP: i32 = 2;
const SCENE_WIDTH: i32 = 50;

/// Heading of the mole.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    fn sign(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }

    fn flipped(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// What the mole is doing this frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MoleState {
    /// Standing still
    Idle,
    /// Wandering between the walls
    Walking,
    /// Heading for the punching bag, ignoring the wander rules
    WalkingToBag,
    /// Hitting the bag for one frame
    Punching,
}

/// Position, heading and activity of the mole.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Mole {
    x: i32,
    direction: Direction,
    state: MoleState,
}

impl Default for Mole {
    fn default() -> Self {
        Self::new()
    }
}

impl Mole {
    /// An idle mole in the middle of the cave, facing right.
    pub fn new() -> Self {
        Self {
            x: START_X,
            direction: Direction::Right,
            state: MoleState::Idle,
        }
    }

    /// Horizontal position within the cave.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Direction the mole is facing.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Current animation state.
    pub fn state(&self) -> MoleState {
        self.state
    }

    /// Send the mole to the punching bag.
    ///
    /// Returns `false` and changes nothing if the mole is already on its way
    /// or punching.
    pub fn punch_bag(&mut self) -> bool {
        if matches!(self.state, MoleState::WalkingToBag | MoleState::Punching) {
            return false;
        }
        self.direction = if BAG_X > self.x {
            Direction::Right
        } else {
            Direction::Left
        };
        self.state = MoleState::WalkingToBag;
        true
    }

    /// Advance the animation by one frame.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        match self.state {
            MoleState::WalkingToBag => {
                if (BAG_X - self.x).abs() < PUNCH_RANGE {
                    self.state = MoleState::Punching;
                } else {
                    self.x += self.direction.sign() * BAG_STEP;
                }
            }
            MoleState::Punching => self.state = MoleState::Idle,
            MoleState::Idle | MoleState::Walking => {
                // Movement this frame follows the state before the toggle.
                let moving = self.state == MoleState::Walking;
                if rng.random_bool(TOGGLE_CHANCE) {
                    self.state = if moving {
                        MoleState::Idle
                    } else {
                        MoleState::Walking
                    };
                }
                if moving {
                    self.wander(rng);
                }
            }
        }
    }

    fn wander<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let next = self.x + self.direction.sign() * WANDER_STEP;
        if next >= MAX_X {
            self.x = MAX_X;
            self.direction = Direction::Left;
        } else if next <= MIN_X {
            self.x = MIN_X;
            self.direction = Direction::Right;
        } else {
            self.x = next;
        }

        if rng.random_bool(TURN_CHANCE) {
            self.direction = self.direction.flipped();
        }
    }
}

impl fmt::Display for Mole {
    /// One line of the cave: walls, the bag and the mole.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let column = |x: i32| (x * SCENE_WIDTH / 100) as usize;
        let mut scene: Vec<char> = (0..=SCENE_WIDTH).map(|_| '.').collect();
        scene[column(MIN_X) - 1] = '|';
        scene[column(MAX_X) + 1] = '|';
        scene[column(BAG_X)] = if self.state == MoleState::Punching {
            '*'
        } else {
            'B'
        };

        let mole = match (self.state, self.direction) {
            (MoleState::Punching, _) => 'M',
            (_, Direction::Left) => '<',
            (_, Direction::Right) => '>',
        };
        let at = column(self.x);
        if self.state != MoleState::Punching || at != column(BAG_X) {
            scene[at] = mole;
        }

        write!(f, "{}", scene.into_iter().collect::<String>())
    }
}
