//! Per-tick input snapshot
//!
//! The host keeps a live map of pressed keys; once per frame it is flattened
//! into a `TickInput` so the simulation only ever sees logical actions.

use serde::{Deserialize, Serialize};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Raw bitfield of held actions
    pub bits: u8,
}

impl TickInput {
    pub const UP: u8 = 1 << 0;
    pub const DOWN: u8 = 1 << 1;
    pub const LEFT: u8 = 1 << 2;
    pub const RIGHT: u8 = 1 << 3;
    pub const FIRE: u8 = 1 << 4;

    pub const fn from_bits(bits: u8) -> Self {
        Self { bits }
    }

    /// Build a snapshot from pressed key names (browser `KeyboardEvent.key`
    /// style, case-insensitive). Unknown keys are ignored.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let bits = keys
            .into_iter()
            .fold(0, |bits, key| bits | Self::action_for_key(key.as_ref()));
        Self { bits }
    }

    /// Map one key name to its action bit (WASD and arrows are aliases)
    pub fn action_for_key(key: &str) -> u8 {
        match key.to_ascii_lowercase().as_str() {
            "w" | "arrowup" => Self::UP,
            "s" | "arrowdown" => Self::DOWN,
            "a" | "arrowleft" => Self::LEFT,
            "d" | "arrowright" => Self::RIGHT,
            " " | "space" | "spacebar" => Self::FIRE,
            _ => 0,
        }
    }

    #[inline]
    pub fn with(self, bit: u8) -> Self {
        Self {
            bits: self.bits | bit,
        }
    }

    #[inline]
    pub fn up(&self) -> bool {
        self.bits & Self::UP != 0
    }

    #[inline]
    pub fn down(&self) -> bool {
        self.bits & Self::DOWN != 0
    }

    #[inline]
    pub fn left(&self) -> bool {
        self.bits & Self::LEFT != 0
    }

    #[inline]
    pub fn right(&self) -> bool {
        self.bits & Self::RIGHT != 0
    }

    #[inline]
    pub fn fire(&self) -> bool {
        self.bits & Self::FIRE != 0
    }

    /// Horizontal axis: -1 (left), 0, or 1 (right)
    pub fn horizontal(&self) -> i8 {
        self.right() as i8 - self.left() as i8
    }

    /// Vertical axis: -1 (down), 0, or 1 (up)
    pub fn vertical(&self) -> i8 {
        self.up() as i8 - self.down() as i8
    }
}
