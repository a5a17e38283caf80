//! Lamps and fixed-length lamp rows

use std::fmt;

use serde::{Deserialize, Serialize};

/// State of a single lamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lamp {
    Off,
    Yellow,
    Red,
}

impl Lamp {
    pub fn symbol(self) -> char {
        match self {
            Lamp::Off => 'O',
            Lamp::Yellow => 'Y',
            Lamp::Red => 'R',
        }
    }

    pub fn is_on(self) -> bool {
        self != Lamp::Off
    }
}

impl fmt::Display for Lamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One row of lamps, read left to right
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LampRow {
    lamps: Vec<Lamp>,
}

impl LampRow {
    /// A row of `len` lamps, all off
    pub fn dark(len: usize) -> Self {
        Self {
            lamps: vec![Lamp::Off; len],
        }
    }

    /// A row of `len` lamps with the first `count` lit in `colour`.
    /// Counts larger than the row light the whole row.
    pub fn switch_on(count: usize, colour: Lamp, len: usize) -> Self {
        let mut row = Self::dark(len);
        for lamp in row.lamps.iter_mut().take(count) {
            *lamp = colour;
        }
        row
    }

    /// Overwrite the lamp at `index`; out-of-bounds indices are ignored
    pub fn set(&mut self, index: usize, lamp: Lamp) {
        if let Some(slot) = self.lamps.get_mut(index) {
            *slot = lamp;
        }
    }

    pub fn lamps(&self) -> &[Lamp] {
        &self.lamps
    }

    pub fn len(&self) -> usize {
        self.lamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lamps.is_empty()
    }

    pub fn lit_count(&self) -> usize {
        self.lamps.iter().filter(|lamp| lamp.is_on()).count()
    }
}

impl fmt::Display for LampRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for lamp in &self.lamps {
            write!(f, "{}", lamp)?;
        }
        Ok(())
    }
}
