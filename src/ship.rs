//! Ship catalog and placed ship instances.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;

use crate::position::Position;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Map a `horizontal` flag onto an orientation.
    pub const fn from_horizontal(horizontal: bool) -> Self {
        if horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Unit step `(dr, dc)` along the ship's length.
    pub const fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// Kind of ship. Each kind has a fixed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipType {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

impl ShipType {
    /// Every ship kind, in catalog order.
    pub const ALL: [ShipType; 5] = [
        ShipType::Carrier,
        ShipType::Battleship,
        ShipType::Cruiser,
        ShipType::Submarine,
        ShipType::Destroyer,
    ];

    /// Number of cells the ship occupies.
    pub const fn size(self) -> usize {
        match self {
            ShipType::Carrier => 5,
            ShipType::Battleship => 4,
            ShipType::Cruiser | ShipType::Submarine => 3,
            ShipType::Destroyer => 2,
        }
    }

    /// Ship's name.
    pub const fn name(self) -> &'static str {
        match self {
            ShipType::Carrier => "Carrier",
            ShipType::Battleship => "Battleship",
            ShipType::Cruiser => "Cruiser",
            ShipType::Submarine => "Submarine",
            ShipType::Destroyer => "Destroyer",
        }
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A ship placed on a board: its hull and the hull cells hit so far.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    origin: Position,
    orientation: Orientation,
    hull: Vec<Position>,
    hits: BTreeSet<Position>,
}

impl Ship {
    /// Lay out a ship from `origin` along `orientation`.
    ///
    /// No bounds or overlap checks happen here; the board validates the hull
    /// before accepting the ship. The hull must fit within the range of `i32`.
    pub fn new(ship_type: ShipType, origin: Position, orientation: Orientation) -> Self {
        let (dr, dc) = orientation.step();
        let hull = (0..ship_type.size() as i32)
            .map(|i| origin.offset(dr * i, dc * i))
            .collect();
        Ship {
            ship_type,
            origin,
            orientation,
            hull,
            hits: BTreeSet::new(),
        }
    }

    /// Like `new`, but `None` if the hull would run past the range of `i32`.
    pub fn try_new(
        ship_type: ShipType,
        origin: Position,
        orientation: Orientation,
    ) -> Option<Self> {
        let (dr, dc) = orientation.step();
        let last = ship_type.size() as i32 - 1;
        origin.checked_offset(dr * last, dc * last)?;
        Some(Self::new(ship_type, origin, orientation))
    }

    /// Record a hit at `pos`. Returns `false` if `pos` is not part of the hull.
    pub fn register_hit(&mut self, pos: Position) -> bool {
        if self.occupies(pos) {
            self.hits.insert(pos);
            true
        } else {
            false
        }
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits.len() == self.hull.len()
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.hull.contains(&pos)
    }

    /// Cells occupied by the ship, starting at the origin.
    pub fn hull(&self) -> &[Position] {
        &self.hull
    }

    pub fn hit_count(&self) -> usize {
        self.hits.len()
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: {}, orientation: {:?}, hits: {}/{}{} }}",
            self.ship_type.name(),
            self.origin,
            self.orientation,
            self.hits.len(),
            self.hull.len(),
            if self.is_sunk() { ", sunk" } else { "" },
        )
    }
}
