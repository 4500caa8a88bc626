//! Core type definitions used throughout the codebase

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Simulated time in milliseconds since the world was generated
pub type Millis = u64;

/// Identifier for a collectible resource lying in the world
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[display(fmt = "resource-{}", _0)]
pub struct ResourceId(pub u64);

/// Identifier for a tree
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[display(fmt = "tree-{}", _0)]
pub struct TreeId(pub u64);

/// Identifier for a planted seed
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[display(fmt = "seed-{}", _0)]
pub struct SeedId(pub u64);

/// Identifier for a placed structure (campfire)
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[display(fmt = "structure-{}", _0)]
pub struct StructureId(pub u64);

/// Identifier for a non-player castaway
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[display(fmt = "npc-{}", _0)]
pub struct NpcId(pub u64);

/// Identifier for a rolling log message
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[display(fmt = "log-{}", _0)]
pub struct LogId(pub u64);

/// Monotonic id source owned by a single world.
///
/// Each entity kind draws from its own counter so ids stay small and
/// readable in logs. Two worlds never share counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdAllocator {
    next_resource: u64,
    next_tree: u64,
    next_seed: u64,
    next_structure: u64,
    next_npc: u64,
    next_log: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resource(&mut self) -> ResourceId {
        self.next_resource += 1;
        ResourceId(self.next_resource)
    }

    pub fn tree(&mut self) -> TreeId {
        self.next_tree += 1;
        TreeId(self.next_tree)
    }

    pub fn seed(&mut self) -> SeedId {
        self.next_seed += 1;
        SeedId(self.next_seed)
    }

    pub fn structure(&mut self) -> StructureId {
        self.next_structure += 1;
        StructureId(self.next_structure)
    }

    pub fn npc(&mut self) -> NpcId {
        self.next_npc += 1;
        NpcId(self.next_npc)
    }

    pub fn log(&mut self) -> LogId {
        self.next_log += 1;
        LogId(self.next_log)
    }
}

/// 2D ground position (x east, y south)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing at `angle` radians
    pub fn from_angle(angle: f32) -> Self {
        Self { x: angle.cos(), y: angle.sin() }
    }

    pub fn distance(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0001 {
            Self { x: self.x / len, y: self.y / len }
        } else {
            Self::default()
        }
    }

    /// Rotate counter-clockwise by `angle` radians
    pub fn rotate(&self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    pub fn angle(&self) -> f32 {
        self.y.atan2(self.x)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y }
    }
}

/// Eight-way compass direction relative to the island centre.
///
/// North is negative y, matching the renderer's forward axis.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compass {
    #[display(fmt = "north")]
    North,
    #[display(fmt = "north-east")]
    NorthEast,
    #[display(fmt = "east")]
    East,
    #[display(fmt = "south-east")]
    SouthEast,
    #[display(fmt = "south")]
    South,
    #[display(fmt = "south-west")]
    SouthWest,
    #[display(fmt = "west")]
    West,
    #[display(fmt = "north-west")]
    NorthWest,
}

impl Compass {
    /// Direction of `pos` as seen from the origin
    pub fn from_position(pos: Vec2) -> Self {
        // Clockwise bearing from north, in eighths of a turn
        let bearing = pos.x.atan2(-pos.y).rem_euclid(std::f32::consts::TAU);
        let octant = ((bearing / (std::f32::consts::TAU / 8.0)).round() as u32) % 8;
        match octant {
            0 => Compass::North,
            1 => Compass::NorthEast,
            2 => Compass::East,
            3 => Compass::SouthEast,
            4 => Compass::South,
            5 => Compass::SouthWest,
            6 => Compass::West,
            _ => Compass::NorthWest,
        }
    }
}
