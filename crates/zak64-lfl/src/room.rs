//! Per-room directory entries

use crate::directory::RoomLocation;
use crate::disk::Side;
use crate::error::{LflError, Result};
use crate::geometry;

/// Which image a room is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomSource {
    /// Room data lives on side A
    SideA,
    /// Room data lives on side B
    SideB,
    /// Room has no data and is skipped
    Unused,
}

impl RoomSource {
    /// Resolve a directory disk marker
    pub const fn from_marker(marker: u8) -> Self {
        match Side::from_marker(marker) {
            Some(Side::A) => Self::SideA,
            Some(Side::B) => Self::SideB,
            None => Self::Unused,
        }
    }

    /// Side to read from, `None` for unused rooms
    pub const fn side(self) -> Option<Side> {
        match self {
            Self::SideA => Some(Side::A),
            Self::SideB => Some(Side::B),
            Self::Unused => None,
        }
    }
}

/// Location of one room, resolved from the directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomEntry {
    /// Room index
    pub index: u8,
    /// Raw disk marker from the directory
    pub disk: u8,
    /// Source image resolved from `disk`
    pub source: RoomSource,
    /// 1-based track
    pub track: u8,
    /// Sector within the track
    pub sector: u8,
}

impl RoomEntry {
    /// Build an entry from its directory fields
    pub const fn new(index: u8, disk: u8, location: RoomLocation) -> Self {
        Self {
            index,
            disk,
            source: RoomSource::from_marker(disk),
            track: location.track,
            sector: location.sector,
        }
    }

    /// Byte offset of the room's first record within its side
    pub fn offset(&self) -> Result<u64> {
        geometry::absolute_offset(self.track, self.sector).ok_or(LflError::IndexOutOfRange {
            room: self.index,
            track: self.track,
            sector: self.sector,
        })
    }

    /// Number of resource records stored for the room
    pub fn resource_count(&self) -> usize {
        geometry::resource_count(usize::from(self.index)).unwrap_or(0)
    }
}
