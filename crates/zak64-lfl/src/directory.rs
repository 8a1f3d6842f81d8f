//! Directory header stored at the start of side A
//!
//! Layout, immediately after the side A signature:
//!
//! | Field          | Size             |
//! |----------------|------------------|
//! | object flags   | 775 × u8         |
//! | room disks     | 59 × u8          |
//! | room locations | 59 × (u8, u8)    |
//! | costumes       | 38 × u8, 38 × u16  |
//! | scripts        | 155 × u8, 155 × u16 |
//! | sounds         | 127 × u8, 127 × u16 |
//!
//! The reconstructed `00.LFL` is this header prefixed with the side B
//! signature, not side A's.

use crate::disk::{DiskImage, SIGNATURE_LEN, Side};
use crate::error::{LflError, Result};
use crate::geometry::ROOM_COUNT;
use crate::room::RoomEntry;
use binrw::io::NoSeek;
use binrw::{BinRead, BinWrite};
use std::io::{Read, Seek, Write};
use tracing::debug;

/// Number of object flag bytes
pub const OBJECT_COUNT: usize = 775;
/// Number of costume table entries
pub const COSTUME_COUNT: usize = 38;
/// Number of script table entries
pub const SCRIPT_COUNT: usize = 155;
/// Number of sound table entries
pub const SOUND_COUNT: usize = 127;

/// Bytes consumed from side A by the directory (excluding the signature)
pub const DIRECTORY_LEN: u64 = (OBJECT_COUNT
    + ROOM_COUNT
    + ROOM_COUNT * 2
    + COSTUME_COUNT * 3
    + SCRIPT_COUNT * 3
    + SOUND_COUNT * 3) as u64;

/// Where a room starts on its side, stored sector first
#[derive(BinRead, BinWrite, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoomLocation {
    /// Sector within the track
    pub sector: u8,
    /// 1-based track number
    pub track: u8,
}

/// Resource table: one room byte per entry followed by one offset per entry
#[derive(BinRead, BinWrite, Debug, Clone, PartialEq, Eq)]
#[br(import(count: usize))]
pub struct ResourceTable {
    /// Room holding each resource
    #[br(count = count)]
    pub rooms: Vec<u8>,
    /// Offset of each resource within its room
    #[br(count = count)]
    pub offsets: Vec<u16>,
}

impl ResourceTable {
    /// Number of entries
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// `(room, offset)` pairs
    pub fn entries(&self) -> impl Iterator<Item = (u8, u16)> + '_ {
        self.rooms.iter().copied().zip(self.offsets.iter().copied())
    }
}

/// Parsed directory header
#[derive(BinRead, BinWrite, Debug, Clone, PartialEq, Eq)]
#[brw(little)]
pub struct Directory {
    /// Object flags, copied verbatim
    #[br(count = OBJECT_COUNT)]
    pub object_flags: Vec<u8>,

    /// Disk marker per room (`'1'`, `'2'` or unused)
    #[br(count = ROOM_COUNT)]
    pub room_disks: Vec<u8>,

    /// Start location per room
    #[br(count = ROOM_COUNT)]
    pub room_locations: Vec<RoomLocation>,

    /// Costume resource table
    #[br(args(COSTUME_COUNT))]
    pub costumes: ResourceTable,

    /// Script resource table
    #[br(args(SCRIPT_COUNT))]
    pub scripts: ResourceTable,

    /// Sound resource table
    #[br(args(SOUND_COUNT))]
    pub sounds: ResourceTable,
}

impl Directory {
    /// Parse the directory from a side A image
    ///
    /// Reads exactly [`DIRECTORY_LEN`] bytes after the signature, leaving the
    /// image positioned at the first byte past the header.
    pub fn parse<R: Read + Seek>(image: &mut DiskImage<R>) -> Result<Self> {
        image.seek_to(SIGNATURE_LEN)?;
        let directory = image.read_with(|reader| Self::read(reader))?;

        debug!(
            "Parsed directory from {}: {} rooms, {} costumes, {} scripts, {} sounds",
            image.path().display(),
            directory.room_disks.len(),
            directory.costumes.len(),
            directory.scripts.len(),
            directory.sounds.len()
        );

        Ok(directory)
    }

    /// Write the `00.LFL` artifact: side B signature followed by the header
    pub fn write_artifact<W: Write>(&self, out: &mut W) -> Result<()> {
        let emit = |source| LflError::Output { room: 0, source };

        out.write_all(&Side::B.signature()).map_err(emit)?;
        self.write(&mut NoSeek::new(&mut *out))
            .map_err(|e| match e {
                binrw::Error::Io(source) => source,
                other => std::io::Error::other(other.to_string()),
            })
            .map_err(emit)?;
        Ok(())
    }

    /// Entry for one room, `None` past the last room
    pub fn room(&self, index: usize) -> Option<RoomEntry> {
        let disk = *self.room_disks.get(index)?;
        let location = *self.room_locations.get(index)?;
        Some(RoomEntry::new(index as u8, disk, location))
    }

    /// Entries for all rooms, used or not
    pub fn rooms(&self) -> Vec<RoomEntry> {
        (0..self.room_disks.len())
            .filter_map(|index| self.room(index))
            .collect()
    }

    /// Rooms that produce an artifact, with their locations checked
    ///
    /// Room 0 is never included: its artifact is the directory itself.
    pub fn plan(&self) -> Result<Vec<RoomEntry>> {
        let mut plan = Vec::new();
        for room in self.rooms().into_iter().skip(1) {
            if room.source.side().is_none() {
                debug!("Room {:02} unused (disk marker {:#04x})", room.index, room.disk);
                continue;
            }
            room.offset()?;
            plan.push(room);
        }
        Ok(plan)
    }
}
