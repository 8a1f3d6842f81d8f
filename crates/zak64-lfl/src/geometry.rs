//! Fixed disk geometry and per-room record counts
//!
//! The C64 1541 format has a varying number of sectors per track (21 on the
//! outer tracks down to 17 on the inner ones), so a track/sector pair is turned
//! into a linear sector number through a precomputed base table.

/// Size of a physical sector in bytes
pub const SECTOR_SIZE: u64 = 256;

/// Number of entries in the track table (tracks are 1-indexed, entry 0 unused)
pub const TRACK_COUNT: usize = 36;

/// Number of rooms described by the directory
pub const ROOM_COUNT: usize = 59;

/// First linear sector of each track
pub const TRACK_OFFSETS: [u16; TRACK_COUNT] = [
    0, 0, 21, 42, 63, 84, 105, 126, 147, 168, 189, 210, //
    231, 252, 273, 294, 315, 336, 357, 376, 395, 414, 433, 452, //
    471, 490, 508, 526, 544, 562, 580, 598, 615, 632, 649, 666,
];

/// Number of resource records stored for each room
///
/// Room 0 holds only the directory.
pub const RESOURCES_PER_ROOM: [u8; ROOM_COUNT] = [
    0, 29, 12, 14, 13, 4, 4, 10, 7, 4, //
    14, 19, 5, 4, 7, 6, 11, 9, 4, 4, //
    1, 3, 3, 5, 1, 9, 4, 10, 13, 6, //
    7, 10, 2, 6, 1, 11, 2, 5, 7, 1, //
    7, 1, 4, 2, 8, 6, 6, 6, 4, 13, //
    3, 1, 2, 1, 2, 1, 10, 1, 1,
];

/// Byte offset of a track/sector pair within a side image
///
/// Returns `None` when `track` is outside the track table.
pub fn absolute_offset(track: u8, sector: u8) -> Option<u64> {
    let base = *TRACK_OFFSETS.get(usize::from(track))?;
    Some((u64::from(base) + u64::from(sector)) * SECTOR_SIZE)
}

/// Number of resource records stored for a room, `None` past the last room
pub fn resource_count(room: usize) -> Option<usize> {
    RESOURCES_PER_ROOM.get(room).map(|&count| usize::from(count))
}
