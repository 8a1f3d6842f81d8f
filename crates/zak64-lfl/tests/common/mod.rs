//! Synthetic disk 2 image pairs for integration tests

#![allow(dead_code)]

use std::io::Cursor;
use zak64_lfl::directory::{DIRECTORY_LEN, OBJECT_COUNT};
use zak64_lfl::geometry::{ROOM_COUNT, absolute_offset};
use zak64_lfl::{DiskImage, Side};

/// Encode one record: self-counting length followed by the payload
pub fn record(payload: &[u8]) -> Vec<u8> {
    let mut bytes = u16::try_from(payload.len() + 2)
        .unwrap_or(u16::MAX)
        .to_le_bytes()
        .to_vec();
    bytes.extend_from_slice(payload);
    bytes
}

/// `count` small records whose payload identifies the room and record
pub fn numbered_records(room: u8, count: usize) -> Vec<u8> {
    (0..count)
        .flat_map(|i| record(&[room, i as u8, 0x5A]))
        .collect()
}

/// Builder for a matching side A / side B pair
pub struct PairBuilder {
    header: Vec<u8>,
    side_a: Vec<u8>,
    side_b: Vec<u8>,
}

impl Default for PairBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PairBuilder {
    /// All rooms unused, header bytes filled with a recognisable pattern
    pub fn new() -> Self {
        let mut header: Vec<u8> = (0..DIRECTORY_LEN).map(|i| (i % 199) as u8).collect();
        let disks = OBJECT_COUNT;
        header[disks..disks + ROOM_COUNT].fill(0);
        Self {
            header,
            side_a: Vec::new(),
            side_b: Vec::new(),
        }
    }

    /// Place `data` for room `index` at `track`/`sector` on the side chosen by `marker`
    pub fn room(mut self, index: usize, marker: u8, track: u8, sector: u8, data: &[u8]) -> Self {
        self.set_marker(index, marker);
        let locations = OBJECT_COUNT + ROOM_COUNT + index * 2;
        self.header[locations] = sector;
        self.header[locations + 1] = track;

        let target = match marker {
            b'1' => Some(&mut self.side_a),
            b'2' => Some(&mut self.side_b),
            _ => None,
        };
        if let (Some(target), Some(offset)) = (target, absolute_offset(track, sector)) {
            write_at(target, offset as usize, data);
        }
        self
    }

    /// Set only the disk marker of a room
    pub fn marker(mut self, index: usize, marker: u8) -> Self {
        self.set_marker(index, marker);
        self
    }

    /// Write raw bytes at an absolute offset of one side
    pub fn raw(mut self, side: Side, offset: usize, data: &[u8]) -> Self {
        match side {
            Side::A => write_at(&mut self.side_a, offset, data),
            Side::B => write_at(&mut self.side_b, offset, data),
        }
        self
    }

    fn set_marker(&mut self, index: usize, marker: u8) {
        self.header[OBJECT_COUNT + index] = marker;
    }

    /// Directory header bytes (without signature)
    pub fn header(&self) -> &[u8] {
        &self.header
    }

    /// Finished `(side_a, side_b)` bytes
    pub fn build(&self) -> (Vec<u8>, Vec<u8>) {
        let mut side_a = self.side_a.clone();
        let mut head = Side::A.signature().to_vec();
        head.extend_from_slice(&self.header);
        write_at(&mut side_a, 0, &head);

        let mut side_b = self.side_b.clone();
        write_at(&mut side_b, 0, &Side::B.signature());

        (side_a, side_b)
    }

    /// Finished pair as in-memory images
    pub fn images(&self) -> (DiskImage<Cursor<Vec<u8>>>, DiskImage<Cursor<Vec<u8>>>) {
        let (a, b) = self.build();
        (
            DiskImage::from_reader(Side::A, "disk2a.d64", Cursor::new(a)),
            DiskImage::from_reader(Side::B, "disk2b.d64", Cursor::new(b)),
        )
    }
}

fn write_at(target: &mut Vec<u8>, offset: usize, data: &[u8]) {
    if target.len() < offset + data.len() {
        target.resize(offset + data.len(), 0);
    }
    target[offset..offset + data.len()].copy_from_slice(data);
}
