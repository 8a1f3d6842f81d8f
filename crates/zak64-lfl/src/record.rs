//! Resource record walker
//!
//! A room is a run of records, each introduced by a little-endian `u16`
//! length that counts itself. A length of `0xFFFF` is a continuation marker:
//! it is copied and another length field follows, until a real length turns
//! up. Only then is the payload copied.

use crate::disk::DiskImage;
use crate::error::{LflError, Result};
use std::io::{Read, Seek, Write};
use tracing::trace;

/// Length value announcing that another length field follows
pub const CONTINUATION: u16 = 0xFFFF;

/// Size of a record length field
pub const LENGTH_FIELD_LEN: u16 = 2;

const COPY_CHUNK: usize = 256;

/// Copy `count` records for `room` from the image's current position
///
/// Every byte read, length fields included, is written to `out` unchanged.
/// Returns the number of bytes written.
pub fn extract_records<R: Read + Seek, W: Write>(
    image: &mut DiskImage<R>,
    room: u8,
    count: usize,
    out: &mut W,
) -> Result<u64> {
    let mut written = 0u64;

    for record in 0..count {
        let (length, offset) = loop {
            let offset = image.position();
            let mut field = [0u8; 2];
            read_record(image, room, record, &mut field)?;
            emit(out, room, &field)?;
            written += u64::from(LENGTH_FIELD_LEN);

            let length = u16::from_le_bytes(field);
            if length != CONTINUATION {
                break (length, offset);
            }
            trace!("Room {room:02} record {record}: continuation at {offset:#x}");
        };

        if length < LENGTH_FIELD_LEN {
            return Err(LflError::RecordLengthUnderflow {
                room,
                record,
                offset,
                length,
            });
        }

        let payload = length - LENGTH_FIELD_LEN;
        trace!("Room {room:02} record {record}: {payload} payload bytes at {offset:#x}");
        copy_payload(image, room, record, usize::from(payload), out)?;
        written += u64::from(payload);
    }

    Ok(written)
}

fn copy_payload<R: Read + Seek, W: Write>(
    image: &mut DiskImage<R>,
    room: u8,
    record: usize,
    mut remaining: usize,
    out: &mut W,
) -> Result<()> {
    let mut chunk = [0u8; COPY_CHUNK];
    while remaining > 0 {
        let n = remaining.min(COPY_CHUNK);
        read_record(image, room, record, &mut chunk[..n])?;
        emit(out, room, &chunk[..n])?;
        remaining -= n;
    }
    Ok(())
}

/// Read from the image, tagging failures with the room, record and offset
fn read_record<R: Read + Seek>(
    image: &mut DiskImage<R>,
    room: u8,
    record: usize,
    buf: &mut [u8],
) -> Result<()> {
    let offset = image.position();
    image.read_exact(buf).map_err(|err| match err {
        LflError::Io { path, source } => LflError::RecordRead {
            room,
            record,
            offset,
            path,
            source,
        },
        other => other,
    })
}

fn emit<W: Write>(out: &mut W, room: u8, bytes: &[u8]) -> Result<()> {
    out.write_all(bytes)
        .map_err(|source| LflError::Output { room, source })
}
