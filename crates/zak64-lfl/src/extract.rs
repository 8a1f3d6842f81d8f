//! Extraction run: validate, parse the directory, emit every room
//!
//! Each artifact is decoded fully into memory before it is handed to an
//! [`ArtifactSink`], so a room that fails to decode never leaves a partial
//! file behind. Artifacts already handed over stay in place when a later room
//! fails.

use crate::config::ExtractConfig;
use crate::directory::Directory;
use crate::disk::{DiskImage, SIGNATURE_LEN, Side};
use crate::error::{LflError, Result};
use crate::record::extract_records;
use crate::room::RoomEntry;
use crate::transform::TransformWriter;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{Read, Seek, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Receives finished artifacts
pub trait ArtifactSink {
    /// Persist one complete artifact, replacing any existing one of that name
    fn put(&mut self, name: &str, data: &[u8]) -> Result<()>;
}

/// Writes artifacts as files in a directory
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    /// Sink writing into `root`, which must already exist
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Target directory
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ArtifactSink for DirectorySink {
    /// Writes to a `.tmp` sibling first and renames it over the target, so
    /// a failed write never leaves a truncated artifact.
    fn put(&mut self, name: &str, data: &[u8]) -> Result<()> {
        let path = self.root.join(name);
        let temp_path = path.with_extension("tmp");

        let written = write_file(&temp_path, data).and_then(|()| fs::rename(&temp_path, &path));
        if let Err(e) = written {
            if temp_path.exists()
                && let Err(cleanup) = fs::remove_file(&temp_path)
            {
                warn!("Failed to remove {}: {cleanup}", temp_path.display());
            }
            return Err(LflError::io(&path, e));
        }
        Ok(())
    }
}

fn write_file(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data)?;
    file.flush()
}

/// Keeps artifacts in memory, in creation order
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    artifacts: BTreeMap<String, Vec<u8>>,
    order: Vec<String>,
}

impl MemorySink {
    /// Empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents of an artifact
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.artifacts.get(name).map(Vec::as_slice)
    }

    /// Artifact names in the order they were created
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Number of distinct artifacts
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// Whether nothing was written
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl ArtifactSink for MemorySink {
    fn put(&mut self, name: &str, data: &[u8]) -> Result<()> {
        if self
            .artifacts
            .insert(name.to_string(), data.to_vec())
            .is_none()
        {
            self.order.push(name.to_string());
        }
        Ok(())
    }
}

/// One written artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// File name
    pub name: String,
    /// Room index (0 for the directory)
    pub room: u8,
    /// Side the data was read from
    pub source: Side,
    /// Offset of the first byte read
    pub offset: u64,
    /// Number of bytes written
    pub bytes: u64,
}

/// Summary of a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Artifacts in creation order
    pub artifacts: Vec<Artifact>,
}

impl ExtractionReport {
    /// Number of artifacts written
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// Whether no artifacts were written
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Total bytes across all artifacts
    pub fn total_bytes(&self) -> u64 {
        self.artifacts.iter().map(|a| a.bytes).sum()
    }

    /// Artifact for a room, if one was written
    pub fn room(&self, room: u8) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.room == room)
    }
}

/// Drives an extraction run
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractConfig,
}

impl Extractor {
    /// Create an extractor
    pub const fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub const fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Validate both signatures and parse the directory from side A
    ///
    /// Nothing is written. Side A is checked first, then side B.
    pub fn open_pair<A, B>(
        side_a: &mut DiskImage<A>,
        side_b: &mut DiskImage<B>,
    ) -> Result<Directory>
    where
        A: Read + Seek,
        B: Read + Seek,
    {
        side_a.validate_signature()?;
        side_b.validate_signature()?;
        Directory::parse(side_a)
    }

    /// Extract the directory and every used room into `sink`
    ///
    /// Signatures and room locations are all checked before the first
    /// artifact is written.
    pub fn run<A, B, S>(
        &self,
        side_a: &mut DiskImage<A>,
        side_b: &mut DiskImage<B>,
        sink: &mut S,
    ) -> Result<ExtractionReport>
    where
        A: Read + Seek,
        B: Read + Seek,
        S: ArtifactSink + ?Sized,
    {
        let directory = Self::open_pair(side_a, side_b)?;
        let plan = directory.plan()?;
        debug!("{} rooms to extract", plan.len());

        let mut report = ExtractionReport::default();

        let name = self.config.artifact_name(0);
        info!("Creating {name}...");
        let mut out = TransformWriter::new(Vec::new(), self.config.transform);
        directory.write_artifact(&mut out)?;
        let data = out.into_inner();
        sink.put(&name, &data)?;
        report.artifacts.push(Artifact {
            name,
            room: 0,
            source: Side::A,
            offset: SIGNATURE_LEN,
            bytes: data.len() as u64,
        });

        for room in plan {
            let Some(source) = room.source.side() else {
                continue;
            };
            let (data, offset) = match source {
                Side::A => self.extract_room(side_a, &room)?,
                Side::B => self.extract_room(side_b, &room)?,
            };

            let name = self.config.artifact_name(room.index);
            info!("Creating {name}...");
            sink.put(&name, &data)?;
            report.artifacts.push(Artifact {
                name,
                room: room.index,
                source,
                offset,
                bytes: data.len() as u64,
            });
        }

        info!(
            "Extracted {} files ({} bytes)",
            report.len(),
            report.total_bytes()
        );
        Ok(report)
    }

    /// Decode one room from `image` into a transformed buffer
    ///
    /// Returns the buffer and the offset the room was read from.
    pub fn extract_room<R: Read + Seek>(
        &self,
        image: &mut DiskImage<R>,
        room: &RoomEntry,
    ) -> Result<(Vec<u8>, u64)> {
        let offset = room.offset()?;
        let count = room.resource_count();
        debug!(
            "Room {:02}: side {} track {} sector {} offset {offset:#x}, {count} records",
            room.index,
            image.side(),
            room.track,
            room.sector
        );

        image.seek_to(offset)?;
        let mut out = TransformWriter::new(Vec::new(), self.config.transform);
        extract_records(image, room.index, count, &mut out)?;
        Ok((out.into_inner(), offset))
    }
}

/// Extract from two image files into `config.output_dir`
pub fn extract_files(
    config: &ExtractConfig,
    side_a: impl AsRef<Path>,
    side_b: impl AsRef<Path>,
) -> Result<ExtractionReport> {
    let mut side_a = DiskImage::open(Side::A, side_a)?;
    let mut side_b = DiskImage::open(Side::B, side_b)?;
    let mut sink = DirectorySink::new(&config.output_dir);
    Extractor::new(config.clone()).run(&mut side_a, &mut side_b, &mut sink)
}
