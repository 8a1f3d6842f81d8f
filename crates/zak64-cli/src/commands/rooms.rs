use crate::cli::ImagePair;
use anyhow::Result;
use zak64_lfl::{DiskImage, Extractor, Side};

/// Print the room table from the directory on side A
pub fn handle(images: &ImagePair) -> Result<()> {
    let mut side_a = DiskImage::open(Side::A, &images.side_a)?;
    let mut side_b = DiskImage::open(Side::B, &images.side_b)?;
    let directory = Extractor::open_pair(&mut side_a, &mut side_b)?;
    let plan = directory.plan()?;

    println!("ROOM  SIDE  TRACK  SECTOR  OFFSET    RECORDS");
    for room in &plan {
        let side = room.source.side().map_or("-", Side::label);
        println!(
            "{:02}    {:<4}  {:>5}  {:>6}  {:#08x}  {:>7}",
            room.index,
            side,
            room.track,
            room.sector,
            room.offset()?,
            room.resource_count()
        );
    }
    println!(
        "{} rooms in use; {} costumes, {} scripts, {} sounds",
        plan.len(),
        directory.costumes.len(),
        directory.scripts.len(),
        directory.sounds.len()
    );
    Ok(())
}
