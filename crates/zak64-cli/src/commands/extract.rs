use crate::cli::ExtractArgs;
use anyhow::Result;
use zak64_lfl::{ExtractConfig, OutputTransform, extract_files};

/// Extract every room into the current directory
pub fn handle(args: &ExtractArgs) -> Result<()> {
    let config = ExtractConfig::default().with_transform(OutputTransform::from_flag(args.xor));
    let report = extract_files(&config, &args.images.side_a, &args.images.side_b)?;

    println!(
        "Extracted {} files ({} bytes){}",
        report.len(),
        report.total_bytes(),
        if config.transform.is_enabled() {
            ", XORed with 0xFF"
        } else {
            ""
        }
    );
    Ok(())
}
