use crate::BeerIcon;
use anyhow::Result;
use std::path::Path;

pub const DPI_LABEL: [&str; 5] = ["mdpi", "hdpi", "xhdpi", "xxhdpi", "xxxhdpi"];

pub const DPI_SIZE: [u32; 5] = [48, 72, 96, 144, 192];

/// Launcher variants the android resource tree expects per density bucket.
pub const LAUNCHER_NAME: [&str; 3] = [
    "ic_launcher.png",
    "ic_launcher_foreground.png",
    "ic_launcher_round.png",
];

pub fn mipmap_ic_launcher<P: AsRef<Path>>(res: P) -> Result<()> {
    for (label, size) in DPI_LABEL.iter().zip(DPI_SIZE) {
        let dir = res.as_ref().join(format!("mipmap-{}", label));
        std::fs::create_dir_all(&dir)?;
        let icon = BeerIcon::render(size);
        for name in LAUNCHER_NAME {
            let path = dir.join(name);
            icon.write(&path)?;
            println!("created {}", path.display());
        }
    }
    Ok(())
}
