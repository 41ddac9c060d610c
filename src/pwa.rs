use crate::BeerIcon;
use anyhow::Result;
use std::path::Path;

/// Sizes declared by the web manifest's icon set.
pub const PWA_SIZE: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

pub fn pwa_icons<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;
    for size in PWA_SIZE {
        let path = dir.join(format!("icon-{}x{}.png", size, size));
        BeerIcon::render(size).write(&path)?;
        println!("created {}", path.display());
    }
    Ok(())
}
