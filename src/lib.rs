use anyhow::Result;
use std::path::Path;

pub mod icon;
pub mod mipmap;
pub mod pwa;

pub use icon::BeerIcon;

/// Size of the standalone logo, matching the reference design.
pub const LOGO_SIZE: u32 = 512;

/// Renders the full icon set under the given output root.
pub fn generate<P: AsRef<Path>>(root: P) -> Result<()> {
    let root = root.as_ref();
    tracing::info!("generating icon assets under {}", root.display());
    pwa::pwa_icons(root.join("images").join("icons").join("pwa"))?;
    mipmap::mipmap_ic_launcher(
        root.join("android")
            .join("app")
            .join("src")
            .join("main")
            .join("res"),
    )?;
    let images = root.join("images");
    std::fs::create_dir_all(&images)?;
    let path = images.join("logo-beer.png");
    BeerIcon::render(LOGO_SIZE).write(&path)?;
    println!("created {}", path.display());
    Ok(())
}
