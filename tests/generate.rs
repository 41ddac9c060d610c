use anyhow::Result;
use beericons::{generate, mipmap, pwa};
use image::GenericImageView;

#[test]
fn generates_the_full_asset_tree() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let root = tmp.path();
    generate(root)?;

    for size in pwa::PWA_SIZE {
        let path = root.join(format!("images/icons/pwa/icon-{0}x{0}.png", size));
        assert!(path.exists(), "missing {}", path.display());
        let img = image::open(&path)?;
        assert_eq!(img.dimensions(), (size, size));
    }

    for (label, size) in mipmap::DPI_LABEL.iter().zip(mipmap::DPI_SIZE) {
        let dir = root.join(format!("android/app/src/main/res/mipmap-{}", label));
        assert!(dir.is_dir(), "missing {}", dir.display());
        for name in mipmap::LAUNCHER_NAME {
            let path = dir.join(name);
            assert!(path.exists(), "missing {}", path.display());
            let img = image::open(&path)?;
            assert_eq!(img.dimensions(), (size, size));
        }
    }

    let logo = root.join("images/logo-beer.png");
    assert!(logo.exists(), "missing {}", logo.display());
    assert_eq!(image::open(&logo)?.dimensions(), (512, 512));
    Ok(())
}

#[test]
fn rerun_overwrites_existing_assets() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    generate(tmp.path())?;
    generate(tmp.path())?;
    let logo = image::open(tmp.path().join("images/logo-beer.png"))?;
    assert_eq!(logo.dimensions(), (512, 512));
    Ok(())
}
