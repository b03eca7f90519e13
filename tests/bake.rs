// End-to-end: bake through the library entry point and read the file back.

use skin_lut::config::Config;
use skin_lut::lut::{self, LutOptions};
use skin_lut::texture::ContainerFormat;
use std::path::PathBuf;

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("skin-lut-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

fn u32_at(bytes: &[u8], ofs: usize) -> u32 {
    u32::from_le_bytes([bytes[ofs], bytes[ofs + 1], bytes[ofs + 2], bytes[ofs + 3]])
}

#[test_log::test]
fn default_bake_writes_flipped_128_dds() {
    let out = scratch("PreIntegratedSkinLUT.dds");
    let cfg = Config { out: out.clone(), ..Config::default() };
    skin_lut::run(&cfg).unwrap();

    let bytes = std::fs::read(&out).unwrap();
    assert_eq!(bytes.len(), 128 + 128 * 128 * 4);
    assert_eq!(&bytes[..4], b"DDS ");
    assert_eq!(u32_at(&bytes, 12), 128);
    assert_eq!(u32_at(&bytes, 16), 128);

    // Row y=0 of the grid ends up as the last row in the file.
    let grid = lut::generate(&LutOptions::default()).unwrap();
    let row = 128 * 4;
    let last_row = &bytes[128 + 127 * row..128 + 128 * row];
    assert_eq!(last_row, &grid.as_bytes()[..row]);

    // Texel (0,0): back-lit, black diffuse, alpha from the NaN column.
    assert_eq!(&last_row[..4], &[0, 0, 0, 0]);
}

#[test]
fn two_bakes_are_byte_identical() {
    let a = scratch("a.dds");
    let b = scratch("b.dds");
    let base = Config { resolution: 48, ..Config::default() };
    skin_lut::run(&Config { out: a.clone(), ..base.clone() }).unwrap();
    skin_lut::run(&Config { out: b.clone(), parallel: false, ..base }).unwrap();
    assert_eq!(std::fs::read(a).unwrap(), std::fs::read(b).unwrap());
}

#[test]
fn png_output_decodes_to_the_unflipped_grid() {
    let out = scratch("skin.png");
    let cfg = Config {
        resolution: 16,
        out: out.clone(),
        format: ContainerFormat::Png,
        flip: false,
        ..Config::default()
    };
    skin_lut::run(&cfg).unwrap();

    let decoded = image::open(&out).unwrap().to_rgba8();
    let grid = lut::generate(&cfg.lut_options()).unwrap();
    assert_eq!(decoded.dimensions(), (16, 16));
    assert_eq!(decoded.as_raw().as_slice(), grid.as_bytes());
}

#[test]
fn unwritable_path_fails_without_output() {
    let out = scratch("missing-dir").join("lut.dds");
    let cfg = Config { resolution: 4, out: out.clone(), ..Config::default() };
    assert!(skin_lut::run(&cfg).is_err());
    assert!(!out.exists());
    assert!(!out.with_extension("dds.part").exists());
}
