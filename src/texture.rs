// RGBA8 texture the LUT is baked into, plus flip and save.
// Visual expectation: `save` produces the file a shader loads; `flipped`
// puts row 0 at the bottom to match texture-space V.

use crate::dds;
use crate::error::Error;
use image::{ImageFormat, Rgba, RgbaImage, imageops};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk container for the baked texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ContainerFormat {
    Dds,
    Png,
}

impl ContainerFormat {
    /// Pick the container from a file extension (`.png` -> PNG, else DDS).
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("png") => ContainerFormat::Png,
            _ => ContainerFormat::Dds,
        }
    }
}

pub struct Texture {
    image: RgbaImage,
}

impl Texture {
    /// Zero-filled RGBA8 texture.
    pub fn new(width: u32, height: u32) -> Self {
        Self { image: RgbaImage::new(width, height) }
    }

    /// Wrap tightly packed RGBA8 rows (row 0 first).
    pub fn from_rgba8(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, Error> {
        let len = rgba.len();
        let image = RgbaImage::from_raw(width, height, rgba).ok_or_else(|| {
            Error::Buffer(format!("texture: {width}x{height} RGBA8 cannot hold {len} bytes"))
        })?;
        Ok(Self { image })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Write one whole pixel at (x, y), level 0.
    #[inline]
    pub fn store(&mut self, x: u32, y: u32, pixel: [u8; 4]) {
        self.image.put_pixel(x, y, Rgba(pixel));
    }

    #[cfg(test)]
    pub fn load(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    /// Copy with rows in reverse order.
    pub fn flipped(&self) -> Texture {
        Texture { image: imageops::flip_vertical(&self.image) }
    }

    /// Raw RGBA8 bytes, row 0 first.
    pub fn as_bytes(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Encode in memory, write a sibling `.part` file, then rename it over
    /// `path`. A failed write never leaves a truncated texture at `path`.
    pub fn save(&self, path: &Path, format: ContainerFormat) -> Result<(), Error> {
        let bytes = match format {
            ContainerFormat::Dds => dds::encode_rgba8(self.width(), self.height(), self.as_bytes())?,
            ContainerFormat::Png => {
                let mut buf = std::io::Cursor::new(Vec::new());
                self.image
                    .write_to(&mut buf, ImageFormat::Png)
                    .map_err(|e| Error::Encode(format!("png: {e}")))?;
                buf.into_inner()
            }
        };

        let part = part_path(path);
        if let Err(e) = fs::write(&part, &bytes).and_then(|()| fs::rename(&part, path)) {
            let _ = fs::remove_file(&part);
            return Err(Error::Io(format!("{}: {e}", path.display())));
        }
        log::debug!("texture: wrote {} bytes as {:?}", bytes.len(), format);
        Ok(())
    }
}

/// `lut.dds` -> `lut.dds.part`, in the same directory so the rename stays
/// on one filesystem.
fn part_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_reverses_rows_only() {
        let mut t = Texture::new(2, 3);
        t.store(0, 0, [1, 2, 3, 4]);
        t.store(1, 0, [5, 6, 7, 8]);
        t.store(1, 2, [9, 9, 9, 9]);

        let f = t.flipped();
        assert_eq!(f.load(0, 2), [1, 2, 3, 4]);
        assert_eq!(f.load(1, 2), [5, 6, 7, 8]);
        assert_eq!(f.load(1, 0), [9, 9, 9, 9]);
        assert_eq!(f.load(0, 1), [0, 0, 0, 0]);
        // Source untouched.
        assert_eq!(t.load(0, 0), [1, 2, 3, 4]);
    }

    #[test]
    fn from_rgba8_checks_length() {
        assert!(Texture::from_rgba8(2, 2, vec![0; 16]).is_ok());
        let err = Texture::from_rgba8(2, 2, vec![0; 12]).err().unwrap();
        assert!(matches!(err, Error::Buffer(_)));
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(ContainerFormat::from_path(Path::new("lut.PNG")), ContainerFormat::Png);
        assert_eq!(ContainerFormat::from_path(Path::new("lut.dds")), ContainerFormat::Dds);
        assert_eq!(ContainerFormat::from_path(Path::new("lut")), ContainerFormat::Dds);
    }

    #[test]
    fn save_replaces_target_and_leaves_no_part_file() {
        let dir = std::env::temp_dir().join(format!("skin-lut-save-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("lut.dds");
        fs::write(&path, b"stale").unwrap();

        let mut t = Texture::new(2, 2);
        t.store(1, 1, [10, 20, 30, 40]);
        t.save(&path, ContainerFormat::Dds).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(bytes.len(), dds::encoded_len(2, 2));
        assert_eq!(&bytes[bytes.len() - 4..], &[10, 20, 30, 40]);
        assert!(!part_path(&path).exists());
    }

    #[test]
    fn part_file_sits_next_to_target() {
        assert_eq!(
            part_path(Path::new("out/PreIntegratedSkinLUT.dds")),
            PathBuf::from("out/PreIntegratedSkinLUT.dds.part")
        );
    }

    #[test]
    fn save_into_missing_directory_is_io_error() {
        let path = std::env::temp_dir()
            .join("skin-lut-no-such-dir")
            .join("nested")
            .join("out.dds");
        let err = Texture::new(1, 1).save(&path, ContainerFormat::Dds).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(!path.exists());
        assert!(!part_path(&path).exists());
    }
}
