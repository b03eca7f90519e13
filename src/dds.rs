// DDS container writer for uncompressed RGBA8 textures.
// Legacy 124-byte header (no DX10 extension), one mip level, rows top-first.

use crate::error::Error;

pub const DDS_MAGIC: &[u8; 4] = b"DDS ";
pub const HEADER_SIZE: u32 = 124;
const PIXEL_FORMAT_SIZE: u32 = 32;

// DDS_HEADER.dwFlags
const DDSD_CAPS: u32 = 0x1;
const DDSD_HEIGHT: u32 = 0x2;
const DDSD_WIDTH: u32 = 0x4;
const DDSD_PITCH: u32 = 0x8;
const DDSD_PIXELFORMAT: u32 = 0x1000;
const DDSD_MIPMAPCOUNT: u32 = 0x20000;

// DDS_PIXELFORMAT.dwFlags
const DDPF_ALPHAPIXELS: u32 = 0x1;
const DDPF_RGB: u32 = 0x40;

// DDS_HEADER.dwCaps
const DDSCAPS_TEXTURE: u32 = 0x1000;

/// Channel masks for R8G8B8A8 laid out as bytes R, G, B, A.
const MASK_R: u32 = 0x0000_00FF;
const MASK_G: u32 = 0x0000_FF00;
const MASK_B: u32 = 0x00FF_0000;
const MASK_A: u32 = 0xFF00_0000;

/// Full file size for a `width` x `height` RGBA8 texture.
pub fn encoded_len(width: u32, height: u32) -> usize {
    DDS_MAGIC.len() + HEADER_SIZE as usize + width as usize * height as usize * 4
}

/// Encode tightly packed RGBA8 rows into an in-memory DDS file.
pub fn encode_rgba8(width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>, Error> {
    let expected = width as usize * height as usize * 4;
    if rgba.len() != expected {
        return Err(Error::Buffer(format!(
            "dds: {}x{} needs {expected} bytes, got {}",
            width,
            height,
            rgba.len()
        )));
    }

    let mut out = Vec::with_capacity(encoded_len(width, height));
    out.extend_from_slice(DDS_MAGIC);

    /* --- DDS_HEADER --- */
    put_u32(&mut out, HEADER_SIZE);
    put_u32(
        &mut out,
        DDSD_CAPS | DDSD_HEIGHT | DDSD_WIDTH | DDSD_PITCH | DDSD_PIXELFORMAT | DDSD_MIPMAPCOUNT,
    );
    put_u32(&mut out, height);
    put_u32(&mut out, width);
    put_u32(&mut out, width * 4); // pitch of one row in bytes
    put_u32(&mut out, 0); // depth
    put_u32(&mut out, 1); // mip levels
    for _ in 0..11 {
        put_u32(&mut out, 0); // reserved
    }

    /* --- DDS_PIXELFORMAT --- */
    put_u32(&mut out, PIXEL_FORMAT_SIZE);
    put_u32(&mut out, DDPF_RGB | DDPF_ALPHAPIXELS);
    put_u32(&mut out, 0); // fourCC unused for uncompressed
    put_u32(&mut out, 32); // bits per pixel
    put_u32(&mut out, MASK_R);
    put_u32(&mut out, MASK_G);
    put_u32(&mut out, MASK_B);
    put_u32(&mut out, MASK_A);

    /* --- caps --- */
    put_u32(&mut out, DDSCAPS_TEXTURE);
    put_u32(&mut out, 0); // caps2
    put_u32(&mut out, 0); // caps3
    put_u32(&mut out, 0); // caps4
    put_u32(&mut out, 0); // reserved2

    out.extend_from_slice(rgba);
    log::debug!("dds: encoded {}x{} RGBA8 ({} bytes)", width, height, out.len());
    Ok(out)
}

#[inline]
fn put_u32(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_le_bytes());
}
