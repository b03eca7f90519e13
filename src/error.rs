// Failures of a bake: bad options, a mis-sized buffer, the encoder, or the disk.
// Each variant carries the stage that failed plus the underlying message.
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    Args(String),   // Generator options out of range
    Buffer(String), // Texture buffer has the wrong size
    Encode(String), // The image encoder rejected the texture
    Io(String),     // Writing the output file failed
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Args(s) => write!(f, "Argument error: {s}"),
            Error::Buffer(s) => write!(f, "Texture buffer error: {s}"),
            Error::Encode(s) => write!(f, "Encode error: {s}"),
            Error::Io(s) => write!(f, "I/O error: {s}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_stage() {
        let e = Error::Io("PreIntegratedSkinLUT.dds: permission denied".into());
        assert_eq!(
            e.to_string(),
            "I/O error: PreIntegratedSkinLUT.dds: permission denied"
        );
        assert!(Error::Args("x".into()).to_string().starts_with("Argument error"));
    }
}
