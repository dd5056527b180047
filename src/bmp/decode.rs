//! BMP decoding: byte stream -> headers + `Image<Rgb>`.
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use log::debug;

use super::header::{FileHeader, InfoHeader, FILE_HEADER_LEN, INFO_HEADER_LEN};
use crate::error::{Error, Result, Section};
use crate::image::{ImageRgb, Rgb};

/// A decoded bitmap together with the headers it was parsed from, kept for
/// diagnostic inspection.
#[derive(Debug, Clone)]
pub struct DecodedBmp {
    pub file_header: FileHeader,
    pub info_header: InfoHeader,
    pub pixels: ImageRgb,
}

/// Load an uncompressed 24-bit BMP from disk.
///
/// Rows are returned in on-disk order; no vertical flip is applied, matching
/// the encoder. Fails on a bad `BM` signature, unsupported bit depth or
/// compression, non-positive dimensions, or any short read.
pub fn load(path: &Path) -> Result<DecodedBmp> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let mut raw = [0u8; FILE_HEADER_LEN];
    read_section(&mut reader, &mut raw, Section::FileHeader)?;
    let file_header = FileHeader::from_bytes(&raw);
    if &file_header.signature != b"BM" {
        return Err(Error::Signature(file_header.signature));
    }

    reader.seek(SeekFrom::Start(FILE_HEADER_LEN as u64))?;
    let mut raw = [0u8; INFO_HEADER_LEN];
    read_section(&mut reader, &mut raw, Section::InfoHeader)?;
    let info_header = InfoHeader::from_bytes(&raw);
    debug!(
        "parsed headers: {}x{} {}bpp, compression={}, pixel data at {}",
        info_header.width,
        info_header.height,
        info_header.bit_count,
        info_header.compression,
        file_header.offset
    );

    if info_header.width <= 0 || info_header.height <= 0 {
        return Err(Error::InvalidDimensions {
            width: info_header.width,
            height: info_header.height,
        });
    }
    if info_header.bit_count != 24 {
        return Err(Error::Unsupported(format!(
            "{} bits per pixel (only 24 is supported)",
            info_header.bit_count
        )));
    }
    if info_header.compression != 0 {
        return Err(Error::Unsupported(format!(
            "compression method {}",
            info_header.compression
        )));
    }

    let width = info_header.width as usize;
    let height = info_header.height as usize;
    // Universal alignment rule: rows are padded out to a 4-byte boundary.
    let row_size = (info_header.bit_count as usize * width + 31) / 32 * 4;

    reader.seek(SeekFrom::Start(file_header.offset as u64))?;
    let pixels = read_pixel_rows(&mut reader, width, height, row_size)?;

    Ok(DecodedBmp {
        file_header,
        info_header,
        pixels,
    })
}

fn read_pixel_rows<R: Read>(
    reader: &mut R,
    width: usize,
    height: usize,
    row_size: usize,
) -> Result<ImageRgb> {
    let mut image = ImageRgb::new(width, height);
    let mut row_bytes = vec![0u8; row_size];
    for y in 0..height {
        read_section(reader, &mut row_bytes, Section::PixelRow(y))?;
        let row = image.row_mut(y);
        for (x, triple) in row_bytes.chunks_exact(3).take(width).enumerate() {
            // On-disk channel order is blue, green, red.
            row[x] = Rgb::new(triple[2], triple[1], triple[0]);
        }
    }
    Ok(image)
}

/// `read_exact` with short reads mapped to the section-aware truncation error.
fn read_section<R: Read>(reader: &mut R, buf: &mut [u8], section: Section) -> Result<()> {
    reader.read_exact(buf).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            Error::Truncated {
                section,
                expected: buf.len(),
            }
        } else {
            Error::Io(e)
        }
    })
}
