//! BMP header structures and their fixed little-endian wire layout.
//!
//! Both headers are transient: parsed fresh on load, recomputed from the
//! image dimensions on save, never carried as mutable state in between.
use serde::Serialize;

/// Byte length of the file header on disk.
pub const FILE_HEADER_LEN: usize = 14;
/// Byte length of the BITMAPINFOHEADER on disk.
pub const INFO_HEADER_LEN: usize = 40;
/// Pixel data offset written by the encoder (headers are packed back to back).
pub const PIXEL_DATA_OFFSET: u32 = (FILE_HEADER_LEN + INFO_HEADER_LEN) as u32;

/// 96 DPI expressed in pixels per meter, truncated as the on-disk field is.
pub const RESOLUTION_PPM: i32 = (96.0 * 39.3701) as i32;

/// 14-byte BMP file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileHeader {
    pub signature: [u8; 2],
    pub size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// Byte offset of the pixel data from the start of the file.
    pub offset: u32,
}

/// 40-byte BITMAPINFOHEADER.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InfoHeader {
    pub size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: u32,
    pub size_image: u32,
    pub horizontal_res: i32,
    pub vertical_res: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

#[inline]
fn u16_at(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

#[inline]
fn u32_at(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

#[inline]
fn i32_at(bytes: &[u8], offset: usize) -> i32 {
    u32_at(bytes, offset) as i32
}

impl FileHeader {
    /// Parse from the first 14 bytes of a file. Reserved fields are passed
    /// through unvalidated.
    pub fn from_bytes(bytes: &[u8; FILE_HEADER_LEN]) -> Self {
        Self {
            signature: [bytes[0], bytes[1]],
            size: u32_at(bytes, 2),
            reserved1: u16_at(bytes, 6),
            reserved2: u16_at(bytes, 8),
            offset: u32_at(bytes, 10),
        }
    }

    pub fn to_bytes(&self) -> [u8; FILE_HEADER_LEN] {
        let mut out = [0u8; FILE_HEADER_LEN];
        out[0..2].copy_from_slice(&self.signature);
        out[2..6].copy_from_slice(&self.size.to_le_bytes());
        out[6..8].copy_from_slice(&self.reserved1.to_le_bytes());
        out[8..10].copy_from_slice(&self.reserved2.to_le_bytes());
        out[10..14].copy_from_slice(&self.offset.to_le_bytes());
        out
    }
}

impl InfoHeader {
    /// Parse from the 40 bytes at file offset 14.
    pub fn from_bytes(bytes: &[u8; INFO_HEADER_LEN]) -> Self {
        Self {
            size: u32_at(bytes, 0),
            width: i32_at(bytes, 4),
            height: i32_at(bytes, 8),
            planes: u16_at(bytes, 12),
            bit_count: u16_at(bytes, 14),
            compression: u32_at(bytes, 16),
            size_image: u32_at(bytes, 20),
            horizontal_res: i32_at(bytes, 24),
            vertical_res: i32_at(bytes, 28),
            colors_used: u32_at(bytes, 32),
            colors_important: u32_at(bytes, 36),
        }
    }

    pub fn to_bytes(&self) -> [u8; INFO_HEADER_LEN] {
        let mut out = [0u8; INFO_HEADER_LEN];
        out[0..4].copy_from_slice(&self.size.to_le_bytes());
        out[4..8].copy_from_slice(&self.width.to_le_bytes());
        out[8..12].copy_from_slice(&self.height.to_le_bytes());
        out[12..14].copy_from_slice(&self.planes.to_le_bytes());
        out[14..16].copy_from_slice(&self.bit_count.to_le_bytes());
        out[16..20].copy_from_slice(&self.compression.to_le_bytes());
        out[20..24].copy_from_slice(&self.size_image.to_le_bytes());
        out[24..28].copy_from_slice(&self.horizontal_res.to_le_bytes());
        out[28..32].copy_from_slice(&self.vertical_res.to_le_bytes());
        out[32..36].copy_from_slice(&self.colors_used.to_le_bytes());
        out[36..40].copy_from_slice(&self.colors_important.to_le_bytes());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_header_round_trips_through_bytes() {
        let header = FileHeader {
            signature: *b"BM",
            size: 54 + 48,
            reserved1: 0,
            reserved2: 0,
            offset: PIXEL_DATA_OFFSET,
        };
        let parsed = FileHeader::from_bytes(&header.to_bytes());
        assert_eq!(parsed, header);
    }

    #[test]
    fn info_header_round_trips_through_bytes() {
        let info = InfoHeader {
            size: INFO_HEADER_LEN as u32,
            width: 17,
            height: -3,
            planes: 1,
            bit_count: 24,
            compression: 0,
            size_image: 1020,
            horizontal_res: RESOLUTION_PPM,
            vertical_res: RESOLUTION_PPM,
            colors_used: 0,
            colors_important: 0,
        };
        let parsed = InfoHeader::from_bytes(&info.to_bytes());
        assert_eq!(parsed, info);
    }

    #[test]
    fn field_byte_offsets_match_the_wire_layout() {
        let mut raw = [0u8; FILE_HEADER_LEN];
        raw[0] = b'B';
        raw[1] = b'M';
        raw[10..14].copy_from_slice(&54u32.to_le_bytes());
        let header = FileHeader::from_bytes(&raw);
        assert_eq!(&header.signature, b"BM");
        assert_eq!(header.offset, 54);

        let mut raw = [0u8; INFO_HEADER_LEN];
        raw[4..8].copy_from_slice(&640i32.to_le_bytes());
        raw[8..12].copy_from_slice(&480i32.to_le_bytes());
        raw[14..16].copy_from_slice(&24u16.to_le_bytes());
        let info = InfoHeader::from_bytes(&raw);
        assert_eq!(info.width, 640);
        assert_eq!(info.height, 480);
        assert_eq!(info.bit_count, 24);
    }

    #[test]
    fn resolution_field_truncates_to_3779() {
        assert_eq!(RESOLUTION_PPM, 3779);
    }
}
