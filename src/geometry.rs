/// Image geometry derived from the source length

/// Sector count and leftover bytes of a source image
///
/// Computed once after layout detection, before any payload is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageGeometry {
    /// Number of complete sectors in the image
    pub sector_count: u64,
    /// Bytes at the end of the image that do not form a complete sector
    pub tail_bytes: u64,
}

impl ImageGeometry {
    /// Derive the geometry for a source of `total_len` bytes at the given sector size
    pub fn for_length(total_len: u64, sector_size: u64) -> Self {
        ImageGeometry {
            sector_count: total_len / sector_size,
            tail_bytes: total_len % sector_size,
        }
    }

    /// Whether the image length is an exact multiple of the sector size
    pub fn is_aligned(&self) -> bool {
        self.tail_bytes == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aligned_image() {
        let geometry = ImageGeometry::for_length(2352 * 10, 2352);
        assert_eq!(geometry.sector_count, 10);
        assert_eq!(geometry.tail_bytes, 0);
        assert!(geometry.is_aligned());
    }

    #[test]
    fn test_misaligned_image() {
        let geometry = ImageGeometry::for_length(2336 * 4 + 100, 2336);
        assert_eq!(geometry.sector_count, 4);
        assert_eq!(geometry.tail_bytes, 100);
        assert!(!geometry.is_aligned());
    }

    #[test]
    fn test_image_shorter_than_one_sector() {
        let geometry = ImageGeometry::for_length(2000, 2352);
        assert_eq!(geometry.sector_count, 0);
        assert_eq!(geometry.tail_bytes, 2000);
    }

    #[test]
    fn test_empty_image() {
        let geometry = ImageGeometry::for_length(0, 2352);
        assert_eq!(geometry.sector_count, 0);
        assert_eq!(geometry.tail_bytes, 0);
        assert!(geometry.is_aligned());
    }
}
