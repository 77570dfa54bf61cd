/// Raw sector layout constants

/// Sync pattern marking the start of a raw 2352-byte sector
pub const SYNC_HEADER: [u8; 12] = [
    0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00,
];

/// Offset of the mode byte within a raw sector
pub const MODE_OFFSET: usize = 15;

/// Number of bytes read from the first sector to detect the layout
pub const PROBE_SIZE: usize = 16;

/// User data carried by every sector, regardless of layout
pub const PAYLOAD_SIZE: usize = 2048;

/// Size of a raw sector: sync + address + mode + data + ECC
pub const RAW_SECTOR_SIZE: usize = 2352;

/// Size of a headerless Mode 2 sector: subheader + data + ECC
pub const HEADERLESS_SECTOR_SIZE: usize = 2336;

/// Largest sector size across all supported layouts
pub const MAX_SECTOR_SIZE: usize = RAW_SECTOR_SIZE;

/// Header skipped in a Mode 1 raw sector: sync (12) + address (3) + mode (1)
pub const MODE1_HEADER_SIZE: usize = 16;

/// Header skipped in a Mode 2 raw sector: sync (12) + address (3) + mode (1) + subheader (8)
pub const MODE2_HEADER_SIZE: usize = 24;

/// Header skipped in a headerless Mode 2 sector: subheader (8) only
pub const SUBHEADER_SIZE: usize = 8;
