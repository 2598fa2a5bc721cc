//! Constants for the IMAT binary container

/// Container header layout
pub mod header {
    /// Magic bytes at offset 0
    pub const MAGIC: &[u8; 4] = b"IMAT";
    /// Container version written at offset 4
    pub const VERSION: u32 = 1;
    /// Bits per channel written at offset 20
    pub const DEPTH: u32 = 8;
    /// Total header size in bytes
    pub const SIZE: usize = 24;
}

/// Channel counts per pixel mode
pub mod channels {
    pub const LUMA: u32 = 1;
    pub const RGB: u32 = 3;
    pub const RGBA: u32 = 4;
}
