/// Maximum texture edge length accepted at initialization.
pub const MAX_TEXTURE_SIZE: u32 = 4096;

/// Default texture edge length.
pub const DEFAULT_TEXTURE_SIZE: u32 = 128;

/// Maximum brush radius input accepted at configuration time.
pub const MAX_BRUSH_RADIUS: u32 = 1024;
