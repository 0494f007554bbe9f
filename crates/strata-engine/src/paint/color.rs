use std::fmt;

/// Opaque sRGB color as stored in raster surfaces.
///
/// Shapes never hold a `Color`; they carry the caller's descriptor string and
/// surfaces resolve it with [`Color::parse`] when it is applied.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Named palette understood by [`Color::parse`], keyed by canonical name.
const NAMED: [(&str, Color); 13] = [
    ("black", Color::from_rgb_u32(0x000000)),
    ("blue", Color::from_rgb_u32(0x0000ff)),
    ("cyan", Color::from_rgb_u32(0x00ffff)),
    ("darkgray", Color::from_rgb_u32(0x595959)),
    ("gray", Color::from_rgb_u32(0x999999)),
    ("green", Color::from_rgb_u32(0x00ff00)),
    ("lightgray", Color::from_rgb_u32(0xbfbfbf)),
    ("magenta", Color::from_rgb_u32(0xff00ff)),
    ("orange", Color::from_rgb_u32(0xffc800)),
    ("pink", Color::from_rgb_u32(0xffafaf)),
    ("red", Color::from_rgb_u32(0xff0000)),
    ("white", Color::from_rgb_u32(0xffffff)),
    ("yellow", Color::from_rgb_u32(0xffff00)),
];

impl Color {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Builds a color from a packed `0xRRGGBB` value. Bits above 24 are ignored.
    #[inline]
    pub const fn from_rgb_u32(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// RGBA bytes with full opacity.
    #[inline]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 0xff]
    }

    /// Resolves a color descriptor.
    ///
    /// Accepts `#rrggbb` hex or a palette name. Names are matched
    /// case-insensitively with spaces, `_` and `-` ignored, so `"DARK_GRAY"`,
    /// `"dark gray"` and `"darkGray"` are the same color.
    pub fn parse(descriptor: &str) -> Result<Self, ColorParseError> {
        let s = descriptor.trim();

        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(ColorParseError::new(descriptor));
            }
            return u32::from_str_radix(hex, 16)
                .map(Color::from_rgb_u32)
                .map_err(|_| ColorParseError::new(descriptor));
        }

        let canonical: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        NAMED
            .iter()
            .find(|(name, _)| *name == canonical)
            .map(|&(_, color)| color)
            .ok_or_else(|| ColorParseError::new(descriptor))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A color descriptor that is neither a palette name nor `#rrggbb` hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError {
    pub descriptor: String,
}

impl ColorParseError {
    fn new(descriptor: &str) -> Self {
        Self { descriptor: descriptor.to_string() }
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognised color descriptor {:?}", self.descriptor)
    }
}

impl std::error::Error for ColorParseError {}
