//! Display configuration types and builder

pub use crate::error::BuilderError;

/// Panel width in columns (segments)
pub const WIDTH: u8 = 128;

/// Number of 8-row pages
pub const PAGES: u8 = 8;

/// Panel height in rows
pub const HEIGHT: u8 = PAGES * 8;

/// Number of bytes in display RAM (one byte per column per page)
pub const BUFFER_SIZE: usize = WIDTH as usize * PAGES as usize;

/// Display configuration
///
/// This struct holds the parameter bytes of the SSD1306 init sequence.
/// Use `Builder` to create a Config; the defaults drive a 128x64 panel with
/// the internal charge pump.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Oscillator frequency (high nibble) and clock divide ratio - 1 (low nibble)
    pub clock_divide: u8,
    /// Multiplex ratio - 1
    pub multiplex_ratio: u8,
    /// Vertical display offset
    pub display_offset: u8,
    /// RAM line shown on the top row
    pub start_line: u8,
    /// Map column 127 to SEG0 (mirrors horizontally)
    pub segment_remap: bool,
    /// Scan COM[N-1] to COM0 (mirrors vertically)
    pub com_scan_remapped: bool,
    /// COM pins hardware configuration byte
    pub com_pins: u8,
    /// Contrast
    pub contrast: u8,
    /// Pre-charge period byte
    pub precharge: u8,
    /// VCOMH deselect level byte
    pub vcomh: u8,
    /// Start with inverted polarity
    pub inverted: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Default oscillator, divide ratio 1
            clock_divide: 0x80,
            // 1/64 duty
            multiplex_ratio: 0x3F,
            display_offset: 0x00,
            start_line: 0,
            segment_remap: true,
            com_scan_remapped: true,
            // Alternative COM pin layout, no left/right remap
            com_pins: 0x12,
            contrast: 0xCF,
            // Phase 1: 15 DCLKs, phase 2: 1 DCLK
            precharge: 0xF1,
            // ~0.77 x VCC
            vcomh: 0x40,
            inverted: false,
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use ssd1306_text::Builder;
///
/// let config = match Builder::new().contrast(0x7F).inverted(true).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.contrast, 0x7F);
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set oscillator frequency / clock divide byte
    pub fn clock_divide(mut self, value: u8) -> Self {
        self.config.clock_divide = value;
        self
    }

    /// Set multiplex ratio (mux - 1, 15..=63)
    pub fn multiplex_ratio(mut self, value: u8) -> Self {
        self.config.multiplex_ratio = value;
        self
    }

    /// Set vertical display offset (0..=63)
    pub fn display_offset(mut self, value: u8) -> Self {
        self.config.display_offset = value;
        self
    }

    /// Set display start line (0..=63)
    pub fn start_line(mut self, value: u8) -> Self {
        self.config.start_line = value;
        self
    }

    /// Set whether column 127 maps to SEG0
    pub fn segment_remap(mut self, value: bool) -> Self {
        self.config.segment_remap = value;
        self
    }

    /// Set whether COM lines are scanned in reverse
    pub fn com_scan_remapped(mut self, value: bool) -> Self {
        self.config.com_scan_remapped = value;
        self
    }

    /// Set COM pins hardware configuration byte
    ///
    /// 128x32 panels usually want 0x02.
    pub fn com_pins(mut self, value: u8) -> Self {
        self.config.com_pins = value;
        self
    }

    /// Set contrast
    pub fn contrast(mut self, value: u8) -> Self {
        self.config.contrast = value;
        self
    }

    /// Set pre-charge period byte
    pub fn precharge(mut self, value: u8) -> Self {
        self.config.precharge = value;
        self
    }

    /// Set VCOMH deselect level byte
    pub fn vcomh(mut self, value: u8) -> Self {
        self.config.vcomh = value;
        self
    }

    /// Start with inverted polarity
    pub fn inverted(mut self, value: bool) -> Self {
        self.config.inverted = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns a [`BuilderError`] if a parameter is outside the range the
    /// controller accepts.
    pub fn build(self) -> Result<Config, BuilderError> {
        let config = self.config;
        if !(15..=63).contains(&config.multiplex_ratio) {
            return Err(BuilderError::InvalidMultiplexRatio(config.multiplex_ratio));
        }
        if config.display_offset > 63 {
            return Err(BuilderError::InvalidDisplayOffset(config.display_offset));
        }
        if config.start_line > 63 {
            return Err(BuilderError::InvalidStartLine(config.start_line));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_build_matches_default_config() {
        assert_eq!(Builder::new().build(), Ok(Config::default()));
    }

    #[test]
    fn test_geometry() {
        assert_eq!(HEIGHT, 64);
        assert_eq!(BUFFER_SIZE, 1024);
    }

    #[test]
    fn test_multiplex_ratio_bounds() {
        assert!(Builder::new().multiplex_ratio(15).build().is_ok());
        assert_eq!(
            Builder::new().multiplex_ratio(14).build(),
            Err(BuilderError::InvalidMultiplexRatio(14))
        );
        assert_eq!(
            Builder::new().multiplex_ratio(64).build(),
            Err(BuilderError::InvalidMultiplexRatio(64))
        );
    }

    #[test]
    fn test_offset_and_start_line_bounds() {
        assert!(Builder::new().display_offset(63).start_line(63).build().is_ok());
        assert_eq!(
            Builder::new().display_offset(64).build(),
            Err(BuilderError::InvalidDisplayOffset(64))
        );
        assert_eq!(
            Builder::new().start_line(64).build(),
            Err(BuilderError::InvalidStartLine(64))
        );
    }

    #[test]
    fn test_setters_are_applied() {
        let config = Builder::new()
            .clock_divide(0xF0)
            .com_pins(0x02)
            .segment_remap(false)
            .com_scan_remapped(false)
            .precharge(0x22)
            .vcomh(0x20)
            .build()
            .unwrap();
        assert_eq!(config.clock_divide, 0xF0);
        assert_eq!(config.com_pins, 0x02);
        assert!(!config.segment_remap);
        assert!(!config.com_scan_remapped);
        assert_eq!(config.precharge, 0x22);
        assert_eq!(config.vcomh, 0x20);
    }
}
