//! Linux userspace hardware provider (requires `linux` feature)
//!
//! Opens the panel's SPI channel through spidev and its DC and reset lines
//! through the GPIO character device, using `linux-embedded-hal`.
//! The defaults match a Raspberry Pi wiring: `/dev/spidev0.0` (CE0), DC on
//! GPIO 25, reset on GPIO 24.
//!
//! ## Example
//!
//! ```rust,no_run
//! use linux_embedded_hal::Delay;
//! use ssd1306_text::linux::{LinuxConfig, LinuxHardware};
//! use ssd1306_text::{Config, Surface};
//!
//! let mut hardware = LinuxHardware::new(LinuxConfig::default());
//! let mut surface = match Surface::open(&mut hardware, Config::default(), &mut Delay) {
//!     Ok(surface) => surface,
//!     Err(_) => return,
//! };
//! let _ = surface.draw_string(0, 0, "Hello from spidev");
//! surface.close();
//! ```

use std::io;
use std::string::String;

use linux_embedded_hal::gpio_cdev::{self, Chip, LineRequestFlags};
use linux_embedded_hal::spidev::{SpiModeFlags, SpidevOptions};
use linux_embedded_hal::{CdevPin, SpidevDevice};

use crate::surface::{ControlLine, Hardware};

/// Where the panel is attached
#[derive(Clone, Debug)]
pub struct LinuxConfig {
    /// spidev node
    pub spi_path: String,
    /// SPI clock polarity/phase
    pub spi_mode: SpiModeFlags,
    /// Bits per SPI word
    pub bits_per_word: u8,
    /// SPI clock in Hz
    pub max_speed_hz: u32,
    /// GPIO character device
    pub gpio_chip: String,
    /// Line offset of the DC pin
    pub mode_select_line: u32,
    /// Line offset of the reset pin
    pub reset_line: u32,
    /// Consumer label shown by `gpioinfo`
    pub consumer: String,
}

impl Default for LinuxConfig {
    fn default() -> Self {
        Self {
            spi_path: "/dev/spidev0.0".into(),
            spi_mode: SpiModeFlags::SPI_MODE_0,
            bits_per_word: 8,
            max_speed_hz: 1_000_000,
            gpio_chip: "/dev/gpiochip0".into(),
            mode_select_line: 25,
            reset_line: 24,
            consumer: "ssd1306".into(),
        }
    }
}

/// Errors opening spidev or GPIO lines
#[derive(Debug)]
pub enum LinuxError {
    /// spidev open or configure failed
    Spi(io::Error),
    /// GPIO chip, line lookup or line request failed
    Gpio(gpio_cdev::Error),
}

impl From<gpio_cdev::Error> for LinuxError {
    fn from(e: gpio_cdev::Error) -> Self {
        Self::Gpio(e)
    }
}

impl core::fmt::Display for LinuxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "spidev: {e}"),
            Self::Gpio(e) => write!(f, "gpio: {e}"),
        }
    }
}

impl core::error::Error for LinuxError {}

/// [`Hardware`] provider backed by spidev and gpio-cdev
#[derive(Clone, Debug, Default)]
pub struct LinuxHardware {
    config: LinuxConfig,
}

impl LinuxHardware {
    /// Create a provider for the given wiring
    pub fn new(config: LinuxConfig) -> Self {
        Self { config }
    }

    /// Get the wiring
    pub fn config(&self) -> &LinuxConfig {
        &self.config
    }

    fn line_offset(&self, line: ControlLine) -> u32 {
        match line {
            ControlLine::ModeSelect => self.config.mode_select_line,
            ControlLine::Reset => self.config.reset_line,
        }
    }
}

impl Hardware for LinuxHardware {
    type Channel = SpidevDevice;
    type Line = CdevPin;
    type Error = LinuxError;

    fn open_serial_channel(&mut self) -> Result<SpidevDevice, LinuxError> {
        let mut spi = SpidevDevice::open(&self.config.spi_path)
            .map_err(|e| LinuxError::Spi(io::Error::other(e)))?;
        let options = SpidevOptions::new()
            .bits_per_word(self.config.bits_per_word)
            .max_speed_hz(self.config.max_speed_hz)
            .mode(self.config.spi_mode)
            .build();
        spi.configure(&options).map_err(LinuxError::Spi)?;
        log::debug!(
            "ssd1306: opened {} at {} Hz",
            self.config.spi_path,
            self.config.max_speed_hz
        );
        Ok(spi)
    }

    fn open_control_line(&mut self, line: ControlLine) -> Result<CdevPin, LinuxError> {
        let offset = self.line_offset(line);
        let mut chip = Chip::new(&self.config.gpio_chip)?;
        let handle = chip.get_line(offset)?.request(
            LineRequestFlags::OUTPUT,
            0,
            &self.config.consumer,
        )?;
        log::debug!("ssd1306: {line:?} on {} line {offset}", self.config.gpio_chip);
        Ok(CdevPin::new(handle)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wiring() {
        let hardware = LinuxHardware::default();
        let config = hardware.config();
        assert_eq!(config.spi_path, "/dev/spidev0.0");
        assert_eq!(config.bits_per_word, 8);
        assert_eq!(config.max_speed_hz, 1_000_000);
        assert_eq!(hardware.line_offset(ControlLine::ModeSelect), 25);
        assert_eq!(hardware.line_offset(ControlLine::Reset), 24);
    }

    #[test]
    fn test_missing_spidev_is_spi_error() {
        let mut hardware = LinuxHardware::new(LinuxConfig {
            spi_path: "/nonexistent/spidev9.9".into(),
            ..LinuxConfig::default()
        });
        assert!(matches!(
            hardware.open_serial_channel(),
            Err(LinuxError::Spi(_))
        ));
    }
}
