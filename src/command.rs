//! SSD1306 command definitions
//!
//! This module defines the command bytes used to control the SSD1306
//! OLED controller. Commands and their parameters are both sent with the
//! DC pin low; only display RAM writes are sent with DC high.
//!
//! ## Command Structure
//!
//! Unlike controllers that switch to data mode for parameters, the SSD1306
//! takes every parameter byte as a further command-mode byte:
//! 1. Set DC low (command mode)
//! 2. Send command byte
//! 3. Send parameter bytes (if any), still in command mode
//!
//! Some commands carry their argument in the low bits of the opcode itself
//! ([`SET_START_LINE`], [`SET_PAGE_START`], the column nibble commands).
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1306_text::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//! // Contrast 0x7F
//! let _ = interface.send_command(command::SET_CONTRAST);
//! let _ = interface.send_command(0x7F);
//! ```

// Fundamental commands

/// Set contrast control command (0x81)
///
/// Requires 1 parameter byte: contrast, 0x00..=0xFF.
pub const SET_CONTRAST: u8 = 0x81;

/// Entire display follows RAM content (0xA4)
pub const DISPLAY_FOLLOW_RAM: u8 = 0xA4;

/// Normal polarity, RAM bit 1 = pixel on (0xA6)
pub const NORMAL_DISPLAY: u8 = 0xA6;

/// Inverted polarity, RAM bit 0 = pixel on (0xA7)
pub const INVERT_DISPLAY: u8 = 0xA7;

/// Display off, sleep mode (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on, normal mode (0xAF)
///
/// The charge pump must already be enabled or the panel stays dark.
pub const DISPLAY_ON: u8 = 0xAF;

// Addressing commands

/// Set memory addressing mode command (0x20)
///
/// Requires 1 parameter byte, see [`ADDRESSING_HORIZONTAL`].
pub const SET_ADDRESSING_MODE: u8 = 0x20;

/// Horizontal addressing: column pointer wraps into the next page
pub const ADDRESSING_HORIZONTAL: u8 = 0x00;

/// Set page start address (0xB0..=0xB7)
///
/// OR the page number (0..=7) into the low three bits.
pub const SET_PAGE_START: u8 = 0xB0;

/// Set higher column start nibble (0x10..=0x1F)
///
/// OR the high nibble of the column into the low four bits.
pub const SET_COLUMN_HIGH: u8 = 0x10;

/// Set lower column start nibble (0x00..=0x0F)
///
/// OR the low nibble of the column into the low four bits.
pub const SET_COLUMN_LOW: u8 = 0x00;

// Hardware configuration commands

/// Set display start line (0x40..=0x7F)
///
/// OR the RAM start line (0..=63) into the low six bits.
pub const SET_START_LINE: u8 = 0x40;

/// Segment remap: column 0 mapped to SEG0 (0xA0)
pub const SEGMENT_REMAP_OFF: u8 = 0xA0;

/// Segment remap: column 127 mapped to SEG0 (0xA1)
pub const SEGMENT_REMAP_ON: u8 = 0xA1;

/// Set multiplex ratio command (0xA8)
///
/// Requires 1 parameter byte: ratio - 1, 15..=63.
pub const SET_MULTIPLEX_RATIO: u8 = 0xA8;

/// COM output scan from COM0 to COM[N-1] (0xC0)
pub const COM_SCAN_NORMAL: u8 = 0xC0;

/// COM output scan from COM[N-1] to COM0 (0xC8)
pub const COM_SCAN_REMAPPED: u8 = 0xC8;

/// Set display offset command (0xD3)
///
/// Requires 1 parameter byte: vertical shift, 0..=63.
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// Set COM pins hardware configuration command (0xDA)
///
/// Requires 1 parameter byte; 0x12 selects the alternative layout used by
/// 128x64 panels.
pub const SET_COM_PINS: u8 = 0xDA;

// Timing and driving scheme commands

/// Set display clock divide ratio / oscillator frequency command (0xD5)
///
/// Requires 1 parameter byte: oscillator in the high nibble, divide ratio - 1
/// in the low nibble.
pub const SET_CLOCK_DIVIDE: u8 = 0xD5;

/// Set pre-charge period command (0xD9)
///
/// Requires 1 parameter byte: phase 2 in the high nibble, phase 1 in the low
/// nibble, both in DCLKs.
pub const SET_PRECHARGE: u8 = 0xD9;

/// Set VCOMH deselect level command (0xDB)
///
/// Requires 1 parameter byte.
pub const SET_VCOMH_DESELECT: u8 = 0xDB;

// Charge pump

/// Charge pump setting command (0x8D)
///
/// Requires 1 parameter byte: [`CHARGE_PUMP_ENABLE`] (0x10 disables).
pub const CHARGE_PUMP: u8 = 0x8D;

/// Enable the internal charge pump
pub const CHARGE_PUMP_ENABLE: u8 = 0x14;

