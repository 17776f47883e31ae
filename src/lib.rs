//! SSD1306 OLED Text Driver
//!
//! A driver for 128x64 SSD1306 OLED panels on a 4-wire SPI link, with a
//! built-in 5x8 font and a wrapping text layout.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - Configurable init sequence
//! - 5x8 printable-ASCII font, drawn straight into display RAM
//! - Line-wrapping string layout
//! - Scoped ownership of the SPI channel and control lines via [`Surface`]
//! - Linux spidev / gpio-cdev provider (with `linux` feature)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use ssd1306_text::{Builder, Display, Interface};
//!
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
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, dc, rst);
//! let config = match Builder::new().contrast(0x8F).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! if display.initialize(&mut delay).is_err() {
//!     return;
//! }
//! let _ = display.clear();
//! let _ = display.draw_string(0, 0, "Hello, OLED!");
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// SSD1306 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Button debouncing
pub mod debounce;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// 5x8 glyph table
pub mod font;
/// Hardware interface abstraction
pub mod interface;
/// Surface lifecycle and hardware acquisition
pub mod surface;
/// Text layout
pub mod text;

/// Linux spidev / gpio-cdev provider (requires `linux` feature)
#[cfg(feature = "linux")]
pub mod linux;

pub use config::{BUFFER_SIZE, Builder, Config, HEIGHT, PAGES, WIDTH};
pub use debounce::Debouncer;
pub use display::{Display, INIT_SEQUENCE_LEN, init_sequence};
pub use error::{BuilderError, Error, InitError, OpenError, OpenStage};
pub use interface::{DisplayInterface, Frame, Interface, InterfaceError, Mode, RESET_HOLD_MS};
pub use surface::{ControlLine, Hardware, Surface, SurfaceInterface, SurfaceOpenError};
pub use text::Cursor;
