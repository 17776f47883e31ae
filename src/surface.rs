//! Display surface lifecycle
//!
//! A [`Surface`] owns everything a running panel needs: the SPI channel, the
//! DC and reset lines, and the initialized [`Display`] built on them. Handles
//! come from a [`Hardware`] provider, which is where platform code (spidev,
//! gpio character devices, a HAL's peripherals) plugs in.
//!
//! [`Surface::open`] acquires the channel, then the DC line, then the reset
//! line, runs the init sequence and blanks RAM. If any step fails, every
//! handle acquired so far is dropped, last acquired first, before the error
//! is returned. [`Surface::close`] releases the handles in the same order.
//!
//! ## Example
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use ssd1306_text::{Config, ControlLine, Hardware, Surface};
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
//! struct Board;
//!
//! impl Hardware for Board {
//!     type Channel = MockSpi;
//!     type Line = MockPin;
//!     type Error = Infallible;
//!
//!     fn open_serial_channel(&mut self) -> Result<MockSpi, Infallible> {
//!         Ok(MockSpi)
//!     }
//!
//!     fn open_control_line(&mut self, _line: ControlLine) -> Result<MockPin, Infallible> {
//!         Ok(MockPin)
//!     }
//! }
//!
//! let mut surface = match Surface::open(&mut Board, Config::default(), &mut MockDelay) {
//!     Ok(surface) => surface,
//!     Err(_) => return,
//! };
//! let _ = surface.draw_string(0, 0, "Hello");
//! surface.close();
//! ```

use core::fmt::Debug;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::{self, SpiDevice};

use crate::config::Config;
use crate::display::{Display, DisplayResult};
use crate::error::{OpenError, OpenStage};
use crate::interface::{Interface, InterfaceError};
use crate::text::Cursor;

/// Which control line is being requested
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlLine {
    /// Data/Command select
    ModeSelect,
    /// Active-low reset
    Reset,
}

/// Source of the hardware handles a [`Surface`] runs on
///
/// Handles are released by dropping them. Lines should be returned as
/// outputs driven low.
pub trait Hardware {
    /// SPI channel to the controller
    type Channel: SpiDevice;
    /// GPIO output used for DC and reset
    type Line: OutputPin;
    /// Acquisition error
    type Error: Debug;

    /// Acquire and configure the SPI channel
    fn open_serial_channel(&mut self) -> Result<Self::Channel, Self::Error>;

    /// Acquire a control line as an output, initially low
    fn open_control_line(&mut self, line: ControlLine) -> Result<Self::Line, Self::Error>;
}

/// Transport built from a provider's handles
pub type SurfaceInterface<H> =
    Interface<<H as Hardware>::Channel, <H as Hardware>::Line, <H as Hardware>::Line>;

/// Transport error of a [`SurfaceInterface`]
pub type TransportError<H> = InterfaceError<
    <<H as Hardware>::Channel as spi::ErrorType>::Error,
    <<H as Hardware>::Line as digital::ErrorType>::Error,
>;

/// Error returned by [`Surface::open`]
pub type SurfaceOpenError<H> = OpenError<<H as Hardware>::Error, TransportError<H>>;

/// An initialized, blank display and exclusive ownership of its hardware
pub struct Surface<H: Hardware> {
    display: Display<SurfaceInterface<H>>,
}

impl<H: Hardware> Surface<H> {
    /// Acquire the hardware, initialize the controller and blank it
    ///
    /// On failure nothing stays claimed: handles acquired before the failing
    /// stage are released in reverse order and the stage is reported through
    /// [`OpenError::stage`].
    pub fn open<D: DelayNs>(
        hardware: &mut H,
        config: Config,
        delay: &mut D,
    ) -> Result<Self, SurfaceOpenError<H>> {
        let channel = hardware
            .open_serial_channel()
            .map_err(|source| acquire_failed(OpenStage::Channel, source))?;
        let dc = hardware
            .open_control_line(ControlLine::ModeSelect)
            .map_err(|source| acquire_failed(OpenStage::ModeSelectLine, source))?;
        let rst = hardware
            .open_control_line(ControlLine::Reset)
            .map_err(|source| acquire_failed(OpenStage::ResetLine, source))?;
        log::debug!("ssd1306: channel and control lines acquired");

        let mut display = Display::new(Interface::new(channel, dc, rst), config);
        if let Err(e) = display.initialize(delay) {
            log::warn!("ssd1306: {e}, releasing hardware");
            release(display);
            return Err(OpenError::Initialize(e));
        }
        if let Err(e) = display.blank() {
            log::warn!("ssd1306: clear failed ({e}), releasing hardware");
            release(display);
            return Err(OpenError::Clear(e));
        }

        Ok(Self { display })
    }

    /// Release the hardware
    ///
    /// Nothing is sent to the panel; it keeps showing its last contents until
    /// it loses power or is reset.
    pub fn close(self) {
        release(self.display);
        log::debug!("ssd1306: surface closed");
    }

    /// Render a character, see [`Display::draw_char`]
    pub fn draw_char(&mut self, x: u8, page: u8, ch: char) -> DisplayResult<SurfaceInterface<H>> {
        self.display.draw_char(x, page, ch)
    }

    /// Render a string, see [`Display::draw_string`]
    pub fn draw_string(&mut self, x: u8, page: u8, s: &str) -> DisplayResult<SurfaceInterface<H>> {
        self.display.draw_string(x, page, s)
    }

    /// Render a string at the write pointer, see [`Display::print`]
    pub fn print(&mut self, s: &str) -> DisplayResult<SurfaceInterface<H>> {
        self.display.print(s)
    }

    /// Blank the panel
    pub fn clear(&mut self) -> DisplayResult<SurfaceInterface<H>> {
        self.display.clear()
    }

    /// Current write pointer
    pub fn cursor(&self) -> Cursor {
        self.display.cursor()
    }

    /// The underlying display, for addressing and raw RAM writes
    pub fn display(&mut self) -> &mut Display<SurfaceInterface<H>> {
        &mut self.display
    }
}

fn acquire_failed<H: Debug, E>(stage: OpenStage, source: H) -> OpenError<H, E> {
    log::warn!("ssd1306: failed to acquire {stage}: {source:?}");
    OpenError::Acquire { stage, source }
}

/// Drop the handles, last acquired first
fn release<SPI, DC, RST>(display: Display<Interface<SPI, DC, RST>>)
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    Interface<SPI, DC, RST>: crate::interface::DisplayInterface,
{
    let (channel, dc, rst) = display.release().release();
    drop(rst);
    drop(dc);
    drop(channel);
}
