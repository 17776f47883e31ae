//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for talking to the SSD1306 controller over a 4-wire SPI link.
//!
//! ## Hardware Requirements
//!
//! The SSD1306 in SPI mode requires:
//! - SPI bus (MOSI + SCK, CS handled by the [`SpiDevice`])
//! - 2 GPIO pins:
//!   - **DC**: Data/Command select (output, low = command, high = data)
//!   - **RST**: Reset (output, active low)
//!
//! Every byte is its own transaction: the DC line is driven to the frame's
//! [`Mode`] and only then is the byte written. The DC line keeps its level
//! until the next frame changes it.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use ssd1306_text::{DisplayInterface, Frame, Interface};
//! # use core::convert::Infallible;
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
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//!
//! // Display on
//! let _ = interface.send(Frame::command(0xAF));
//!
//! // One column of pixels
//! let _ = interface.send_data(0x7F);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Minimum time the reset line is held low during a hardware reset
pub const RESET_HOLD_MS: u32 = 10;

/// Level of the DC line while a byte is transferred
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// DC low, the byte is a controller command or command parameter
    Command,
    /// DC high, the byte is written to display RAM
    Data,
}

/// A single byte tagged with the mode it is sent in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    /// DC level for this byte
    pub mode: Mode,
    /// Payload byte
    pub byte: u8,
}

impl Frame {
    /// Command-mode frame
    pub const fn command(byte: u8) -> Self {
        Self {
            mode: Mode::Command,
            byte,
        }
    }

    /// Data-mode frame
    pub const fn data(byte: u8) -> Self {
        Self {
            mode: Mode::Data,
            byte,
        }
    }
}

/// Trait for the byte transport to an SSD1306 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation that satisfies embedded-hal traits, and
/// letting tests substitute a recording transport.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. Implementations
/// must not buffer: a successful [`send`](DisplayInterface::send) means the
/// byte has been clocked out.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send one frame to the controller
    ///
    /// The implementation must:
    /// 1. Drive DC to the frame's mode (low for command, high for data)
    /// 2. Write exactly the one byte over SPI
    ///
    /// # Errors
    ///
    /// Returns an error if the DC line or the SPI write fails.
    fn send(&mut self, frame: Frame) -> InterfaceResult<(), Self::Error>;

    /// Perform hardware reset
    ///
    /// The implementation must:
    /// 1. Set RST pin low
    /// 2. Wait at least [`RESET_HOLD_MS`]
    /// 3. Set RST pin high
    ///
    /// # Errors
    ///
    /// Returns an error if the reset line cannot be driven.
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;

    /// Send a command byte (DC low)
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.send(Frame::command(command))
    }

    /// Send a data byte (DC high)
    fn send_data(&mut self, data: u8) -> InterfaceResult<(), Self::Error> {
        self.send(Frame::data(data))
    }
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Hardware interface implementation for SSD1306
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI and GPIO traits.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
pub struct Interface<SPI, DC, RST> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
}

impl<SPI, DC, RST> Interface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI device (must implement [`SpiDevice`])
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low)
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        Self { spi, dc, rst }
    }

    /// Give back the SPI device and both pins
    pub fn release(self) -> (SPI, DC, RST) {
        (self.spi, self.dc, self.rst)
    }
}

impl<SPI, DC, RST, PinErr> DisplayInterface for Interface<SPI, DC, RST>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send(&mut self, frame: Frame) -> InterfaceResult<(), Self::Error> {
        let dc = match frame.mode {
            Mode::Command => self.dc.set_low(),
            Mode::Data => self.dc.set_high(),
        };
        dc.map_err(InterfaceError::Pin)?;
        self.spi
            .write(&[frame.byte])
            .map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        self.rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_HOLD_MS);
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! Hand-rolled embedded-hal doubles shared by the unit tests.

    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use embedded_hal::delay::DelayNs;
    use embedded_hal::digital::{self, OutputPin};
    use embedded_hal::spi::{self, Operation, SpiDevice};

    use super::{DisplayInterface, Frame, Mode};

    /// Everything the doubles observe, in order
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Event {
        Dc(bool),
        Rst(bool),
        Write(Vec<u8>),
        DelayNs(u32),
    }

    pub type Log = Rc<RefCell<Vec<Event>>>;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MockError;

    impl core::fmt::Display for MockError {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            write!(f, "mock error")
        }
    }

    impl digital::Error for MockError {
        fn kind(&self) -> digital::ErrorKind {
            digital::ErrorKind::Other
        }
    }

    impl spi::Error for MockError {
        fn kind(&self) -> spi::ErrorKind {
            spi::ErrorKind::Other
        }
    }

    #[derive(Debug)]
    pub struct MockSpi {
        pub log: Log,
        pub fail: bool,
    }

    impl spi::ErrorType for MockSpi {
        type Error = MockError;
    }

    impl SpiDevice for MockSpi {
        fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), MockError> {
            if self.fail {
                return Err(MockError);
            }
            for op in operations {
                if let Operation::Write(bytes) = op {
                    self.log.borrow_mut().push(Event::Write(bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum PinRole {
        Dc,
        Rst,
    }

    #[derive(Debug)]
    pub struct MockPin {
        pub role: PinRole,
        pub log: Log,
        pub fail: bool,
    }

    impl MockPin {
        fn record(&self, high: bool) -> Result<(), MockError> {
            if self.fail {
                return Err(MockError);
            }
            let event = match self.role {
                PinRole::Dc => Event::Dc(high),
                PinRole::Rst => Event::Rst(high),
            };
            self.log.borrow_mut().push(event);
            Ok(())
        }
    }

    impl digital::ErrorType for MockPin {
        type Error = MockError;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), MockError> {
            self.record(false)
        }
        fn set_high(&mut self) -> Result<(), MockError> {
            self.record(true)
        }
    }

    /// Delay that only records what was asked of it
    pub struct MockDelay {
        pub log: Log,
    }

    /// Delay that returns immediately
    pub struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    /// Transport that records frames, failing at a chosen frame index
    #[derive(Debug, Default)]
    pub struct MockInterface {
        pub frames: Vec<Frame>,
        pub resets: usize,
        pub fail_at: Option<usize>,
        pub fail_reset: bool,
    }

    impl MockInterface {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing_at(index: usize) -> Self {
            Self {
                fail_at: Some(index),
                ..Self::default()
            }
        }

        pub fn commands(&self) -> Vec<u8> {
            self.frames
                .iter()
                .filter(|f| f.mode == Mode::Command)
                .map(|f| f.byte)
                .collect()
        }

        pub fn data(&self) -> Vec<u8> {
            self.frames
                .iter()
                .filter(|f| f.mode == Mode::Data)
                .map(|f| f.byte)
                .collect()
        }
    }

    impl DisplayInterface for MockInterface {
        type Error = MockError;

        fn send(&mut self, frame: Frame) -> Result<(), MockError> {
            if self.fail_at == Some(self.frames.len()) {
                return Err(MockError);
            }
            self.frames.push(frame);
            Ok(())
        }

        fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), MockError> {
            if self.fail_reset {
                return Err(MockError);
            }
            self.resets += 1;
            Ok(())
        }
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.log.borrow_mut().push(Event::DelayNs(ns));
        }

        fn delay_ms(&mut self, ms: u32) {
            self.delay_ns(ms.saturating_mul(1_000_000));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::*;
    use super::*;
    use alloc::vec;

    fn parts(log: &Log) -> (MockSpi, MockPin, MockPin) {
        (
            MockSpi {
                log: log.clone(),
                fail: false,
            },
            MockPin {
                role: PinRole::Dc,
                log: log.clone(),
                fail: false,
            },
            MockPin {
                role: PinRole::Rst,
                log: log.clone(),
                fail: false,
            },
        )
    }

    #[test]
    fn test_command_frame_drives_dc_low_before_write() {
        let log = Log::default();
        let (spi, dc, rst) = parts(&log);
        let mut interface = Interface::new(spi, dc, rst);

        interface.send_command(0xAF).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![Event::Dc(false), Event::Write(vec![0xAF])]
        );
    }

    #[test]
    fn test_data_frame_drives_dc_high_before_write() {
        let log = Log::default();
        let (spi, dc, rst) = parts(&log);
        let mut interface = Interface::new(spi, dc, rst);

        interface.send(Frame::data(0x7F)).unwrap();
        interface.send(Frame::command(0xB0)).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                Event::Dc(true),
                Event::Write(vec![0x7F]),
                Event::Dc(false),
                Event::Write(vec![0xB0]),
            ]
        );
    }

    #[test]
    fn test_dc_failure_skips_spi_write() {
        let log = Log::default();
        let (spi, mut dc, rst) = parts(&log);
        dc.fail = true;
        let mut interface = Interface::new(spi, dc, rst);

        let result = interface.send_data(0x01);

        assert!(matches!(result, Err(InterfaceError::Pin(MockError))));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_spi_failure_is_reported() {
        let log = Log::default();
        let (mut spi, dc, rst) = parts(&log);
        spi.fail = true;
        let mut interface = Interface::new(spi, dc, rst);

        let result = interface.send_command(0xAE);

        assert!(matches!(result, Err(InterfaceError::Spi(MockError))));
    }

    #[test]
    fn test_reset_holds_line_low_for_ten_ms() {
        let log = Log::default();
        let (spi, dc, rst) = parts(&log);
        let mut interface = Interface::new(spi, dc, rst);
        let mut delay = MockDelay { log: log.clone() };

        interface.reset(&mut delay).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                Event::Rst(false),
                Event::DelayNs(RESET_HOLD_MS * 1_000_000),
                Event::Rst(true),
            ]
        );
    }

    #[test]
    fn test_reset_failure_is_reported() {
        let log = Log::default();
        let (spi, dc, mut rst) = parts(&log);
        rst.fail = true;
        let mut interface = Interface::new(spi, dc, rst);
        let mut delay = MockDelay { log: log.clone() };

        let result = interface.reset(&mut delay);

        assert!(matches!(result, Err(InterfaceError::Pin(MockError))));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_release_returns_parts() {
        let log = Log::default();
        let (spi, dc, rst) = parts(&log);
        let interface = Interface::new(spi, dc, rst);

        let (_spi, dc, rst) = interface.release();

        assert_eq!(dc.role, PinRole::Dc);
        assert_eq!(rst.role, PinRole::Rst);
    }
}
