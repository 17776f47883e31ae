//! Core display operations
//!
//! [`Display`] drives the SSD1306 controller protocol: the reset and init
//! sequence, addressing, raw RAM writes and clearing. Text rendering on top
//! of it lives in [`crate::text`].
//!
//! The controller is run in horizontal addressing mode over the full
//! 128x8-page window: every data byte lands at the write pointer, which then
//! moves one column right, wraps to column 0 of the next page after column
//! 127, and back to page 0 after page 7. The driver mirrors that pointer in
//! [`Display::cursor`].

use embedded_hal::delay::DelayNs;

use crate::command::{
    ADDRESSING_HORIZONTAL, CHARGE_PUMP, CHARGE_PUMP_ENABLE, COM_SCAN_NORMAL, COM_SCAN_REMAPPED,
    DISPLAY_FOLLOW_RAM, DISPLAY_OFF, DISPLAY_ON, INVERT_DISPLAY, NORMAL_DISPLAY,
    SEGMENT_REMAP_OFF, SEGMENT_REMAP_ON, SET_ADDRESSING_MODE, SET_CLOCK_DIVIDE, SET_COLUMN_HIGH,
    SET_COLUMN_LOW, SET_COM_PINS, SET_CONTRAST, SET_DISPLAY_OFFSET, SET_MULTIPLEX_RATIO,
    SET_PAGE_START, SET_PRECHARGE, SET_START_LINE, SET_VCOMH_DESELECT,
};
use crate::config::{BUFFER_SIZE, Config};
use crate::error::{Error, InitError};
use crate::interface::DisplayInterface;
use crate::text::Cursor;

pub(crate) type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Number of bytes in the init sequence
pub const INIT_SEQUENCE_LEN: usize = 25;

/// Build the init sequence for `config`
///
/// The order is fixed: the charge pump is enabled before the display is
/// switched on, and addressing is set to horizontal so that RAM can be
/// streamed without re-addressing.
pub fn init_sequence(config: &Config) -> [u8; INIT_SEQUENCE_LEN] {
    [
        DISPLAY_OFF,
        SET_CLOCK_DIVIDE,
        config.clock_divide,
        SET_MULTIPLEX_RATIO,
        config.multiplex_ratio,
        SET_DISPLAY_OFFSET,
        config.display_offset,
        SET_START_LINE | config.start_line,
        CHARGE_PUMP,
        CHARGE_PUMP_ENABLE,
        SET_ADDRESSING_MODE,
        ADDRESSING_HORIZONTAL,
        if config.segment_remap {
            SEGMENT_REMAP_ON
        } else {
            SEGMENT_REMAP_OFF
        },
        if config.com_scan_remapped {
            COM_SCAN_REMAPPED
        } else {
            COM_SCAN_NORMAL
        },
        SET_COM_PINS,
        config.com_pins,
        SET_CONTRAST,
        config.contrast,
        SET_PRECHARGE,
        config.precharge,
        SET_VCOMH_DESELECT,
        config.vcomh,
        DISPLAY_FOLLOW_RAM,
        if config.inverted {
            INVERT_DISPLAY
        } else {
            NORMAL_DISPLAY
        },
        DISPLAY_ON,
    ]
}

/// Core display driver for SSD1306
///
/// This struct provides low-level operations for the SSD1306 controller.
/// For text, see [`Display::draw_char`] and [`Display::draw_string`].
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Mirror of the controller's RAM write pointer
    cursor: Cursor,
    /// Whether the last init sequence completed
    is_initialized: bool,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// Nothing is sent until [`initialize`](Self::initialize) is called.
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            cursor: Cursor::ORIGIN,
            is_initialized: false,
        }
    }

    /// Perform hardware reset and send the init sequence
    ///
    /// Stops at the first failure; bytes after it are not sent and the
    /// display stays marked as not initialized.
    pub fn initialize<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), InitError<I::Error>> {
        self.is_initialized = false;
        self.interface.reset(delay).map_err(InitError::Reset)?;

        for (position, command) in init_sequence(&self.config).into_iter().enumerate() {
            self.interface
                .send_command(command)
                .map_err(|source| InitError::Command {
                    position,
                    command,
                    source,
                })?;
        }

        // Reset leaves the write pointer at the top-left corner
        self.cursor = Cursor::ORIGIN;
        self.is_initialized = true;
        log::debug!("ssd1306: initialized ({INIT_SEQUENCE_LEN} command bytes)");
        Ok(())
    }

    /// Whether the last call to [`initialize`](Self::initialize) completed
    pub fn is_initialized(&self) -> bool {
        self.is_initialized
    }

    /// Point the controller's RAM write pointer at column `x` of `page`
    ///
    /// Out-of-range coordinates wrap: `x` modulo 128, `page` modulo 8.
    pub fn set_cursor(&mut self, x: u8, page: u8) -> DisplayResult<I> {
        let cursor = Cursor::new(x, page);
        log::trace!("ssd1306: cursor -> ({}, {})", cursor.x(), cursor.page());
        self.send_command(SET_PAGE_START | cursor.page())?;
        self.send_command(SET_COLUMN_HIGH | (cursor.x() >> 4))?;
        self.send_command(SET_COLUMN_LOW | (cursor.x() & 0x0F))?;
        self.cursor = cursor;
        Ok(())
    }

    /// Write one byte of display RAM at the write pointer
    pub fn write_data(&mut self, data: u8) -> DisplayResult<I> {
        self.send_data(data).map_err(Error::Render)
    }

    /// Blank all of display RAM
    ///
    /// Streams 1024 zero bytes without re-addressing; the write pointer wraps
    /// through every position and ends where it started.
    pub fn clear(&mut self) -> DisplayResult<I> {
        self.blank().map_err(Error::Render)
    }

    /// Set contrast
    pub fn set_contrast(&mut self, contrast: u8) -> DisplayResult<I> {
        self.send_command(SET_CONTRAST)?;
        self.send_command(contrast)?;
        self.config.contrast = contrast;
        Ok(())
    }

    /// Switch between normal and inverted polarity
    pub fn set_inverted(&mut self, inverted: bool) -> DisplayResult<I> {
        self.send_command(if inverted {
            INVERT_DISPLAY
        } else {
            NORMAL_DISPLAY
        })?;
        self.config.inverted = inverted;
        Ok(())
    }

    /// Turn the panel on or put it to sleep
    ///
    /// Display RAM is kept while the panel is off.
    pub fn set_display_on(&mut self, on: bool) -> DisplayResult<I> {
        self.send_command(if on { DISPLAY_ON } else { DISPLAY_OFF })
    }

    /// Current position of the controller's write pointer
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Give back the interface
    pub fn release(self) -> I {
        self.interface
    }

    #[cfg(test)]
    pub(crate) fn interface(&self) -> &I {
        &self.interface
    }

    pub(crate) fn blank(&mut self) -> Result<(), I::Error> {
        for _ in 0..BUFFER_SIZE {
            self.send_data(0x00)?;
        }
        Ok(())
    }

    fn send_data(&mut self, data: u8) -> Result<(), I::Error> {
        self.interface.send_data(data)?;
        self.cursor = self.cursor.next_column();
        Ok(())
    }

    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Render)
    }
}
