//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`]),
//! controller initialization ([`InitError`]), display operations ([`Error`]) and
//! surface acquisition ([`OpenError`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`InitError`] - Reset or init sequence aborted
//! - [`Error`] - Runtime errors during display operations
//! - [`OpenError`] - A [`Surface`](crate::surface::Surface) could not be brought up
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! Every hardware failure is fatal to the operation in progress. Nothing is
//! retried: a byte that did not reach the controller leaves its addressing
//! state unknown, so the caller decides whether to re-open the surface.
//!
//! ## Example
//!
//! ```
//! use ssd1306_text::{Builder, BuilderError};
//!
//! // Multiplex ratio above 64MUX
//! let result = Builder::new().multiplex_ratio(64).build();
//! assert!(matches!(result, Err(BuilderError::InvalidMultiplexRatio(64))));
//! ```

use core::fmt::Debug;

use crate::interface::DisplayInterface;

/// Failure while resetting or configuring the controller
///
/// Once this is returned the controller is in an unknown, partially
/// configured state; commands after the failing one were not sent.
#[derive(Debug)]
pub enum InitError<E> {
    /// The reset line could not be driven
    Reset(E),
    /// A byte of the init sequence could not be sent
    Command {
        /// Zero-based position of the failing byte in the init sequence
        position: usize,
        /// The byte that failed
        command: u8,
        /// Underlying transport error
        source: E,
    },
}

impl<E: Debug> core::fmt::Display for InitError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Reset(e) => write!(f, "Hardware reset failed: {e:?}"),
            Self::Command {
                position,
                command,
                source,
            } => write!(
                f,
                "Init command 0x{command:02X} at position {position} failed: {source:?}"
            ),
        }
    }
}

impl<E: Debug> core::error::Error for InitError<E> {}

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
pub enum Error<I: DisplayInterface> {
    /// Initialization failed
    Init(InitError<I::Error>),
    /// Transport failure while addressing, drawing or clearing
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    Render(I::Error),
}

impl<I: DisplayInterface> From<InitError<I::Error>> for Error<I> {
    fn from(e: InitError<I::Error>) -> Self {
        Self::Init(e)
    }
}

impl<I: DisplayInterface> Debug for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Init(e) => f.debug_tuple("Init").field(e).finish(),
            Self::Render(e) => f.debug_tuple("Render").field(e).finish(),
        }
    }
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Init(e) => write!(f, "{e}"),
            Self::Render(e) => write!(f, "Render error: {e:?}"),
        }
    }
}

impl<I: DisplayInterface> core::error::Error for Error<I> {}

/// Step of [`Surface::open`](crate::surface::Surface::open) that failed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenStage {
    /// Acquiring the SPI channel
    Channel,
    /// Acquiring the DC (mode-select) line
    ModeSelectLine,
    /// Acquiring the reset line
    ResetLine,
    /// Reset and init sequence
    Initialize,
    /// Blanking display RAM
    Clear,
}

impl core::fmt::Display for OpenStage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Channel => "serial channel",
            Self::ModeSelectLine => "mode-select line",
            Self::ResetLine => "reset line",
            Self::Initialize => "initialize",
            Self::Clear => "clear",
        };
        f.write_str(name)
    }
}

/// Errors from bringing up a surface
///
/// Whatever was acquired before the failing stage has already been released
/// when this is returned.
///
/// * `H` - error type of the [`Hardware`](crate::surface::Hardware) provider
/// * `E` - error type of the transport built from the acquired handles
#[derive(Debug)]
pub enum OpenError<H, E> {
    /// A hardware resource could not be acquired
    Acquire {
        /// Which resource
        stage: OpenStage,
        /// Provider error
        source: H,
    },
    /// Reset or init sequence failed
    Initialize(InitError<E>),
    /// Blanking display RAM failed
    Clear(E),
}

impl<H, E> OpenError<H, E> {
    /// The stage that failed
    pub fn stage(&self) -> OpenStage {
        match self {
            Self::Acquire { stage, .. } => *stage,
            Self::Initialize(_) => OpenStage::Initialize,
            Self::Clear(_) => OpenStage::Clear,
        }
    }
}

impl<H: Debug, E: Debug> core::fmt::Display for OpenError<H, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Acquire { stage, source } => {
                write!(f, "Failed to acquire {stage}: {source:?}")
            }
            Self::Initialize(e) => write!(f, "{e}"),
            Self::Clear(e) => write!(f, "Failed to clear display: {e:?}"),
        }
    }
}

impl<H: Debug, E: Debug> core::error::Error for OpenError<H, E> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Multiplex ratio (mux - 1) outside 15..=63
    InvalidMultiplexRatio(u8),
    /// Display offset outside 0..=63
    InvalidDisplayOffset(u8),
    /// Start line outside 0..=63
    InvalidStartLine(u8),
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidMultiplexRatio(v) => {
                write!(f, "Invalid multiplex ratio {v} (expected 15..=63)")
            }
            Self::InvalidDisplayOffset(v) => {
                write!(f, "Invalid display offset {v} (expected 0..=63)")
            }
            Self::InvalidStartLine(v) => write!(f, "Invalid start line {v} (expected 0..=63)"),
        }
    }
}

impl core::error::Error for BuilderError {}
