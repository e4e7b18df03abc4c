//! # handctl - Hand-Controller Register Codec
//!
//! Translates the single 8-bit scan register of a classic hand controller
//! (16-position disc, 12-key keypad, three action buttons) into the keys it
//! reports, and back.
//!
//! ## Features
//!
//! - **Exact decoding**: all 256 register values decode through constant
//!   tables built at compile time
//! - **Two disc modes**: the tightest matching directions, or every
//!   direction the contacts cover
//! - **Encoding**: any mix of disc, keypad and action keys to one register
//! - **Sensitivity**: widen a disc reading by up to seven compass steps
//! - **Ghost detection**: flag keypad combinations the matrix cannot tell apart
//!
//! ## Architecture
//!
//! - [`keys`] - Key taxonomy, key sets and display tokens
//! - [`codec`] - Register decoding and encoding
//! - [`sensitivity`] - Disc window expansion
//! - [`reserved`] - Reserved combination detection
//! - [`config`] - Codec configuration and named features
//! - [`error`] - Centralized error types

pub mod error;
pub mod keys;

pub mod codec;
pub mod config;
pub mod reserved;
pub mod sensitivity;

pub use error::{HandctlError, Result};

pub use codec::{
    decode, decode_action, decode_disc, decode_keypad, decode_with, encode, encode_opt,
    DiscMatch, Reading, IDLE_REGISTER,
};
pub use config::{CodecConfig, ConfigurableFeature};
pub use keys::{display_string, display_string_of, Key, KeyFamily, KeySet};
pub use reserved::{is_reserved, Reservable};
pub use sensitivity::{expand, SensitivityRadius};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
