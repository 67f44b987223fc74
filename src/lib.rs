//! Incremental Vietnamese Telex engine.
//!
//! Keys are fed one at a time into an [`Engine`]; each key is either a
//! literal letter or a Telex action (tone, letter shape, `đ`) applied to the
//! syllable under the caret. Marks may move as the syllable grows, so the
//! engine keeps the syllable as bare letters plus marks and renders it on
//! demand. Whitespace, ASCII punctuation and digits commit the syllable.
//!
//! ```
//! use telex::{Engine, Mode};
//!
//! let mut engine = Engine::new();
//! engine.process_string("Tieesng Vieejt", Mode::empty());
//! assert_eq!(engine.processed_string(), "Tiếng Việt");
//! ```

pub mod actions;
pub mod classify;
pub mod codec;
pub mod config;
pub mod delta;
pub mod engine;
pub mod error;
pub mod modes;
pub mod modification;
pub mod syllable;
pub mod tone;

pub use actions::Action;
pub use config::EngineConfig;
pub use delta::KeyDelta;
pub use engine::Engine;
pub use error::{Error, Result};
pub use modes::Mode;
pub use syllable::{AccentStyle, Modification, Syllable, Tone, Transformation};
