// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `r3bl_shell_input`
//!
//! Keystroke to action engine for an interactive shell front end. It turns raw byte
//! chunks from a terminal into edits of a command line, history recall,
//! autocomplete suggestions, and submissions, or forwards them untouched to a running
//! full screen program.
//!
//! Nothing is drawn here. Every call to [`ModeRouter::handle_bytes`] returns a list of
//! [`RenderOp`]s, which a [`RenderOpInterpreter`] (or any other renderer) applies to
//! the display. The process, the lookup tables, the display metrics, and the place
//! submitted lines go to are all traits in [`collaborators`], so the whole state
//! machine runs in tests without a terminal.
//!
//! ```
//! use r3bl_shell_input::{Collaborators, EditorConfig, ModeRouter, RenderOp, SessionId,
//!                        test_fixtures::{MockLookups, MockSurface, RecordingSink}};
//!
//! let lookups = MockLookups::default().with_commands(&["cat", "cd"]);
//! let surface = MockSurface::default();
//! let mut sink = RecordingSink::default();
//! let mut router = ModeRouter::new(SessionId::from("tab-1"), EditorConfig::default());
//!
//! let mut collaborators = Collaborators::idle(&lookups, &mut sink, &surface);
//! router.handle_bytes(b"ls", &mut collaborators);
//! let ops = router.handle_bytes(b"\r", &mut collaborators);
//!
//! assert_eq!(ops.to_vec(), vec![RenderOp::NewLine]);
//! assert_eq!(sink.submitted, vec!["ls"]);
//! ```
//!
//! # Modes
//!
//! | [`ExecutionMode`]           | Who gets the keystroke                           |
//! |-----------------------------|--------------------------------------------------|
//! | `Idle`                      | the local line editor, submits to the sink       |
//! | `BufferedAwaitingProcess`   | the local line editor, submits to process input  |
//! | `InteractivePassthrough`    | the process, raw (except `Ctrl+C` / `Ctrl+D`)    |
//! | `PagerActive`               | the process, raw                                 |
//! | `ExternalEnginePassthrough` | the external engine's input accumulator          |

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod autocomplete;
pub mod collaborators;
pub mod command_buffer;
pub mod config;
pub mod error;
pub mod history;
pub mod input_decoder;
pub mod log;
pub mod mode_router;
pub mod render;
pub mod test_fixtures;

// Re-export stable public API using glob imports for a flat API surface.
pub use autocomplete::*;
pub use collaborators::*;
pub use command_buffer::*;
pub use config::*;
pub use error::*;
pub use history::*;
pub use input_decoder::*;
pub use log::*;
pub use mode_router::*;
pub use render::*;
