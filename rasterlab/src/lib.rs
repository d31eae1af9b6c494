//! rasterlab - Scriptable image-processing engine
//!
//! An in-memory model of named raster images, a catalogue of
//! deterministic pixel transformations, and a small command language
//! driving both from scripts or an interactive session.
//!
//! # Overview
//!
//! - Image values with strict range invariants and copy semantics at
//!   every store boundary
//! - Color transforms, convolution, tone remaps, channel
//!   split/combine, downscaling, Haar-threshold compression, masked
//!   application, histograms
//! - PNM/PNG/JPEG load and save
//! - A verb registry interpreter shared by scripted and interactive
//!   sessions
//!
//! # Example
//!
//! ```
//! use rasterlab::{Image, Rgb};
//! use rasterlab::script::{Interpreter, Options};
//!
//! let mut session = Interpreter::new(Options::default());
//! let koala = Image::from_fn(2, 2, 255, |_, _| Rgb::new(10, 20, 30)).unwrap();
//! session.store_mut().insert("koala", koala).unwrap();
//!
//! let mut out = Vec::new();
//! session.execute_line("greyscale koala koala-grey", &mut out).unwrap();
//! assert!(session.store().contains("koala-grey"));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rasterlab_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use rasterlab_io as io;
pub use rasterlab_ops as ops;
pub use rasterlab_script as script;
