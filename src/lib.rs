//! Deterministic pseudorandom `calt` feature generation for OpenType fonts.
//!
//! Given glyph classes (a base set plus stylistic variants), this crate emits
//! feature-file code that makes a shaping engine cycle each glyph through its
//! variants. Whether a glyph advances depends on which random partition the
//! glyph before it falls into, so repeated letters stop looking stamped.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ catalogue.rs │────▶│ rotation.rs  │────▶│  lookup.rs   │
//! │ (StateClass) │     │ (@stateN)    │     │ (LookupRule) │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        │                                         ▲
//!        ▼                                         │
//! ┌──────────────┐     ┌──────────────┐            │
//! │    rng.rs    │────▶│ partition.rs │────────────┘
//! │ (LCG draws)  │     │ (@partitionN)│
//! └──────────────┘     └──────────────┘
//!        program.rs assembles ──▶ compile.rs serializes
//! ```
//!
//! # Usage
//!
//! ```
//! use pseudocalt::{compile_program, Catalogue, GeneratorConfig, Program};
//!
//! let catalogue = Catalogue::new(vec![
//!     vec!["a".into(), "b".into()],
//!     vec!["a.alt".into(), "b.alt".into()],
//! ]);
//! let config = GeneratorConfig { depth: 2, partitions: 2, ..GeneratorConfig::default() };
//!
//! let program = Program::build(&catalogue, &config).unwrap();
//! let fea = compile_program(&program, &config);
//! assert!(fea.contains("feature calt {"));
//! ```

// Module declarations
pub mod catalogue;
pub mod compile;
pub mod config;
pub mod generate;
pub mod lookup;
pub mod partition;
pub mod program;
pub mod rng;
pub mod rotation;
pub mod testing;
pub mod verify;

// Re-exports for public API
pub use catalogue::{Catalogue, Glyph, StateClass};
pub use compile::{compile_feature, compile_program, ClassDeclaration};
pub use config::{ConfigError, ConfigOverrides, GeneratorConfig, Manifest};
pub use generate::{generate_text, resolve_inputs, run_generate, GenerateRequest, GenerateSummary};
pub use lookup::{build_lookup_chain, LookupLayer, LookupRule};
pub use partition::{partition_glyphs, Partition};
pub use program::{CatchAllClass, Program, SkipClass};
pub use rng::SeededRandom;
pub use rotation::{build_rotations, RotationEntry};
pub use verify::{validate_catalogue, InvariantError, VerificationReport};
