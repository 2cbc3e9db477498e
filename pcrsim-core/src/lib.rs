//! # pcrsim - PCR Amplification Simulator
//!
//! A discrete-cycle kinetic model of polymerase chain reaction amplification.
//! Each cycle is limited by whichever of three ceilings binds first:
//! polymerase throughput, template re-annealing kinetics, or the finite
//! nucleotide pool.
//!
//! ## Features
//!
//! - **Kinetic core**: Deterministic per-cycle state transition with
//!   enzyme-limited, template-limited and substrate-exhausted regimes
//! - **Lazy simulation**: Cycles can be iterated and abandoned early
//! - **Sequence profiling**: Base counting, GC fraction and molar mass from
//!   literal sequences, plain-text files or FASTA files
//! - **Yield conversion**: Final molar amount to mass and ng/µl
//!
//! ## Quick Start
//!
//! ```rust
//! use pcrsim_core::config::KineticParameters;
//! use pcrsim_core::kinetics::simulate;
//!
//! let trajectory = simulate(1.0e-15, &KineticParameters::default())?;
//!
//! println!("After {} cycles: {:.3e} M", trajectory.cycles(), trajectory.final_concentration());
//! # Ok::<(), pcrsim_core::types::PcrError>(())
//! ```
//!
//! ## From template to ng/µl
//!
//! ```rust
//! use pcrsim_core::{PcrAnalyzer, config::PcrConfig};
//!
//! let analyzer = PcrAnalyzer::new(PcrConfig::default());
//! let results = analyzer.analyze_sequences(&"ACGT".repeat(5_000), "GATTACAGATTACA")?;
//!
//! println!("{:.3} ng/µl", results.product_yield.ng_per_ul);
//! # Ok::<(), pcrsim_core::types::PcrError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: Kinetic parameters, reaction setup and output options
//! - [`constants`]: Physical constants and defaults
//! - [`kinetics`]: The amplification simulator
//! - [`engine`]: High-level template-to-yield analyzer
//! - [`results`]: Trajectory and yield types
//! - [`sequence`]: Base counting and molar mass
//! - [`output`]: Summary and TSV writers
//! - [`types`]: Regime tags and the error type
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, PcrError>`](types::PcrError).
//! Parameters are validated before the first cycle, so a simulation that
//! starts always finishes. Running out of nucleotides is reported as a
//! plateau in the trajectory, never as an error.

pub mod config;
pub mod constants;
pub mod engine;
pub mod kinetics;
pub mod output;
pub mod results;
pub mod sequence;
pub mod types;

pub use engine::{PcrAnalyzer, StartingMaterial};
pub use kinetics::{AmplificationSimulator, simulate};
pub use results::{PcrResults, Trajectory};
pub use types::PcrError;
