//! Core library for the Burrow workout roadmap.
//!
//! A user's workout plan is fetched as one JSON document and shown as a
//! roadmap of days that unlock one after another. This crate holds the
//! pieces behind that view: the document model and parser, the snapshot
//! store, the roadmap state rules, the exercise toggle reducer, the stats
//! counters and the gateways the document is fetched through.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): the user document as it appears on the wire
//! - **Derivations** ([`roadmap`], [`stats`]): pure functions of a plan
//! - **Updates** ([`reducer`], [`store`]): copy-on-write toggles and the
//!   snapshot they replace
//! - **Sources** ([`gateway`]): HTTP, local file and in-memory gateways
//! - **Coordination** ([`session`]): one user's loaded plan and its updates
//! - **Presentation** ([`display`]): markdown views for the CLI and MCP
//!   server
//!
//! # Quick Start
//!
//! ```rust
//! use burrow_core::{SessionBuilder, display::Roadmap, params::ToggleExercise};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = SessionBuilder::new()
//!     .with_username("tomcat")
//!     .build()?;
//!
//! session.load().await?;
//! println!("{}", Roadmap::new(session.plan()?));
//!
//! session.toggle_exercise(&ToggleExercise { day: 1, exercise: 1 })?;
//! println!("Level {}", session.stats()?.level);
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod document;
pub mod error;
pub mod gateway;
pub mod models;
pub mod mole;
pub mod params;
pub mod reducer;
pub mod roadmap;
pub mod session;
pub mod stats;
pub mod store;

// Re-export commonly used types
pub use display::{DayDetails, LoadingPlaceholder, Roadmap, StatsCard, ToggleResult};
pub use error::{BurrowError, Result};
pub use gateway::{FileUserGateway, HttpUserGateway, InMemoryUserGateway, UserGateway};
pub use models::{Day, Exercise, Plan, UserProfile};
pub use mole::{Mole, MoleState};
pub use params::{DayRef, ToggleExercise};
pub use roadmap::{NodeIcon, NodeState, RoadmapNode};
pub use session::{Session, SessionBuilder, UpdateListener};
pub use stats::{DayProgress, Stats};
pub use store::PlanStore;
