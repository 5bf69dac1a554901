//! # Notesync Architecture
//!
//! Notesync is the core of a notes client that keeps a local view of a remote note
//! collection and updates it **optimistically**: the local state changes first, the
//! backend is told afterwards. The binary is just one client of this library.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments and session lines, prints results       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/)                                  │
//! │  - One command per user action                              │
//! │  - Resolves note references, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Synchronization Controller (controller.rs)                 │
//! │  - Optimistic transition, remote call, reconcile            │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                               │
//!                 ▼                               ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  State (state.rs, store.rs)   │ │  Remote (remote/)         │
//! │  - Pure reducer over actions  │ │  - RemoteDataService      │
//! │  - Single owned ClientState   │ │  - GraphQL, in-memory     │
//! └───────────────────────────────┘ └───────────────────────────┘
//! ```
//!
//! ## Key Principle: State Changes Only Through Actions
//!
//! [`state::ClientState`] is never mutated in place. The controller dispatches
//! [`state::Action`]s to the [`store::Store`], which runs [`state::reduce`] over the
//! current snapshot. Anything that wants to know what the user sees reads a snapshot.
//!
//! ## Session Identity
//!
//! A [`model::ClientId`] is generated once when the application starts and handed to
//! the controller. Every note created in that session carries it.
//!
//! ## Testing Strategy
//!
//! 1. **Reducer** (`state.rs`): every action, plus unknown-action handling.
//! 2. **Controller** (`controller.rs`): the bulk of the tests, against
//!    [`remote::memory::InMemoryService`] with injected failures.
//! 3. **Commands** (`commands/*.rs`): parsing, reference resolution, reported outcomes.
//! 4. **Transport** (`remote/graphql.rs`): request/response shapes against a mock server.
//! 5. **CLI** (`tests/`): scripted sessions against the binary.
//!
//! ## Module Overview
//!
//! - [`model`]: Core data types (`Note`, `NoteForm`, `ClientId`)
//! - [`state`]: Client state, actions, and the reducer
//! - [`store`]: The state owner that actions are dispatched to
//! - [`controller`]: Optimistic synchronization of user actions
//! - [`remote`]: Remote note service abstraction and implementations
//! - [`commands`]: Command surface for presentation layers
//! - [`index`]: Position/id references to notes
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod index;
pub mod model;
pub mod remote;
pub mod state;
pub mod store;
