//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic to improve reuse and testability. `storage` owns the
//! persisted credential record; `events` owns cross-context change
//! propagation.

pub mod events;
pub mod storage;
