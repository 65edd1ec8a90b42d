//! Workspace-level integration test package.
//!
//! The actual tests live in `tests/`; this library target is empty.
