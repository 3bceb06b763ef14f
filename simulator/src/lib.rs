//! Desktop host for the Flow onboarding screen.
//!
//! Everything here draws onto a generic `DrawTarget`, so it builds and tests
//! without a window. The `flow` binary (feature `simulator`) wires it to an
//! SDL window from `embedded-graphics-simulator`.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod pages;
pub mod profiling;
pub mod screens;
pub mod timing;
