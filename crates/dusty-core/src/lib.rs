//! Derived-quantity engine for a dust grain in a weakly magnetized plasma.
//!
//! Formula modules are leaves; `derived` ties them to an operating point and
//! `sweep` evaluates many operating points at once.

pub mod collision;
pub mod debye;
pub mod derived;
pub mod grain;
pub mod gyro;
pub mod neutral;
pub mod reduction;
pub mod speed;
pub mod sweep;
