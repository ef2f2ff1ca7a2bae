//! Platform abstraction layer for the clock behind the scoped timer.
//!
//! This module abstracts the source of timestamps so the rest of the crate
//! can switch between the real build-selected clock (platform steady clock,
//! or the MPI runtime wall clock under the `mpi_wtime` feature) and a mock
//! implementation for testing.

mod abstractions;
mod facade;
mod real;

#[cfg(test)]
pub(crate) use abstractions::MockTimeSource;
pub(crate) use abstractions::{TimeSource, Timestamp};
pub(crate) use facade::TimeSourceFacade;
