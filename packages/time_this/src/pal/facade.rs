//! Facade for switching between the real and mock time sources.

#[cfg(test)]
use std::sync::{Arc, Mutex};

#[cfg(test)]
use crate::pal::abstractions::MockTimeSource;
use crate::pal::abstractions::{TimeSource, Timestamp};
use crate::pal::real::RealTimeSource;

/// Unified interface over either the real build-selected clock or a mock
/// source under test.
#[derive(Clone, Debug)]
pub(crate) enum TimeSourceFacade {
    /// The build-selected clock (steady clock, or `MPI_Wtime` under the
    /// `mpi_wtime` feature).
    Real(RealTimeSource),

    /// Mock source for testing.
    #[cfg(test)]
    Mock(Arc<Mutex<MockTimeSource>>),
}

impl TimeSourceFacade {
    pub(crate) fn real() -> Self {
        Self::Real(RealTimeSource)
    }
}

#[cfg(test)]
impl From<MockTimeSource> for TimeSourceFacade {
    fn from(source: MockTimeSource) -> Self {
        Self::Mock(Arc::new(Mutex::new(source)))
    }
}

impl TimeSource for TimeSourceFacade {
    fn now(&self) -> Timestamp {
        match self {
            Self::Real(source) => source.now(),
            #[cfg(test)]
            Self::Mock(source) => source
                .lock()
                .expect("mock time source does not support operation after panic in mock")
                .now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_facade_uses_the_real_source() {
        let facade = TimeSourceFacade::real();
        assert!(matches!(facade, TimeSourceFacade::Real(_)));
    }

    #[test]
    fn mock_facade_returns_mocked_readings() {
        let mut source = MockTimeSource::new();
        source
            .expect_now()
            .once()
            .returning(|| Timestamp::from_seconds(12.5));

        let facade = TimeSourceFacade::from(source);

        assert_eq!(facade.now(), Timestamp::from_seconds(12.5));
    }
}
