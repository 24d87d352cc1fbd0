use criterion::Criterion;
use std::time::Duration;

/// Multi-megabyte inputs take tens of milliseconds per iteration.
const SAMPLE_SIZE: usize = 20;
const MEASUREMENT_TIME: Duration = Duration::from_secs(15);

#[cfg(not(feature = "cpb"))]
pub type Benchmarker = Criterion;

#[cfg(feature = "cpb")]
pub type Benchmarker = Criterion<criterion_cycles_per_byte::CyclesPerByte>;

#[cfg(not(feature = "cpb"))]
pub fn config() -> Benchmarker {
    Criterion::default()
        .sample_size(SAMPLE_SIZE)
        .measurement_time(MEASUREMENT_TIME)
}

#[cfg(feature = "cpb")]
pub fn config() -> Benchmarker {
    Criterion::default()
        .with_measurement(criterion_cycles_per_byte::CyclesPerByte)
        .sample_size(SAMPLE_SIZE)
        .measurement_time(MEASUREMENT_TIME)
}
