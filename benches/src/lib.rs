//! Shared measurement setup for the engine benchmarks.
use criterion::Criterion;

/// Criterion driver: cycles per byte where the counter is available.
#[cfg(any(
    target_arch = "x86_64",
    target_arch = "x86",
    all(target_arch = "aarch64", target_os = "linux")
))]
pub type Bencher = Criterion<criterion_cycles_per_byte::CyclesPerByte>;

/// Criterion driver: wall-clock time elsewhere.
#[cfg(not(any(
    target_arch = "x86_64",
    target_arch = "x86",
    all(target_arch = "aarch64", target_os = "linux")
)))]
pub type Bencher = Criterion;

/// Builds a [`Bencher`] with the platform's measurement.
#[cfg(any(
    target_arch = "x86_64",
    target_arch = "x86",
    all(target_arch = "aarch64", target_os = "linux")
))]
pub fn bencher() -> Bencher {
    Criterion::default().with_measurement(criterion_cycles_per_byte::CyclesPerByte)
}

/// Builds a [`Bencher`] with the platform's measurement.
#[cfg(not(any(
    target_arch = "x86_64",
    target_arch = "x86",
    all(target_arch = "aarch64", target_os = "linux")
)))]
pub fn bencher() -> Bencher {
    Criterion::default()
}
