//! Registry Tests
//!
//! Lookup and fallback behavior of the global converter registry: tier
//! preference, generic fallback, exact-tier misses, and the scalar-ignored
//! property of pure width remaps.

use num_complex::Complex;
use test_case::test_case;
use tracing_subscriber::EnvFilter;

use sdrconv::{initialize, ConverterRegistry, Priority, SampleBuf, SampleBufMut, SampleFormat};

/// Shared entry point for the process-global registry. Routes tracing
/// output through the test writer so the one-time initialization log
/// (including the missing-machine-profile warning) shows up under
/// `--nocapture`.
fn registry() -> &'static ConverterRegistry {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sdrconv=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
    initialize()
}

#[test_case(SampleFormat::S8, SampleFormat::S16)]
#[test_case(SampleFormat::S16, SampleFormat::F32)]
#[test_case(SampleFormat::F32, SampleFormat::S32)]
#[test_case(SampleFormat::F64, SampleFormat::S8)]
#[test_case(SampleFormat::Cs16, SampleFormat::Cf64)]
#[test_case(SampleFormat::Cf32, SampleFormat::Cf32)]
fn best_available_is_vectorized(source: SampleFormat, dest: SampleFormat) {
    let registry = registry();
    let best = registry.lookup_best(source, dest).unwrap();
    let vectorized = registry
        .lookup(source, dest, Priority::Vectorized)
        .unwrap();
    assert_eq!(best as usize, vectorized as usize);
}

#[test]
fn every_vectorized_pair_has_generic_fallback() {
    let registry = registry();
    for source in SampleFormat::ALL {
        for dest in registry.dest_formats(source) {
            assert!(
                registry.lookup(source, dest, Priority::Generic).is_ok(),
                "{source} -> {dest} has no generic baseline"
            );
            assert!(registry.lookup_best(source, dest).is_ok());
        }
    }
}

#[test]
fn unlisted_pairs_are_not_registered() {
    let registry = registry();
    // Integer pairs without a dedicated kernel fall back to whatever the
    // host offers elsewhere; this module registers nothing for them.
    assert!(registry
        .lookup_best(SampleFormat::S32, SampleFormat::S8)
        .is_err());
    assert!(registry
        .lookup_best(SampleFormat::F64, SampleFormat::F64)
        .is_err());
    assert!(registry
        .lookup(SampleFormat::S16, SampleFormat::F32, Priority::Custom)
        .is_err());
}

#[test]
fn priorities_are_ordered() {
    let registry = registry();
    assert_eq!(
        registry.priorities(SampleFormat::S16, SampleFormat::F32),
        vec![Priority::Generic, Priority::Vectorized]
    );
}

#[test]
fn all_formats_appear_as_sources() {
    let registry = registry();
    let sources = registry.source_formats();
    for format in SampleFormat::ALL {
        assert!(sources.contains(&format), "{format} missing as a source");
    }
}

#[test_case(1.0)]
#[test_case(999.0)]
#[test_case(-0.25)]
fn width_remap_ignores_scalar(scalar: f64) {
    let registry = registry();

    let samples = [5i8, -5, 127, -128];
    let mut with_scalar = [0i16; 4];
    let mut with_unity = [0i16; 4];

    registry
        .convert(
            SampleBuf::S8(&samples),
            SampleBufMut::S16(&mut with_scalar),
            scalar,
        )
        .unwrap();
    registry
        .convert(
            SampleBuf::S8(&samples),
            SampleBufMut::S16(&mut with_unity),
            1.0,
        )
        .unwrap();

    assert_eq!(with_scalar, with_unity);
}

#[test_case(1.0)]
#[test_case(999.0)]
fn complex_width_remap_ignores_scalar(scalar: f64) {
    let registry = registry();

    let samples = [Complex::new(5i8, -5), Complex::new(127, -128)];
    let mut with_scalar = [Complex::new(0i16, 0); 2];
    let mut with_unity = [Complex::new(0i16, 0); 2];

    registry
        .convert(
            SampleBuf::Cs8(&samples),
            SampleBufMut::Cs16(&mut with_scalar),
            scalar,
        )
        .unwrap();
    registry
        .convert(
            SampleBuf::Cs8(&samples),
            SampleBufMut::Cs16(&mut with_unity),
            1.0,
        )
        .unwrap();

    assert_eq!(with_scalar, with_unity);
}

#[test]
fn convert_dispatches_on_buffer_formats() {
    let registry = registry();

    let samples = [64i8, -64];
    let mut floats = [0.0f32; 2];
    registry
        .convert(
            SampleBuf::S8(&samples),
            SampleBufMut::F32(&mut floats),
            1.0 / 128.0,
        )
        .unwrap();
    assert_eq!(floats, [0.5, -0.5]);
}

#[test]
fn convert_rejects_length_mismatch() {
    let registry = registry();

    let samples = [0i8; 4];
    let mut floats = [0.0f32; 2];
    let err = registry
        .convert(
            SampleBuf::S8(&samples),
            SampleBufMut::F32(&mut floats),
            1.0,
        )
        .unwrap_err();
    assert_eq!(err.error_code(), "LENGTH_MISMATCH");
}

#[test]
fn convert_unregistered_pair_reports_not_found() {
    let registry = registry();

    let samples = [0i32; 2];
    let mut bytes = [0i8; 2];
    let err = registry
        .convert(
            SampleBuf::S32(&samples),
            SampleBufMut::S8(&mut bytes),
            1.0,
        )
        .unwrap_err();
    assert_eq!(err.error_code(), "CONVERTER_NOT_FOUND");
}
