//! Converter registry
//!
//! A priority-ordered dispatch table mapping (source format, destination
//! format) pairs to converter functions. Multiple implementations may
//! compete for the same pair at different priority tiers; lookups either
//! name an exact tier or take the best available one.
//!
//! Registration happens once, single-threaded, inside [`initialize`];
//! the registry is immutable afterwards, so conversions need no locking
//! and are safe to run concurrently on disjoint buffers.

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::buffer::{SampleBuf, SampleBufMut};
use crate::error::{ConvertError, Result};
use crate::format::SampleFormat;
use crate::{generic, kernels, vectorized};

// ============================================================================
// Keys and priorities
// ============================================================================

/// Priority class of a converter implementation
///
/// Higher tiers win best-available lookups. The numeric gaps leave room for
/// tiers registered by downstream code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Priority {
    /// Portable scalar baseline; always present for supported pairs
    Generic = 0,
    /// Vectorized kernel implementation
    Vectorized = 3,
    /// Caller-supplied override
    Custom = 5,
}

/// Identity of a conversion family: ordered (source, destination) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConversionKey {
    pub source: SampleFormat,
    pub dest: SampleFormat,
}

/// A registered converter
///
/// Pure and stateless: reads exactly `len` elements from the source view,
/// writes exactly `len` elements to the destination view, applies the
/// scalar per the pair's convention. Source and destination must not alias.
pub type ConverterFn = fn(SampleBuf<'_>, SampleBufMut<'_>, f64) -> Result<()>;

// ============================================================================
// Registry
// ============================================================================

/// Registry of converter functions across priority tiers
#[derive(Default)]
pub struct ConverterRegistry {
    table: HashMap<ConversionKey, BTreeMap<Priority, ConverterFn>>,
}

impl ConverterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Insert a converter for (source, dest) at the given priority
    ///
    /// Duplicate (source, dest, priority) triples are not expected from
    /// static registration tables; if one occurs the last registration
    /// wins and a warning is logged.
    pub fn register(
        &mut self,
        source: SampleFormat,
        dest: SampleFormat,
        priority: Priority,
        function: ConverterFn,
    ) {
        let key = ConversionKey { source, dest };
        let replaced = self
            .table
            .entry(key)
            .or_default()
            .insert(priority, function);
        if replaced.is_some() {
            warn!(%source, %dest, ?priority, "duplicate converter registration; last wins");
        }
    }

    /// Converter registered for this exact (source, dest, priority) triple
    pub fn lookup(
        &self,
        source: SampleFormat,
        dest: SampleFormat,
        priority: Priority,
    ) -> Result<ConverterFn> {
        self.table
            .get(&ConversionKey { source, dest })
            .and_then(|tiers| tiers.get(&priority))
            .copied()
            .ok_or(ConvertError::NotFound {
                from: source,
                to: dest,
                priority: Some(priority),
            })
    }

    /// Highest-priority converter registered for (source, dest)
    pub fn lookup_best(&self, source: SampleFormat, dest: SampleFormat) -> Result<ConverterFn> {
        self.table
            .get(&ConversionKey { source, dest })
            .and_then(|tiers| tiers.last_key_value())
            .map(|(_, &function)| function)
            .ok_or(ConvertError::NotFound {
                from: source,
                to: dest,
                priority: None,
            })
    }

    /// Convert with the best available converter for the buffer formats
    pub fn convert(&self, src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
        let function = self.lookup_best(src.format(), dst.format())?;
        function(src, dst, scalar)
    }

    /// All source formats with at least one registered converter
    pub fn source_formats(&self) -> Vec<SampleFormat> {
        let mut formats = Vec::new();
        for key in self.table.keys() {
            if !formats.contains(&key.source) {
                formats.push(key.source);
            }
        }
        formats
    }

    /// All destination formats reachable from a source format
    pub fn dest_formats(&self, source: SampleFormat) -> Vec<SampleFormat> {
        let mut formats = Vec::new();
        for key in self.table.keys() {
            if key.source == source && !formats.contains(&key.dest) {
                formats.push(key.dest);
            }
        }
        formats
    }

    /// Priorities registered for a (source, dest) pair, in ascending order
    pub fn priorities(&self, source: SampleFormat, dest: SampleFormat) -> Vec<Priority> {
        self.table
            .get(&ConversionKey { source, dest })
            .map(|tiers| tiers.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Number of registered (source, dest) pairs
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether no converters are registered
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

// ============================================================================
// Global registry
// ============================================================================

static REGISTRY: OnceLock<ConverterRegistry> = OnceLock::new();

/// Populate and return the process-global registry
///
/// The first call registers the generic baseline for every supported pair,
/// then the vectorized entries on top. Later calls return the same
/// instance; registration is complete before the shared reference escapes.
pub fn initialize() -> &'static ConverterRegistry {
    REGISTRY.get_or_init(|| {
        match kernels::machine_config_path() {
            Some(path) => {
                debug!(path = %path.display(), "machine conversion profile found")
            }
            None => warn!(
                "no machine conversion profile found; \
                 conversion kernels will use compiled defaults"
            ),
        }

        let mut registry = ConverterRegistry::new();
        generic::register_all(&mut registry);
        vectorized::register_all(&mut registry);
        debug!(
            pairs = registry.len(),
            "converter registry initialized"
        );
        registry
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::check_lengths;

    fn noop_converter(src: SampleBuf<'_>, dst: SampleBufMut<'_>, _scalar: f64) -> Result<()> {
        check_lengths(src.len(), dst.len())
    }

    fn other_converter(_src: SampleBuf<'_>, _dst: SampleBufMut<'_>, _scalar: f64) -> Result<()> {
        Ok(())
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Generic < Priority::Vectorized);
        assert!(Priority::Vectorized < Priority::Custom);
    }

    #[test]
    fn test_register_and_lookup_exact() {
        let mut registry = ConverterRegistry::new();
        registry.register(
            SampleFormat::S16,
            SampleFormat::F32,
            Priority::Generic,
            noop_converter,
        );

        assert!(registry
            .lookup(SampleFormat::S16, SampleFormat::F32, Priority::Generic)
            .is_ok());
        assert_eq!(
            registry
                .lookup(SampleFormat::S16, SampleFormat::F32, Priority::Vectorized)
                .unwrap_err(),
            ConvertError::NotFound {
                from: SampleFormat::S16,
                to: SampleFormat::F32,
                priority: Some(Priority::Vectorized),
            }
        );
    }

    #[test]
    fn test_lookup_best_prefers_highest_tier() {
        let mut registry = ConverterRegistry::new();
        registry.register(
            SampleFormat::S16,
            SampleFormat::F32,
            Priority::Generic,
            noop_converter,
        );
        registry.register(
            SampleFormat::S16,
            SampleFormat::F32,
            Priority::Vectorized,
            other_converter,
        );

        let best = registry
            .lookup_best(SampleFormat::S16, SampleFormat::F32)
            .unwrap();
        assert_eq!(best as usize, other_converter as usize);

        // Insertion order must not matter
        let mut registry = ConverterRegistry::new();
        registry.register(
            SampleFormat::S16,
            SampleFormat::F32,
            Priority::Vectorized,
            other_converter,
        );
        registry.register(
            SampleFormat::S16,
            SampleFormat::F32,
            Priority::Generic,
            noop_converter,
        );
        let best = registry
            .lookup_best(SampleFormat::S16, SampleFormat::F32)
            .unwrap();
        assert_eq!(best as usize, other_converter as usize);
    }

    #[test]
    fn test_lookup_best_falls_back_to_generic() {
        let mut registry = ConverterRegistry::new();
        registry.register(
            SampleFormat::S32,
            SampleFormat::S8,
            Priority::Generic,
            noop_converter,
        );

        let best = registry
            .lookup_best(SampleFormat::S32, SampleFormat::S8)
            .unwrap();
        assert_eq!(best as usize, noop_converter as usize);
    }

    #[test]
    fn test_lookup_unregistered_pair() {
        let registry = ConverterRegistry::new();
        assert!(registry
            .lookup_best(SampleFormat::S32, SampleFormat::S8)
            .is_err());
    }

    #[test]
    fn test_duplicate_registration_last_wins() {
        let mut registry = ConverterRegistry::new();
        registry.register(
            SampleFormat::S8,
            SampleFormat::S16,
            Priority::Generic,
            noop_converter,
        );
        registry.register(
            SampleFormat::S8,
            SampleFormat::S16,
            Priority::Generic,
            other_converter,
        );

        let found = registry
            .lookup(SampleFormat::S8, SampleFormat::S16, Priority::Generic)
            .unwrap();
        assert_eq!(found as usize, other_converter as usize);
        assert_eq!(
            registry.priorities(SampleFormat::S8, SampleFormat::S16),
            vec![Priority::Generic]
        );
    }

    #[test]
    fn test_enumeration() {
        let mut registry = ConverterRegistry::new();
        registry.register(
            SampleFormat::S8,
            SampleFormat::F32,
            Priority::Generic,
            noop_converter,
        );
        registry.register(
            SampleFormat::S8,
            SampleFormat::F64,
            Priority::Generic,
            noop_converter,
        );

        assert_eq!(registry.source_formats(), vec![SampleFormat::S8]);
        let dests = registry.dest_formats(SampleFormat::S8);
        assert_eq!(dests.len(), 2);
        assert!(dests.contains(&SampleFormat::F32));
        assert!(dests.contains(&SampleFormat::F64));
        assert!(registry.dest_formats(SampleFormat::F64).is_empty());
    }

    #[test]
    fn test_global_initialize_idempotent() {
        let first = initialize();
        let second = initialize();
        assert!(std::ptr::eq(first, second));
        assert!(!first.is_empty());
    }
}
