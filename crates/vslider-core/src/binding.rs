#![forbid(unsafe_code)]

//! Two-way value bindings.
//!
//! The slider never owns its value. The host hands the mapper something that
//! implements [`ValueBinding`]; the mapper reads it when the control appears
//! and writes it on every drag update. Writes must be visible to the host
//! synchronously, nothing more is assumed about notification.
//!
//! Two implementations ship here:
//!
//! - [`ValueCell`]: a shared, observable cell. Clones alias the same value and
//!   a monotonically increasing revision lets the host detect writes.
//! - [`FnBinding`]: a getter/setter closure pair for hosts that keep the value
//!   in their own model.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Read/write access to the host-owned slider value.
pub trait ValueBinding<V> {
    /// Current value.
    fn get(&self) -> V;

    /// Replace the value.
    fn set(&mut self, value: V);
}

impl<V, B: ValueBinding<V> + ?Sized> ValueBinding<V> for &mut B {
    #[inline]
    fn get(&self) -> V {
        (**self).get()
    }

    #[inline]
    fn set(&mut self, value: V) {
        (**self).set(value);
    }
}

// ---------------------------------------------------------------------------
// ValueCell
// ---------------------------------------------------------------------------

struct Slot<V> {
    value: Cell<V>,
    revision: Cell<u64>,
}

/// Shared single-threaded value cell.
///
/// `ValueCell` is `!Send`: the slider runs on one UI thread and the bound
/// value is last-write-wins.
pub struct ValueCell<V: Copy> {
    slot: Rc<Slot<V>>,
}

impl<V: Copy> ValueCell<V> {
    /// Create a new cell holding `value`.
    #[must_use]
    pub fn new(value: V) -> Self {
        Self {
            slot: Rc::new(Slot {
                value: Cell::new(value),
                revision: Cell::new(0),
            }),
        }
    }

    /// Current value.
    #[inline]
    #[must_use]
    pub fn get(&self) -> V {
        self.slot.value.get()
    }

    /// Replace the value and bump the revision.
    pub fn set(&self, value: V) {
        self.slot.value.set(value);
        self.slot
            .revision
            .set(self.slot.revision.get().wrapping_add(1));
    }

    /// Number of writes observed since creation.
    #[inline]
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.slot.revision.get()
    }

    /// Whether two handles alias the same cell.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl<V: Copy> Clone for ValueCell<V> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<V: Copy + fmt::Debug> fmt::Debug for ValueCell<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueCell")
            .field("value", &self.get())
            .field("revision", &self.revision())
            .finish()
    }
}

impl<V: Copy> ValueBinding<V> for ValueCell<V> {
    #[inline]
    fn get(&self) -> V {
        ValueCell::get(self)
    }

    #[inline]
    fn set(&mut self, value: V) {
        ValueCell::set(self, value);
    }
}

// ---------------------------------------------------------------------------
// FnBinding
// ---------------------------------------------------------------------------

/// A binding built from a getter and a setter.
pub struct FnBinding<G, S> {
    getter: G,
    setter: S,
}

impl<G, S> FnBinding<G, S> {
    /// Pair a getter with a setter.
    #[must_use]
    pub const fn new(getter: G, setter: S) -> Self {
        Self { getter, setter }
    }
}

impl<G, S> fmt::Debug for FnBinding<G, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnBinding").finish_non_exhaustive()
    }
}

impl<V, G, S> ValueBinding<V> for FnBinding<G, S>
where
    G: Fn() -> V,
    S: FnMut(V),
{
    #[inline]
    fn get(&self) -> V {
        (self.getter)()
    }

    #[inline]
    fn set(&mut self, value: V) {
        (self.setter)(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_clones_alias() {
        let a = ValueCell::new(0.25_f64);
        let b = a.clone();
        b.set(0.75);
        assert_eq!(a.get(), 0.75);
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&ValueCell::new(0.75)));
    }

    #[test]
    fn cell_revision_counts_writes() {
        let cell = ValueCell::new(0.0_f32);
        assert_eq!(cell.revision(), 0);
        cell.set(0.5);
        cell.set(0.5);
        assert_eq!(cell.revision(), 2);
    }

    #[test]
    fn cell_as_binding() {
        let host = ValueCell::new(0.1_f64);
        let mut binding = host.clone();
        assert_eq!(ValueBinding::get(&binding), 0.1);
        ValueBinding::set(&mut binding, 0.9);
        assert_eq!(host.get(), 0.9);
    }

    #[test]
    fn fn_binding_reads_and_writes_host_state() {
        let store = Cell::new(0.3_f64);
        let mut binding = FnBinding::new(|| store.get(), |v| store.set(v));
        assert_eq!(ValueBinding::<f64>::get(&binding), 0.3);
        ValueBinding::<f64>::set(&mut binding, 0.6);
        assert_eq!(store.get(), 0.6);
    }

    #[test]
    fn mut_ref_forwards() {
        fn write_half<B: ValueBinding<f64>>(mut b: B) {
            b.set(0.5);
        }
        let mut cell = ValueCell::new(0.0_f64);
        write_half(&mut cell);
        assert_eq!(cell.get(), 0.5);
    }

    #[test]
    fn debug_format() {
        let cell = ValueCell::new(0.5_f64);
        let dbg = format!("{cell:?}");
        assert!(dbg.contains("ValueCell"));
        assert!(dbg.contains("0.5"));
        assert!(format!("{:?}", FnBinding::new(|| 0.0_f64, |_v: f64| {})).contains("FnBinding"));
    }

    #[test]
    fn debug_format_for_host_value_type() {
        #[derive(Debug, Clone, Copy, PartialEq)]
        struct Gain(f32);

        let cell = ValueCell::new(Gain(0.25));
        cell.set(Gain(0.5));
        assert_eq!(format!("{cell:?}"), "ValueCell { value: Gain(0.5), revision: 1 }");
    }
}
