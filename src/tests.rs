//! End-to-end behavior of discovery, propagation, and consumption.
//!
//! These tests drive the kit the way a backend does: compose a tree, mount
//! it headlessly, feed events through a hand-driven source, and observe what
//! descendants read.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use waterline_reactive::{BoxWatcherGuard, Signal, WatcherGuard};

use crate::{
    AnyView, CustomInsetSource, EdgeInsets, Environment, InsetSource, SafeAreaContext,
    SafeAreaError, SafeAreaEvent, SafeAreaProvider, SafeAreaSnapshot, SurfaceSize, View, ViewExt,
    mount, safe_area, try_safe_area,
};

// ============================================================================
// Test Infrastructure
// ============================================================================

#[derive(Default)]
struct MockState {
    observers: BTreeMap<u64, Rc<dyn Fn(SafeAreaEvent)>>,
    next_id: u64,
    total_observed: usize,
}

/// An inset source driven by hand.
///
/// Records every observation ever made so tests can distinguish "no live
/// observer" from "never observed at all".
#[derive(Clone, Default)]
struct MockInsetSource {
    state: Rc<RefCell<MockState>>,
}

impl MockInsetSource {
    fn send(&self, event: SafeAreaEvent) {
        // Snapshot the registry so a callback dropping its own guard cannot
        // invalidate the iteration.
        let observers: Vec<Rc<dyn Fn(SafeAreaEvent)>> =
            self.state.borrow().observers.values().cloned().collect();
        for observer in observers {
            observer(event);
        }
    }

    fn live_observers(&self) -> usize {
        self.state.borrow().observers.len()
    }

    fn total_observed(&self) -> usize {
        self.state.borrow().total_observed
    }
}

impl CustomInsetSource for MockInsetSource {
    fn observe(&self, on_event: impl Fn(SafeAreaEvent) + 'static) -> BoxWatcherGuard {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.total_observed += 1;
        state.observers.insert(id, Rc::new(on_event));
        Box::new(MockGuard {
            state: Rc::downgrade(&self.state),
            id,
        })
    }
}

struct MockGuard {
    state: Weak<RefCell<MockState>>,
    id: u64,
}

impl Drop for MockGuard {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().observers.remove(&self.id);
        }
    }
}

impl WatcherGuard for MockGuard {}

/// Captures the environment its body runs under.
#[derive(Clone)]
struct EnvProbe(Rc<RefCell<Option<Environment>>>);

impl EnvProbe {
    fn new() -> Self {
        Self(Rc::default())
    }

    fn seen(&self) -> Environment {
        self.0.borrow().clone().expect("probe body must have run")
    }
}

impl View for EnvProbe {
    fn body(self, env: &Environment) -> impl View {
        *self.0.borrow_mut() = Some(env.clone());
    }
}

fn sourced_env(source: &MockInsetSource) -> Environment {
    Environment::new().with(InsetSource::new(source.clone()))
}

fn nested_providers(depth: usize, leaf: impl View) -> AnyView {
    let mut view = AnyView::new(leaf);
    for _ in 0..depth {
        view = AnyView::new(SafeAreaProvider::new(view));
    }
    view
}

// ============================================================================
// Provider Ownership
// ============================================================================

#[test]
fn deeply_nested_providers_share_one_subscription() {
    let source = MockInsetSource::default();
    let env = sourced_env(&source);

    let _tree = mount(&env, nested_providers(4, ()));

    assert_eq!(source.live_observers(), 1);
    assert_eq!(source.total_observed(), 1);
}

#[test]
fn nested_provider_republishes_the_ancestor_snapshot() {
    let source = MockInsetSource::default();
    let env = sourced_env(&source);
    let probe = EnvProbe::new();

    let _tree = mount(&env, nested_providers(2, probe.clone()));
    source.send(SafeAreaEvent::Insets(EdgeInsets::new(44.0, 0.0, 34.0, 0.0)));

    let seen = probe.seen();
    let context = seen
        .get::<SafeAreaContext>()
        .expect("descendants see the owning provider's context");
    assert_eq!(
        context.snapshot(),
        Some(SafeAreaSnapshot::new(EdgeInsets::new(44.0, 0.0, 34.0, 0.0)))
    );
    assert_eq!(source.total_observed(), 1);
}

#[test]
fn ownership_stays_with_the_first_provider() {
    // A source visible only below the owning provider is never bound: the
    // inner provider inherits because a context exists, not because the
    // ancestor has resolved anything.
    let source = MockInsetSource::default();
    let inner = SafeAreaProvider::new(()).with(InsetSource::new(source.clone()));
    let _tree = mount(&Environment::new(), SafeAreaProvider::new(inner));

    assert_eq!(source.total_observed(), 0);
}

// ============================================================================
// Snapshot Flow
// ============================================================================

#[test]
fn snapshots_replace_wholesale_and_follow_rotation() {
    let source = MockInsetSource::default();
    let env = sourced_env(&source);
    let probe = EnvProbe::new();
    let _tree = mount(&env, SafeAreaProvider::new(probe.clone()));

    let seen = probe.seen();
    assert_eq!(try_safe_area(&seen).unwrap_err(), SafeAreaError::Unresolved);

    source.send(SafeAreaEvent::Insets(EdgeInsets::new(44.0, 0.0, 34.0, 0.0)));
    let insets = try_safe_area(&seen).expect("resolved after the first report");
    assert_eq!(insets.get(), EdgeInsets::new(44.0, 0.0, 34.0, 0.0));

    let log: Rc<RefCell<Vec<EdgeInsets>>> = Rc::default();
    let sink = Rc::clone(&log);
    let _guard = insets.watch(move |ctx| sink.borrow_mut().push(*ctx.value()));

    source.send(SafeAreaEvent::Insets(EdgeInsets::new(0.0, 44.0, 0.0, 34.0)));
    assert_eq!(*log.borrow(), [EdgeInsets::new(0.0, 44.0, 0.0, 34.0)]);
    assert_eq!(insets.get(), EdgeInsets::new(0.0, 44.0, 0.0, 34.0));
}

#[test]
fn frame_reports_ride_along_with_insets() {
    let source = MockInsetSource::default();
    let env = sourced_env(&source);
    let probe = EnvProbe::new();
    let _tree = mount(&env, SafeAreaProvider::new(probe.clone()));

    source.send(SafeAreaEvent::Frame(SurfaceSize::new(390.0, 844.0)));
    let seen = probe.seen();
    let context = seen.get::<SafeAreaContext>().expect("context installed");
    assert_eq!(context.snapshot(), None, "a frame alone must not resolve");

    source.send(SafeAreaEvent::Insets(EdgeInsets::all(16.0)));
    assert_eq!(
        context.snapshot(),
        Some(
            SafeAreaSnapshot::new(EdgeInsets::all(16.0))
                .with_surface(SurfaceSize::new(390.0, 844.0))
        )
    );
}

#[test]
fn equal_reports_still_notify_watchers() {
    let source = MockInsetSource::default();
    let env = sourced_env(&source);
    let probe = EnvProbe::new();
    let _tree = mount(&env, SafeAreaProvider::new(probe.clone()));

    source.send(SafeAreaEvent::Insets(EdgeInsets::all(8.0)));
    let seen = probe.seen();
    let insets = try_safe_area(&seen).expect("resolved");

    let notified = Rc::new(Cell::new(0));
    let sink = Rc::clone(&notified);
    let _guard = insets.watch(move |_| sink.set(sink.get() + 1));

    source.send(SafeAreaEvent::Insets(EdgeInsets::all(8.0)));
    source.send(SafeAreaEvent::Insets(EdgeInsets::all(8.0)));
    assert_eq!(notified.get(), 2);
}

#[test]
fn seeded_provider_is_resolved_before_any_report() {
    let source = MockInsetSource::default();
    let env = sourced_env(&source);
    let probe = EnvProbe::new();
    let _tree = mount(
        &env,
        SafeAreaProvider::new(probe.clone()).initial(EdgeInsets::new(47.0, 0.0, 34.0, 0.0)),
    );

    let seen = probe.seen();
    let insets = try_safe_area(&seen).expect("seed resolves the context");
    assert_eq!(insets.get(), EdgeInsets::new(47.0, 0.0, 34.0, 0.0));

    source.send(SafeAreaEvent::Insets(EdgeInsets::ZERO));
    assert_eq!(insets.get(), EdgeInsets::ZERO, "the first report replaces the seed");
}

// ============================================================================
// Consumers
// ============================================================================

#[test]
#[should_panic(expected = "no safe area value available")]
fn loud_accessor_panics_without_a_provider() {
    let _ = safe_area(&Environment::new());
}

#[test]
fn headless_composition_stays_unresolved() {
    let probe = EnvProbe::new();
    let _tree = mount(&Environment::new(), SafeAreaProvider::new(probe.clone()));

    let seen = probe.seen();
    assert_eq!(try_safe_area(&seen).unwrap_err(), SafeAreaError::Unresolved);
}

#[test]
fn padding_sites_follow_later_reports() {
    let source = MockInsetSource::default();
    let env = sourced_env(&source);

    let tree = mount(&env, SafeAreaProvider::new(().safe_area()));
    let sites = tree.padding_sites();
    assert_eq!(sites.len(), 1);
    assert_eq!(sites[0].padding.get(), EdgeInsets::ZERO);

    source.send(SafeAreaEvent::Insets(EdgeInsets::new(44.0, 0.0, 34.0, 0.0)));
    assert_eq!(sites[0].padding.get(), EdgeInsets::new(44.0, 0.0, 34.0, 0.0));
}

// ============================================================================
// Teardown
// ============================================================================

#[test]
fn unmount_releases_the_subscription() {
    let source = MockInsetSource::default();
    let env = sourced_env(&source);
    let probe = EnvProbe::new();
    let tree = mount(&env, SafeAreaProvider::new(probe.clone()));

    let seen = probe.seen();
    let context = seen
        .get::<SafeAreaContext>()
        .cloned()
        .expect("context installed");

    source.send(SafeAreaEvent::Insets(EdgeInsets::all(5.0)));
    assert_eq!(source.live_observers(), 1);

    drop(tree);
    assert_eq!(source.live_observers(), 0);

    source.send(SafeAreaEvent::Insets(EdgeInsets::all(99.0)));
    assert_eq!(
        context.snapshot(),
        Some(SafeAreaSnapshot::new(EdgeInsets::all(5.0))),
        "events after unmount must not publish"
    );
}
