//! Headless resolution of view trees.
//!
//! [`mount`] expands a view's `body` chain to its leaves, applying
//! environment injection on the way down and collecting everything the tree
//! asked to keep alive. The result owns the tree's retained resources, so
//! dropping it is the unmount signal: source subscriptions end and no
//! further snapshot is published.

use alloc::vec::Vec;

use waterline_core::{AnyView, Environment, Metadata, Native, Retain, View};
use waterline_reactive::Computed;

use crate::insets::EdgeInsets;
use crate::padding::InsetPadding;

/// Resolves `view` to its leaves under `env`.
#[must_use]
pub fn mount(env: &Environment, view: impl View) -> MountedTree {
    let mut walker = TreeWalker::default();
    walker.walk(AnyView::new(view), env, 0);
    walker.finish()
}

/// A fully resolved tree, alive until dropped.
#[derive(Debug, Default)]
pub struct MountedTree {
    sites: Vec<PaddingSite>,
    retained: Vec<Retain>,
}

impl MountedTree {
    /// The padding leaves encountered, outermost first.
    #[must_use]
    pub fn padding_sites(&self) -> &[PaddingSite] {
        &self.sites
    }
}

/// One padding leaf surfaced by the walk.
#[derive(Debug)]
pub struct PaddingSite {
    /// Number of enclosing padding leaves above this one.
    pub depth: usize,
    /// The leaf's live padding signal.
    pub padding: Computed<EdgeInsets>,
}

#[derive(Default)]
struct TreeWalker {
    sites: Vec<PaddingSite>,
    retained: Vec<Retain>,
}

impl TreeWalker {
    fn finish(self) -> MountedTree {
        MountedTree {
            sites: self.sites,
            retained: self.retained,
        }
    }

    fn walk(&mut self, view: AnyView, env: &Environment, depth: usize) {
        let view = match view.downcast::<()>() {
            Ok(_) => return,
            Err(view) => view,
        };

        // Environment injection swaps the environment for the subtree.
        let view = match view.downcast::<Metadata<Environment>>() {
            Ok(metadata) => {
                let metadata = *metadata;
                self.walk(metadata.content, &metadata.value, depth);
                return;
            }
            Err(view) => view,
        };

        let view = match view.downcast::<Metadata<Retain>>() {
            Ok(metadata) => {
                let metadata = *metadata;
                self.retained.push(metadata.value);
                self.walk(metadata.content, env, depth);
                return;
            }
            Err(view) => view,
        };

        let view = match view.downcast::<Native<InsetPadding>>() {
            Ok(native) => {
                let leaf = native.0;
                self.sites.push(PaddingSite {
                    depth,
                    padding: leaf.padding,
                });
                self.walk(leaf.content, env, depth + 1);
                return;
            }
            Err(view) => view,
        };

        // Default fallback: expand body and keep walking.
        let next = view.body(env);
        self.walk(AnyView::new(next), env, depth);
    }
}
