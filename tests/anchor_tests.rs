// Host-side tests for the offset-parent walk.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod anchor {
    include!("../src/anchor.rs");
}

use anchor::*;
use std::cell::Cell;

struct Node<'a> {
    top: f64,
    height: f64,
    parent: Option<&'a Node<'a>>,
}

impl<'a> OffsetNode for &'a Node<'a> {
    fn offset_top(&self) -> f64 {
        self.top
    }
    fn offset_height(&self) -> f64 {
        self.height
    }
    fn offset_parent(&self) -> Option<Self> {
        self.parent
    }
}

#[test]
fn detached_node_uses_own_offset() {
    let node = Node {
        top: 120.0,
        height: 40.0,
        parent: None,
    };
    assert_eq!(document_top(&&node), 120.0);
    assert_eq!(anchor_y(&&node), 140.0);
}

#[test]
fn offsets_accumulate_along_parent_chain() {
    let body = Node {
        top: 0.0,
        height: 5000.0,
        parent: None,
    };
    let section = Node {
        top: 800.0,
        height: 1200.0,
        parent: Some(&body),
    };
    let card = Node {
        top: 150.0,
        height: 300.0,
        parent: Some(&section),
    };
    let img = Node {
        top: 25.0,
        height: 100.0,
        parent: Some(&card),
    };
    assert_eq!(document_top(&&img), 975.0);
    assert_eq!(anchor_y(&&img), 1025.0);
}

#[test]
fn anchor_is_idempotent_for_static_tree() {
    let root = Node {
        top: 10.0,
        height: 2000.0,
        parent: None,
    };
    let el = Node {
        top: 333.5,
        height: 77.0,
        parent: Some(&root),
    };
    let first = anchor_y(&&el);
    let second = anchor_y(&&el);
    assert_eq!(first, second);
}

#[test]
fn long_parent_chains_are_summed() {
    let depth = 10_000;
    let mut cursor: Option<&'static Node<'static>> = None;
    for _ in 0..depth {
        let node: &'static Node<'static> = Box::leak(Box::new(Node {
            top: 1.0,
            height: 2.0,
            parent: cursor,
        }));
        cursor = Some(node);
    }
    let leaf = cursor.unwrap();
    assert_eq!(document_top(&leaf), depth as f64);
    assert_eq!(anchor_y(&leaf), depth as f64 + 1.0);
}

struct Counting<'a> {
    reads: &'a Cell<usize>,
    remaining: usize,
}

impl<'a> OffsetNode for Counting<'a> {
    fn offset_top(&self) -> f64 {
        self.reads.set(self.reads.get() + 1);
        10.0
    }
    fn offset_height(&self) -> f64 {
        0.0
    }
    fn offset_parent(&self) -> Option<Self> {
        (self.remaining > 0).then(|| Counting {
            reads: self.reads,
            remaining: self.remaining - 1,
        })
    }
}

#[test]
fn each_ancestor_is_read_once() {
    let reads = Cell::new(0);
    let node = Counting {
        reads: &reads,
        remaining: 3,
    };
    assert_eq!(document_top(&node), 40.0);
    assert_eq!(reads.get(), 4);
}
