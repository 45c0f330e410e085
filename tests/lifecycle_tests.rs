// Host-side tests for controller lifetime and listener bookkeeping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/lifecycle.rs");
}

use lifecycle::{KeepAlive, Subscription};
use std::cell::RefCell;
use std::rc::Rc;

struct Controller {
    keep_alive: KeepAlive<RefCell<Controller>>,
}

fn spawn() -> std::rc::Weak<RefCell<Controller>> {
    let c = Rc::new(RefCell::new(Controller {
        keep_alive: KeepAlive::default(),
    }));
    c.borrow_mut().keep_alive.hold(c.clone());
    Rc::downgrade(&c)
    // the only external handle is dropped here
}

#[test]
fn controller_outlives_dropped_handles() {
    let weak = spawn();
    assert!(weak.upgrade().is_some());
    let many: Vec<_> = (0..3).map(|_| spawn()).collect();
    assert!(many.iter().all(|w| w.upgrade().is_some()));
}

#[test]
fn release_lets_the_controller_go() {
    let weak = spawn();
    let strong = weak.upgrade().unwrap();
    let released = strong.borrow_mut().keep_alive.release();
    assert!(released.is_some());
    drop(released);
    drop(strong);
    assert!(weak.upgrade().is_none());
}

#[test]
fn release_twice_is_harmless() {
    let weak = spawn();
    let strong = weak.upgrade().unwrap();
    let first = strong.borrow_mut().keep_alive.release();
    let second = strong.borrow_mut().keep_alive.release();
    assert!(first.is_some());
    assert!(second.is_none());
}

#[test]
fn attach_runs_once_until_detached() {
    let mut sub = Subscription::default();
    let mut attaches = 0;
    let mut detaches = 0;
    for _ in 0..3 {
        sub.attach(|| {
            attaches += 1;
            Ok::<_, ()>(())
        })
        .unwrap();
    }
    assert_eq!(attaches, 1);
    sub.detach(|| detaches += 1);
    sub.detach(|| detaches += 1);
    assert_eq!(detaches, 1);
    sub.attach(|| {
        attaches += 1;
        Ok::<_, ()>(())
    })
    .unwrap();
    assert_eq!(attaches, 2);
}

#[test]
fn detach_before_attach_is_a_no_op() {
    let mut sub = Subscription::default();
    let mut detaches = 0;
    sub.detach(|| detaches += 1);
    assert_eq!(detaches, 0);
}

#[test]
fn failed_attach_leaves_subscription_detached() {
    let mut sub = Subscription::default();
    assert_eq!(sub.attach(|| Err("listener refused")), Err("listener refused"));

    let mut detaches = 0;
    sub.detach(|| detaches += 1);
    assert_eq!(detaches, 0);

    let mut attaches = 0;
    sub.attach(|| {
        attaches += 1;
        Ok::<_, &str>(())
    })
    .unwrap();
    assert_eq!(attaches, 1);
}
