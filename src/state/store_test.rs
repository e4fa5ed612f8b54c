use super::*;

use std::cell::RefCell;
use std::rc::Rc;

fn recorder() -> (Rc<RefCell<Vec<i32>>>, impl FnMut(&i32) + 'static) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    (log, move |v: &i32| sink.borrow_mut().push(*v))
}

// =============================================================
// Value access
// =============================================================

#[test]
fn get_returns_initial_value() {
    let store = Store::new(7);
    assert_eq!(store.get(), 7);
}

#[test]
fn set_replaces_value() {
    let store = Store::new(1);
    store.set(2);
    assert_eq!(store.get(), 2);
}

#[test]
fn update_mutates_in_place() {
    let store = Store::new(vec![1, 2]);
    store.update(|v| v.push(3));
    assert_eq!(store.get(), vec![1, 2, 3]);
}

#[test]
fn clones_share_state() {
    let a = Store::new(0);
    let b = a.clone();
    b.set(9);
    assert_eq!(a.get(), 9);
}

#[test]
fn default_uses_type_default() {
    let store: Store<Option<String>> = Store::default();
    assert!(store.get().is_none());
}

// =============================================================
// Subscription delivery
// =============================================================

#[test]
fn subscriber_not_called_at_subscribe_time() {
    let store = Store::new(1);
    let (log, cb) = recorder();
    let _sub = store.subscribe(cb);
    assert!(log.borrow().is_empty());
}

#[test]
fn subscribers_notified_in_subscription_order() {
    let store = Store::new(0);
    let order = Rc::new(RefCell::new(Vec::new()));

    for tag in ["first", "second", "third"] {
        let order = Rc::clone(&order);
        let _ = store.subscribe(move |_| order.borrow_mut().push(tag));
    }

    store.set(1);
    assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
}

#[test]
fn subscriber_receives_new_value() {
    let store = Store::new(0);
    let (log, cb) = recorder();
    let _sub = store.subscribe(cb);
    store.set(5);
    store.set(6);
    assert_eq!(*log.borrow(), vec![5, 6]);
}

#[test]
fn unsubscribe_stops_notifications() {
    let store = Store::new(0);
    let (log, cb) = recorder();
    let sub = store.subscribe(cb);
    store.set(1);
    sub.unsubscribe();
    store.set(2);
    assert_eq!(*log.borrow(), vec![1]);
}

#[test]
fn dropped_handle_keeps_subscription_alive() {
    let store = Store::new(0);
    let (log, cb) = recorder();
    drop(store.subscribe(cb));
    store.set(1);
    assert_eq!(*log.borrow(), vec![1]);
}

// =============================================================
// Reentrancy during notification
// =============================================================

#[test]
fn unsubscribing_another_mid_pass_skips_it() {
    let store = Store::new(0);
    let (log, cb) = recorder();

    // First subscriber cancels the second during the pass.
    let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&victim);
    let _killer = store.subscribe(move |_| {
        if let Some(sub) = slot.borrow_mut().take() {
            sub.unsubscribe();
        }
    });
    *victim.borrow_mut() = Some(store.subscribe(cb));

    store.set(1);
    store.set(2);
    assert!(log.borrow().is_empty());
}

#[test]
fn subscribing_mid_pass_defers_to_next_set() {
    let store = Store::new(0);
    let log = Rc::new(RefCell::new(Vec::new()));

    let inner_log = Rc::clone(&log);
    let added = Rc::new(RefCell::new(false));
    let flag = Rc::clone(&added);
    let inner_store = store.clone();
    let _sub = store.subscribe(move |_| {
        if !*flag.borrow() {
            *flag.borrow_mut() = true;
            let inner_log = Rc::clone(&inner_log);
            // Leak the handle; the subscription stays alive.
            drop(inner_store.subscribe(move |v: &i32| inner_log.borrow_mut().push(*v)));
        }
    });

    store.set(1);
    assert!(log.borrow().is_empty());
    store.set(2);
    assert_eq!(*log.borrow(), vec![2]);
}

#[test]
fn reentrant_set_skips_running_callback() {
    let store = Store::new(0);
    let calls = Rc::new(RefCell::new(0));

    let count = Rc::clone(&calls);
    let inner = store.clone();
    let _sub = store.subscribe(move |v: &i32| {
        *count.borrow_mut() += 1;
        if *v < 2 {
            inner.set(v + 1);
        }
    });

    store.set(1);
    assert_eq!(store.get(), 2);
    // The nested pass must not re-enter the callback already running.
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn unsubscribe_after_store_dropped_is_harmless() {
    let store = Store::new(0);
    let sub = store.subscribe(|_: &i32| {});
    drop(store);
    sub.unsubscribe();
}
