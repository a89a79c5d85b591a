//! Tests of the process-wide session. They share one registry, so each
//! holds `LOCK` and starts from `reset_global`.

use std::sync::{Arc, Mutex, MutexGuard};
use std::sync::atomic::{AtomicUsize, Ordering};

use acss::utilities::{bg, p};
use acss::{cx, dcx, dynamic, generate_css, on_change, reset_global, unsubscribe, with_session};

static LOCK: Mutex<()> = Mutex::new(());

fn isolated() -> MutexGuard<'static, ()> {
    let guard = LOCK.lock().unwrap_or_else(|e| e.into_inner());
    reset_global();
    guard
}

#[test]
fn free_functions_share_one_registry() {
    let _guard = isolated();
    let a = cx([p(4)]);
    let b = cx([bg("white")]);
    let generated = generate_css();
    assert!(generated.contains(&format!(".{} {{", a)));
    assert!(generated.contains(&format!(".{} {{", b)));
    assert_eq!(with_session(|s| s.registry().len()), 2);
}

#[test]
fn reset_restarts_counters() {
    let _guard = isolated();
    let first = dynamic("red");
    cx([p(1)]);
    reset_global();
    let second = dynamic("blue");
    assert_eq!(first.id(), second.id());
    assert_eq!(generate_css(), "");
}

#[test]
fn dynamic_binding_through_the_global_session() {
    let _guard = isolated();
    let color = dynamic("#ff0000");
    let result = dcx([bg(color)]);
    assert_eq!(result.style.get("--twc-d0").map(String::as_str), Some("#ff0000"));
    assert!(generate_css().contains("background-color: var(--twc-d0);"));
}

#[test]
fn listeners_fire_once_per_new_class() {
    let _guard = isolated();
    let hits = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&hits);
    let id = on_change(move || {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    cx([p(2), bg("black")]);
    cx([p(2), bg("black")]);
    assert!(unsubscribe(id));
    cx([p(3)]);

    assert_eq!(hits.load(Ordering::SeqCst), 2);
}
