use std::cell::Cell;

use super::*;

#[test]
fn disabled_renders_once() {
    let calls = Cell::new(0);
    let out = strict_mode(false, || {
        calls.set(calls.get() + 1);
        calls.get()
    });
    assert_eq!(calls.get(), 1);
    assert_eq!(out, 1);
}

#[test]
fn enabled_double_renders_in_debug_builds() {
    let calls = Cell::new(0);
    let out = strict_mode(true, || {
        calls.set(calls.get() + 1);
        calls.get()
    });
    let expected = if cfg!(debug_assertions) { 2 } else { 1 };
    assert_eq!(calls.get(), expected);
    assert_eq!(out, expected);
}

#[test]
fn wrapped_shell_matches_plain_shell() {
    let wrapped = strict_mode(true, crate::app::render_static_html);
    assert_eq!(wrapped, crate::app::render_static_html());
}
