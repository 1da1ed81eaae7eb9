mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::FixedChip;
use tagflow::{FlowTagContainer, Point};

fn pressed_sink() -> (Rc<RefCell<Vec<String>>>, impl FnMut(&str) + 'static) {
    let pressed = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&pressed);
    (pressed, move |title: &str| sink.borrow_mut().push(title.to_owned()))
}

#[test]
fn press_inside_a_chip_forwards_its_title() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut container = FlowTagContainer::<FixedChip>::new();
    container.set_bounds_width(100.0);
    container.add_tag("aa"); // frame x 0..20
    container.add_tag("bbb"); // frame x 25..55
    container.layout_if_needed();

    let (pressed, listener) = pressed_sink();
    container.on_tag_pressed(listener);

    assert!(container.press_at(Point { x: 5.0, y: 5.0 }));
    assert!(container.press_at(Point { x: 26.0, y: 5.0 }));
    assert_eq!(*pressed.borrow(), vec!["aa".to_owned(), "bbb".to_owned()]);
}

#[test]
fn press_between_chips_misses() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut container = FlowTagContainer::<FixedChip>::new();
    container.set_bounds_width(100.0);
    container.add_tag("aa");
    container.add_tag("bbb");
    container.layout_if_needed();

    let (pressed, listener) = pressed_sink();
    container.on_tag_pressed(listener);

    // The margin gap between the two chips.
    assert!(!container.press_at(Point { x: 22.0, y: 5.0 }));
    // Below the only row.
    assert!(!container.press_at(Point { x: 5.0, y: 50.0 }));
    assert!(pressed.borrow().is_empty());
}

#[test]
fn press_with_no_listener_is_a_safe_no_op() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut container = FlowTagContainer::<FixedChip>::new();
    container.set_bounds_width(100.0);
    container.add_tag("aa");
    container.layout_if_needed();

    // Still reports the hit; the notification is silently dropped.
    assert!(container.press_at(Point { x: 5.0, y: 5.0 }));
    container.forward_press("aa");
}

#[test]
fn last_assigned_listener_wins() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut container = FlowTagContainer::<FixedChip>::new();
    container.set_bounds_width(100.0);
    container.add_tag("aa");
    container.layout_if_needed();

    let (first, first_listener) = pressed_sink();
    let (second, second_listener) = pressed_sink();
    container.on_tag_pressed(first_listener);
    container.on_tag_pressed(second_listener);

    assert!(container.press_at(Point { x: 5.0, y: 5.0 }));
    assert!(first.borrow().is_empty(), "replaced listener never fires");
    assert_eq!(*second.borrow(), vec!["aa".to_owned()]);
}

#[test]
fn cleared_listener_drops_presses() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut container = FlowTagContainer::<FixedChip>::new();
    container.set_bounds_width(100.0);
    container.add_tag("aa");
    container.layout_if_needed();

    let (pressed, listener) = pressed_sink();
    container.on_tag_pressed(listener);
    container.clear_tag_pressed();

    assert!(container.press_at(Point { x: 5.0, y: 5.0 }));
    assert!(pressed.borrow().is_empty());
}

#[test]
fn duplicate_titles_forward_the_shared_text() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut container = FlowTagContainer::<FixedChip>::new();
    container.set_bounds_width(100.0);
    container.add_tag("dup"); // x 0..30
    container.add_tag("dup"); // x 35..65
    container.layout_if_needed();

    let (pressed, listener) = pressed_sink();
    container.on_tag_pressed(listener);

    assert!(container.press_at(Point { x: 40.0, y: 5.0 }));
    assert_eq!(*pressed.borrow(), vec!["dup".to_owned()]);
}
