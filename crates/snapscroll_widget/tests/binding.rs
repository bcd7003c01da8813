//! Integration tests for binding, pagination markup, and the two animation
//! strategies.

use std::cell::RefCell;
use std::rc::Rc;

use snapscroll_core::{Axis, DomAdapter, InputEvent, MockDom};
use snapscroll_animation::Strategy;
use snapscroll_widget::{Command, ScrollConfig, ScrollRegistry, AUTO_BIND_ATTR};

#[test]
fn rebinding_keeps_the_first_configuration() {
    let mut dom = MockDom::new();
    let container = dom.stacked(3, 500.0, Axis::Vertical);
    let mut registry = ScrollRegistry::new(&dom);

    registry.bind(&mut dom, container, ScrollConfig::default());
    // Second bind with a different configuration is a no-op.
    let controller = registry.bind(
        &mut dom,
        container,
        ScrollConfig::default().loop_pages(true).index(2),
    );
    assert_eq!(controller.current_index(), 0);

    // Still the first configuration: prev at index 0 does not wrap.
    controller.handle_event(&mut dom, InputEvent::Wheel { delta: 1.0 });
    assert_eq!(controller.current_index(), 0);

    // Only one pagination list was appended.
    assert_eq!(dom.query_all(container, ".page").len(), 1);
}

#[test]
fn unbind_then_bind_creates_a_fresh_controller() {
    let mut dom = MockDom::new();
    let container = dom.stacked(3, 500.0, Axis::Vertical);
    let mut registry = ScrollRegistry::new(&dom);

    registry.bind(&mut dom, container, ScrollConfig::default());
    registry.dispatch(&mut dom, container, Command::Next);
    assert!(registry.is_bound(container));

    assert!(registry.unbind(container).is_some());
    assert!(!registry.is_bound(container));
    assert!(registry.unbind(container).is_none());

    let controller = registry.bind(&mut dom, container, ScrollConfig::default());
    assert_eq!(controller.current_index(), 0);
}

#[test]
fn auto_bind_picks_up_marked_containers() {
    let mut dom = MockDom::new();
    let first = dom.stacked(2, 500.0, Axis::Vertical);
    let second = dom.stacked(3, 500.0, Axis::Vertical);
    let unmarked = dom.stacked(2, 500.0, Axis::Vertical);
    dom.set_attribute(first, AUTO_BIND_ATTR);
    dom.set_attribute(second, AUTO_BIND_ATTR);

    let mut registry = ScrollRegistry::new(&dom);
    registry.auto_bind(&mut dom);

    assert!(registry.is_bound(first));
    assert!(registry.is_bound(second));
    assert!(!registry.is_bound(unmarked));
    assert_eq!(registry.get(second).unwrap().page_count(), 3);
}

#[test]
fn pagination_markers_track_the_current_index() {
    let mut dom = MockDom::new();
    let container = dom.stacked(4, 500.0, Axis::Vertical);
    let mut registry = ScrollRegistry::new(&dom);
    let controller = registry.bind(&mut dom, container, ScrollConfig::default());

    let markers = controller.markers().to_vec();
    assert_eq!(markers.len(), 4);
    let active_count = |dom: &MockDom| {
        markers
            .iter()
            .filter(|&&marker| dom.has_class(marker, "active"))
            .count()
    };
    assert!(dom.has_class(markers[0], "active"));
    assert_eq!(active_count(&dom), 1);

    controller.handle_event(&mut dom, InputEvent::Wheel { delta: -1.0 });
    controller.tick(&mut dom, 600.0);
    assert!(dom.has_class(markers[1], "active"));
    assert_eq!(active_count(&dom), 1);

    controller.handle_event(&mut dom, InputEvent::PaginationClick { item: 3 });
    controller.tick(&mut dom, 600.0);
    assert!(dom.has_class(markers[3], "active"));
    assert_eq!(active_count(&dom), 1);
}

#[test]
fn pagination_can_be_disabled() {
    let mut dom = MockDom::new();
    let container = dom.stacked(3, 500.0, Axis::Vertical);
    let mut registry = ScrollRegistry::new(&dom);
    let controller = registry.bind(&mut dom, container, ScrollConfig::default().pagination(false));

    assert!(controller.markers().is_empty());
    assert!(dom.query(container, ".page").is_none());
}

#[test]
fn pagination_list_carries_orientation_class() {
    let mut dom = MockDom::new();
    let container = dom.stacked(3, 500.0, Axis::Vertical);
    let mut registry = ScrollRegistry::new(&dom);
    registry.bind(&mut dom, container, ScrollConfig::default());

    let list = dom.query(container, ".page").unwrap();
    assert!(dom.has_class(list, "vertical"));
}

#[test]
fn horizontal_bind_presizes_wrapper_and_sections() {
    let mut dom = MockDom::new();
    let container = dom.stacked(4, 800.0, Axis::Horizontal);
    let wrapper = dom.query(container, ".sections").unwrap();
    let mut registry = ScrollRegistry::new(&dom);
    let controller = registry.bind(
        &mut dom,
        container,
        ScrollConfig::default().direction(Axis::Horizontal),
    );
    let sections = controller.sections().to_vec();

    assert_eq!(dom.css(wrapper, "width").as_deref(), Some("400%"));
    for section in sections {
        assert_eq!(dom.css(section, "width").as_deref(), Some("25.00%"));
        assert_eq!(dom.css(section, "float").as_deref(), Some("left"));
    }

    let list = dom.query(container, ".page").unwrap();
    assert!(dom.has_class(list, "horizontal"));
}

#[test]
fn wrapper_positioning_is_forced_relative() {
    let mut dom = MockDom::new();
    let container = dom.stacked(3, 500.0, Axis::Vertical);
    let wrapper = dom.query(container, ".sections").unwrap();
    dom.set_css(wrapper, "position", "static");

    let mut registry = ScrollRegistry::new(&dom);
    registry.bind(&mut dom, container, ScrollConfig::default());
    assert_eq!(dom.css(wrapper, "position").as_deref(), Some("relative"));
}

#[test]
fn declarative_strategy_uses_platform_transitions() {
    let mut dom = MockDom::with_transitions();
    let container = dom.stacked(3, 500.0, Axis::Vertical);
    let wrapper = dom.query(container, ".sections").unwrap();

    let mut registry = ScrollRegistry::new(&dom);
    assert_eq!(registry.strategy(), Strategy::Declarative);

    let fired = Rc::new(RefCell::new(0u32));
    let after_count = Rc::clone(&fired);
    let config =
        ScrollConfig::default().on_after_scroll(move |_, _| *after_count.borrow_mut() += 1);
    let controller = registry.bind(&mut dom, container, config);

    controller.handle_event(&mut dom, InputEvent::Wheel { delta: -1.0 });
    assert!(controller.is_locked());
    assert_eq!(
        dom.css(wrapper, "transition").as_deref(),
        Some("all 500ms ease")
    );
    assert_eq!(
        dom.css(wrapper, "transform").as_deref(),
        Some("translateY(-500px)")
    );

    // Frame ticks do not complete declarative transitions.
    controller.tick(&mut dom, 600.0);
    assert!(controller.is_locked());

    controller.on_transition_end();
    assert!(!controller.is_locked());
    assert_eq!(*fired.borrow(), 1);
}

#[test]
fn stale_transition_end_is_ignored_after_override() {
    let mut dom = MockDom::with_transitions();
    let container = dom.stacked(4, 500.0, Axis::Vertical);
    let mut registry = ScrollRegistry::new(&dom);
    let controller = registry.bind(&mut dom, container, ScrollConfig::default());

    controller.handle_event(&mut dom, InputEvent::Wheel { delta: -1.0 });
    // Manual override supersedes the slide toward index 1.
    controller.handle_event(&mut dom, InputEvent::PaginationClick { item: 2 });
    assert_eq!(controller.current_index(), 2);

    // One platform signal completes the overriding transition.
    controller.on_transition_end();
    assert!(!controller.is_locked());
    assert_eq!(controller.current_index(), 2);

    // A stray duplicate signal changes nothing.
    controller.on_transition_end();
    assert!(!controller.is_locked());
    assert_eq!(controller.current_index(), 2);
}

#[test]
fn dispatch_drives_bound_containers_by_command() {
    let mut dom = MockDom::new();
    let container = dom.stacked(4, 500.0, Axis::Vertical);
    let mut registry = ScrollRegistry::new(&dom);
    registry.bind(&mut dom, container, ScrollConfig::default());

    registry.dispatch(&mut dom, container, Command::Next);
    registry.tick_all(&mut dom, 600.0);
    assert_eq!(registry.get(container).unwrap().current_index(), 1);

    registry.dispatch(&mut dom, container, Command::Goto(3));
    registry.tick_all(&mut dom, 600.0);
    assert_eq!(registry.get(container).unwrap().current_index(), 3);

    registry.dispatch(&mut dom, container, Command::Prev);
    registry.tick_all(&mut dom, 600.0);
    assert_eq!(registry.get(container).unwrap().current_index(), 2);
}
