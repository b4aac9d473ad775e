//! Integration tests for column and page flow: advancing sections, orphan
//! avoidance, paint-state reapplication, and the event protocol.

use pdf_flow::flow::{WrapOutcome, Wrapper};
use pdf_flow::{Colour, Pt, TextOptions, WrapOptions};

mod common;
use common::{Event, Recorder, TestSurface};

/// Two columns, two lines each: flow fills the first column, breaks to the
/// second, then requests a page and starts over at column one.
#[test]
fn flows_down_columns_then_onto_a_new_page() {
    let mut surface = TestSurface::new(10.0, 10.0, 20.0);
    surface.fill = Colour::new_rgb(0.8, 0.1, 0.1);
    let mut sink = Recorder::default();
    let mut wrapper = Wrapper::new(
        &mut surface,
        &mut sink,
        &WrapOptions::columns(Pt(118.0), 2, Pt(18.0)),
    )
    .expect("valid configuration");

    let outcome = wrapper.wrap("aaaa bbbb cccc dddd eeee ffff", &TextOptions::default());

    assert_eq!(outcome, WrapOutcome::Complete);
    let texts: Vec<String> = sink.lines().into_iter().map(|(t, _)| t).collect();
    assert_eq!(texts, vec!["aaaa ", "bbbb ", "cccc ", "dddd ", "eeee ", "ffff"]);

    let positions: Vec<(f32, f32)> = sink
        .line_events()
        .iter()
        .map(|e| match e {
            Event::Line { x, y, .. } => (*x, *y),
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(
        positions,
        vec![
            (0.0, 0.0),
            (0.0, 10.0),
            // second column sits one line width plus the gap to the right
            (68.0, 0.0),
            (68.0, 10.0),
            // fresh page, back to the region's start x
            (0.0, 0.0),
            (0.0, 10.0),
        ]
    );
    assert_eq!(surface.pages, 2);
    // the page request resets paint state, so the active fill colour is
    // reapplied rather than falling back to the default
    assert!(surface.fill_applications >= 1);
    assert_eq!(surface.fill, Colour::new_rgb(0.8, 0.1, 0.1));
}

#[test]
fn section_events_are_balanced_and_ordered() {
    let mut surface = TestSurface::new(10.0, 10.0, 20.0);
    let mut sink = Recorder::default();
    let mut wrapper = Wrapper::new(
        &mut surface,
        &mut sink,
        &WrapOptions::columns(Pt(118.0), 2, Pt(18.0)),
    )
    .expect("valid configuration");

    wrapper.wrap("aaaa bbbb cccc dddd eeee ffff", &TextOptions::default());

    assert_eq!(sink.events.first(), Some(&Event::SectionStart));
    assert_eq!(sink.events.last(), Some(&Event::SectionEnd));

    let starts = sink
        .events
        .iter()
        .filter(|e| matches!(e, Event::SectionStart))
        .count();
    let ends = sink
        .events
        .iter()
        .filter(|e| matches!(e, Event::SectionEnd))
        .count();
    assert_eq!(starts, ends);

    // every break is bracketed by an end and a start
    for (i, event) in sink.events.iter().enumerate() {
        if matches!(event, Event::ColumnBreak | Event::PageBreak) {
            assert_eq!(sink.events[i - 1], Event::SectionEnd);
            assert_eq!(sink.events[i + 1], Event::SectionStart);
        }
    }
}

/// The pre-check at the top of a wrap call moves to a fresh page rather than
/// stranding the first line of a region at the bottom of one.
#[test]
fn orphan_line_moves_to_the_next_page_before_any_content() {
    let mut surface = TestSurface::new(10.0, 10.0, 200.0);
    surface.y = Pt(195.0);
    let mut sink = Recorder::default();
    let mut wrapper = Wrapper::new(&mut surface, &mut sink, &WrapOptions::new(Pt(200.0)))
        .expect("valid configuration");

    wrapper.wrap("short text", &TextOptions::default());

    assert_eq!(surface.pages, 2);
    assert_eq!(sink.events.first(), Some(&Event::PageBreak));
    match sink.line_events()[0] {
        Event::Line { y, .. } => assert_eq!(*y, 0.0),
        _ => unreachable!(),
    }
}

/// A bounded region with no room for even one line emits nothing at all.
#[test]
fn bounded_region_with_no_room_refuses_before_any_content() {
    let mut surface = TestSurface::new(10.0, 10.0, 1000.0);
    let mut sink = Recorder::default();
    let mut wrapper = Wrapper::new(
        &mut surface,
        &mut sink,
        &WrapOptions::bounded(Pt(200.0), Pt(5.0)),
    )
    .expect("valid configuration");

    let outcome = wrapper.wrap("no room at all", &TextOptions::default());

    assert_eq!(outcome, WrapOutcome::OutOfSpace);
    assert!(sink.events.is_empty());
}

/// Long-form text flows across as many pages as it needs, loses nothing,
/// and never overflows a line.
#[test]
fn long_text_paginates_without_loss() {
    let text = lipsum::lipsum(200);
    let mut surface = TestSurface::new(10.0, 10.0, 200.0);
    let mut sink = Recorder::default();
    let mut wrapper = Wrapper::new(&mut surface, &mut sink, &WrapOptions::new(Pt(300.0)))
        .expect("valid configuration");

    let outcome = wrapper.wrap(&text, &TextOptions::default());

    assert_eq!(outcome, WrapOutcome::Complete);
    assert!(surface.pages > 1, "expected the text to fill several pages");
    assert_eq!(sink.joined(), text);
    for (line, width) in sink.lines() {
        assert!(width <= 300.0, "line {line:?} overflows its column");
    }
}
