use crate::lib_test::{jd, setup_logging};
use rat_jalali::calendar::selection::{RangeSelection, SingleSelection};
use rat_jalali::calendar::{classify, normalize_range, CalendarSelection, DayKind};
use std::cell::RefCell;
use std::rc::Rc;

mod lib_test;

#[test]
fn test_classify() {
    let start = jd(1403, 1, 1);
    let end = jd(1403, 1, 10);

    assert_eq!(classify(jd(1403, 1, 5), start, Some(end)), DayKind::Between);
    assert_eq!(classify(start, start, Some(end)), DayKind::Start);
    assert_eq!(classify(end, start, Some(end)), DayKind::End);
    assert_eq!(classify(jd(1403, 2, 1), start, Some(end)), DayKind::None);
    assert_eq!(classify(jd(1402, 12, 29), start, Some(end)), DayKind::None);

    // open range
    assert_eq!(classify(start, start, None), DayKind::Start);
    assert_eq!(classify(jd(1403, 1, 5), start, None), DayKind::None);

    // one day range
    assert_eq!(classify(start, start, Some(start)), DayKind::Start);

    // across the year boundary
    let start = jd(1402, 12, 25);
    let end = jd(1403, 1, 3);
    assert_eq!(classify(jd(1402, 12, 29), start, Some(end)), DayKind::Between);
    assert_eq!(classify(jd(1403, 1, 1), start, Some(end)), DayKind::Between);
    assert_eq!(classify(jd(1403, 1, 4), start, Some(end)), DayKind::None);

    assert!(DayKind::Between.is_selected());
    assert!(!DayKind::None.is_selected());
}

#[test]
fn test_normalize_range() {
    let a = jd(1403, 1, 10);
    let b = jd(1402, 12, 1);
    assert_eq!(normalize_range(a, b), (b, a));
    assert_eq!(normalize_range(b, a), (b, a));
    assert_eq!(normalize_range(a, a), (a, a));
}

#[test]
fn test_range_picks() {
    setup_logging();

    let mut sel = RangeSelection::new();
    assert_eq!(sel.count(), 0);
    assert_eq!(sel.selected(), None);

    assert!(sel.pick(jd(1403, 1, 10), true));
    assert_eq!(sel.selected(), Some((jd(1403, 1, 10), None)));
    assert_eq!(sel.count(), 1);
    assert!(!sel.is_complete());
    assert_eq!(sel.classify(jd(1403, 1, 10)), DayKind::Start);

    // second pick before the first swaps.
    assert!(sel.pick(jd(1403, 1, 5), true));
    assert_eq!(sel.start(), Some(jd(1403, 1, 5)));
    assert_eq!(sel.end(), Some(jd(1403, 1, 10)));
    assert!(sel.is_complete());
    assert_eq!(sel.count(), 6);
    assert_eq!(sel.lead_selection(), Some(jd(1403, 1, 10)));
    assert_eq!(sel.classify(jd(1403, 1, 7)), DayKind::Between);
    assert!(sel.is_selected(jd(1403, 1, 5)));
    assert!(sel.is_selected(jd(1403, 1, 10)));
    assert!(!sel.is_selected(jd(1403, 1, 11)));
    assert_eq!(sel.selected_range(), Some(jd(1403, 1, 5)..=jd(1403, 1, 10)));

    // third pick starts over.
    assert!(sel.pick(jd(1403, 3, 1), true));
    assert_eq!(sel.selected(), Some((jd(1403, 3, 1), None)));
    assert_eq!(sel.selected_range(), Some(jd(1403, 3, 1)..=jd(1403, 3, 1)));

    // without range mode every pick starts over.
    assert!(sel.pick(jd(1403, 3, 2), false));
    assert_eq!(sel.selected(), Some((jd(1403, 3, 2), None)));
    assert!(!sel.pick(jd(1403, 3, 2), false));

    sel.clear();
    assert_eq!(sel.count(), 0);
    assert_eq!(sel.classify(jd(1403, 3, 2)), DayKind::None);
}

#[test]
fn test_range_select() {
    let mut sel = RangeSelection::with_range(jd(1403, 2, 1), Some(jd(1403, 1, 1)));
    assert_eq!(sel.start(), Some(jd(1403, 1, 1)));
    assert_eq!(sel.end(), Some(jd(1403, 2, 1)));
    assert_eq!(sel.count(), 32);

    assert!(!sel.select(jd(1403, 1, 1), Some(jd(1403, 2, 1))));
    assert!(sel.select(jd(1403, 1, 1), None));
    assert_eq!(sel.end(), None);
}

#[test]
fn test_single() {
    let mut sel = SingleSelection::new();
    assert_eq!(sel.count(), 0);
    assert!(sel.select(jd(1403, 1, 1)));
    assert!(!sel.select(jd(1403, 1, 1)));
    assert_eq!(sel.selected(), Some(jd(1403, 1, 1)));
    assert!(sel.is_selected(jd(1403, 1, 1)));
    assert!(!sel.is_selected(jd(1403, 1, 2)));
    assert_eq!(sel.count(), 1);
    sel.clear();
    assert_eq!(sel.lead_selection(), None);

    let sel = SingleSelection::with_selected(jd(1400, 5, 5));
    assert_eq!(sel.lead_selection(), Some(jd(1400, 5, 5)));
}

#[test]
fn test_shared() {
    let sel = Rc::new(RefCell::new(RangeSelection::new()));
    let other = sel.clone();

    sel.borrow_mut().pick(jd(1403, 1, 1), true);
    other.borrow_mut().pick(jd(1403, 1, 3), true);

    assert_eq!(sel.count(), 3);
    assert!(other.is_selected(jd(1403, 1, 2)));
    assert_eq!(sel.lead_selection(), Some(jd(1403, 1, 3)));
}
