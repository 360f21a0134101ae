use super::*;

#[test]
fn test_span_measures() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert!(span.contains(10));
    assert!(span.contains(19));
    assert!(!span.contains(20));
}

#[test]
fn test_merge_is_order_independent() {
    let a = Span::new(20, 30);
    let b = Span::new(10, 25);
    assert_eq!(a.merge(b), Span::new(10, 30));
    assert_eq!(b.merge(a), a.merge(b));
}

#[test]
fn test_from_range_saturates() {
    let huge = u32::MAX as usize + 10;
    let span = Span::from_range(5..huge);
    assert_eq!((span.start, span.end), (5, u32::MAX));
    assert_eq!(Span::from_range(3..7).to_range(), 3..7);
}

#[test]
fn test_point_is_empty() {
    let point = Span::point(42);
    assert!(point.is_empty());
    assert!(!point.contains(42));
    assert_eq!(Span::default(), Span::DUMMY);
    assert_eq!(format!("{point:?}"), "42..42");
}
