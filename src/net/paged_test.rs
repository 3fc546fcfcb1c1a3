use super::*;

#[test]
fn first_page_uses_the_first_block() {
    let w = PageWindow::for_page(0, 10);
    assert_eq!(w.offset, 0);
    assert_eq!(w.limit, 50);
    assert_eq!((w.slice_start, w.slice_end), (0, 10));
}

#[test]
fn page_seven_of_ten_rows_lands_in_the_second_block() {
    // Page 7 (index 6) at 10 rows/page: block 1 → offset 50, limit 50,
    // rows [10, 20) of that block.
    let w = PageWindow::for_page(6, 10);
    assert_eq!(w.offset, 50);
    assert_eq!(w.limit, 50);
    assert_eq!((w.slice_start, w.slice_end), (10, 20));
}

#[test]
fn block_boundary_is_crossed_exactly_at_a_buffer_multiple() {
    // Last page of block 0...
    let w = PageWindow::for_page(4, 10);
    assert_eq!(w.offset, 0);
    assert_eq!((w.slice_start, w.slice_end), (40, 50));
    // ...and the first page of block 1.
    let w = PageWindow::for_page(5, 10);
    assert_eq!(w.offset, 50);
    assert_eq!((w.slice_start, w.slice_end), (0, 10));
}

#[test]
fn window_scales_with_page_size() {
    let w = PageWindow::for_page(11, 25);
    assert_eq!(w.limit, 125);
    assert_eq!(w.offset, 250);
    assert_eq!((w.slice_start, w.slice_end), (25, 50));
}

#[test]
fn slice_serves_the_requested_page() {
    let block: Vec<usize> = (0..50).collect();
    let w = PageWindow::for_page(6, 10);
    assert_eq!(w.slice(&block), (10..20).collect::<Vec<_>>());
}

#[test]
fn slice_clamps_on_a_short_final_block() {
    // 37 total rows: block 0 holds 37, page 4 (rows 30..40) only has 7.
    let block: Vec<usize> = (0..37).collect();
    let w = PageWindow::for_page(3, 10);
    assert_eq!(w.slice(&block).len(), 7);

    // A page entirely past the data is empty, not a panic.
    let w = PageWindow::for_page(4, 10);
    assert!(w.slice(&block).is_empty());
}

#[test]
fn page_count_rounds_up() {
    assert_eq!(page_count(0, 10), 0);
    assert_eq!(page_count(1, 10), 1);
    assert_eq!(page_count(10, 10), 1);
    assert_eq!(page_count(11, 10), 2);
    assert_eq!(page_count(137, 10), 14);
}

#[test]
fn page_count_with_zero_page_size_is_zero() {
    assert_eq!(page_count(100, 0), 0);
}
