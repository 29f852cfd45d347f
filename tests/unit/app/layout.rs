use super::*;

#[test]
fn wrap_breaks_after_whitespace() {
    assert_eq!(wrap_line("hello world", 5), [0..6, 6..11]);
    assert_eq!(wrap_line("ab cd ef", 5), [0..6, 6..8]);
    assert_eq!(wrap_line("short", 10), [0..5]);
}

#[test]
fn wrap_splits_long_words() {
    assert_eq!(wrap_line("abcdefgh", 3), [0..3, 3..6, 6..8]);
}

#[test]
fn wrap_carries_the_word_after_the_break() {
    assert_eq!(wrap_line("aaa bbbbb", 6), [0..4, 4..9]);
    assert_eq!(wrap_line("a bcdefgh ij", 4), [0..2, 2..6, 6..10, 10..12]);
}

#[test]
fn long_single_line_wraps_without_rescanning() {
    let line = "abcd ".repeat(40_000);
    let started = std::time::Instant::now();
    let rows = wrap_line(&line, 80);
    let elapsed = started.elapsed();

    assert_eq!(rows.len(), line.len() / 80);
    assert!(rows.iter().all(|r| r.len() == 80));
    assert!(rows.windows(2).all(|w| w[0].end == w[1].start));
    assert!(elapsed < std::time::Duration::from_secs(5), "took {elapsed:?}");
}

#[test]
fn glyphs_record_offsets_and_whitespace() {
    let line = "a你\tb";
    let glyphs = glyphs(line);
    assert_eq!(glyphs.len(), 4);
    assert_eq!(glyph_text(line, &glyphs, 1), "你");
    assert_eq!(glyph_text(line, &glyphs, 3), "b");
    assert_eq!(glyphs[2].byte, 4);
    assert_eq!(glyphs[2].start, 2);
    assert!(glyphs[2].space);
    assert!(!glyphs[1].space);
}

#[test]
fn wrap_empty_line_is_one_row() {
    assert_eq!(wrap_line("", 5), [0..0]);
    assert_eq!(wrap_line("abc", 0), [0..3]);
}

#[test]
fn wrap_counts_wide_chars_by_cells() {
    // Each CJK char is two cells wide.
    assert_eq!(wrap_line("你好世界", 4), [0..2, 2..4]);
    assert_eq!(width_of("a你b", 0..3), 4);
    assert_eq!(width_of("\tx", 0..1), TAB_DISPLAY_WIDTH);
}

#[test]
fn layout_without_wrap_has_one_row_per_line() {
    let body = TextBody::from_text("hello world\nsecond\n");
    let layout = BodyLayout::new(&body, 5, false);
    assert_eq!(
        layout.rows(),
        [
            VisualRow { line: 0, start: 0, end: 11 },
            VisualRow { line: 1, start: 0, end: 6 },
            VisualRow { line: 2, start: 0, end: 0 },
        ]
    );
}

#[test]
fn locate_and_hit_test_agree_on_wrapped_rows() {
    let body = TextBody::from_text("hello world\nxy");
    let layout = BodyLayout::new(&body, 5, true);
    assert_eq!(layout.len(), 3);

    // 'w' starts the second row.
    assert_eq!(layout.locate(&body, 6), (1, 0));
    assert_eq!(layout.locate(&body, 11), (1, 5));
    assert_eq!(layout.locate(&body, 13), (2, 1));
    assert_eq!(layout.locate(&body, 2), (0, 2));

    assert_eq!(layout.position_at(&body, 1, 0), 6);
    assert_eq!(layout.position_at(&body, 1, 99), 11);
    assert_eq!(layout.position_at(&body, 2, 1), 13);
    assert_eq!(layout.position_at(&body, 9, 0), 12);
    // Past the end of a row that continues on the next one.
    assert_eq!(layout.position_at(&body, 0, 99), 5);
}

#[test]
fn hit_test_on_wide_chars_snaps_to_grapheme_start() {
    let body = TextBody::from_text("你好");
    let layout = BodyLayout::new(&body, 80, true);
    assert_eq!(layout.position_at(&body, 0, 1), 0);
    assert_eq!(layout.position_at(&body, 0, 2), 1);
    assert_eq!(layout.locate(&body, 1), (0, 2));
}

#[test]
fn viewport_reveals_minimally() {
    let mut vp = Viewport::default();
    vp.reveal(12, 3, 10, 20);
    assert_eq!(vp, Viewport { top: 3, left: 0 });
    vp.reveal(5, 30, 10, 20);
    assert_eq!(vp, Viewport { top: 3, left: 11 });
    vp.reveal(1, 2, 10, 20);
    assert_eq!(vp, Viewport { top: 1, left: 2 });
}

#[test]
fn viewport_scroll_is_clamped() {
    let mut vp = Viewport::default();
    vp.scroll_rows(-3, 50, 10);
    assert_eq!(vp.top, 0);
    vp.scroll_rows(100, 50, 10);
    assert_eq!(vp.top, 40);
}
