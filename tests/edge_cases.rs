//! Edge cases for the line scanner and its drop policy.

use chatlens::parser::{parse, parse_with_outcome};

#[test]
fn empty_string_yields_empty_sequence() {
    assert!(parse("").is_empty());
    let outcome = parse_with_outcome("");
    assert!(outcome.is_empty());
    assert_eq!(outcome.dropped_lines, 0);
}

#[test]
fn whitespace_only_input() {
    let outcome = parse_with_outcome("\n   \n\t\n");
    assert!(outcome.is_empty());
    assert_eq!(outcome.dropped_lines, 0);
}

#[test]
fn only_system_notices_yield_empty_sequence() {
    let text = "\
1/2/2024, 9:00 am - Messages and calls are end-to-end encrypted.
1/2/2024, 9:01 am - Bob created group \"Weekend\"
1/2/2024, 9:02 am - Bob added Alice";
    let outcome = parse_with_outcome(text);
    assert!(outcome.messages.is_empty());
    assert_eq!(outcome.dropped_lines, 3);
}

#[test]
fn three_line_body_is_one_record() {
    let text = "1/2/2024, 9:05 am - Alice: first\nsecond\nthird";
    let messages = parse(text);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].body, "first\nsecond\nthird");
    assert_eq!(messages[0].body.lines().count(), 3);
}

#[test]
fn leading_and_trailing_blank_lines_ignored() {
    let text = "\n\n\n1/2/2024, 9:05 am - Alice: Hello\n\n\n";
    let outcome = parse_with_outcome(text);
    assert_eq!(outcome.messages.len(), 1);
    assert_eq!(outcome.dropped_lines, 0);
}

#[test]
fn orphan_continuation_before_first_message_dropped() {
    let text = "stray text\n1/2/2024, 9:05 am - Alice: Hello";
    let outcome = parse_with_outcome(text);
    assert_eq!(outcome.messages.len(), 1);
    assert_eq!(outcome.messages[0].body, "Hello");
    assert_eq!(outcome.dropped_lines, 1);
}

#[test]
fn dropped_line_does_not_shift_attribution() {
    // The invalid date line and its continuation must not leak into either
    // neighbor's body.
    let text = "\
1/2/2024, 9:05 am - Alice: Hello
31/2/2024, 9:06 am - Bob: bad date
continuation of the bad message
1/2/2024, 9:07 am - Carol: Bye";
    let outcome = parse_with_outcome(text);

    assert_eq!(outcome.messages.len(), 2);
    assert_eq!(outcome.messages[0].author, "Alice");
    assert_eq!(outcome.messages[0].body, "Hello");
    assert_eq!(outcome.messages[1].author, "Carol");
    assert_eq!(outcome.messages[1].body, "Bye");
    assert_eq!(outcome.dropped_lines, 2);
}

#[test]
fn time_grammar_failure_is_continuation_not_error() {
    // 24-hour time without am/pm does not match the start grammar, so the
    // line folds into the open message.
    let text = "1/2/2024, 9:05 am - Alice: Hello\n1/2/2024, 21:06 - Bob: Hi";
    let messages = parse(text);
    assert_eq!(messages.len(), 1);
    assert!(messages[0].body.contains("21:06"));
}

#[test]
fn chrono_level_time_failure_drops_record() {
    // Matches the grammar shape, but 0 is not a 12-hour clock value.
    let outcome = parse_with_outcome("1/2/2024, 0:30 am - Alice: Hello");
    assert!(outcome.messages.is_empty());
    assert_eq!(outcome.dropped_lines, 1);
}

#[test]
fn start_line_without_author_separator_dropped() {
    let outcome = parse_with_outcome("1/2/2024, 9:05 am - no separator here");
    assert!(outcome.messages.is_empty());
    assert_eq!(outcome.dropped_lines, 1);
}

#[test]
fn empty_author_dropped() {
    let outcome = parse_with_outcome("1/2/2024, 9:05 am - : Hello");
    assert!(outcome.messages.is_empty());
    assert_eq!(outcome.dropped_lines, 1);
}

#[test]
fn author_never_empty_body_never_empty() {
    let text = "\
1/2/2024, 9:05 am - Alice: Hello
1/2/2024, 9:06 am - B: x";
    for msg in parse(text) {
        assert!(!msg.author.is_empty());
        assert!(!msg.body.is_empty());
    }
}

#[test]
fn two_digit_year_not_accepted() {
    // The one export style supported uses 4-digit years.
    let outcome = parse_with_outcome("1/2/24, 9:05 am - Alice: Hello");
    assert!(outcome.messages.is_empty());
}

#[test]
fn body_with_url_and_colons() {
    let messages = parse("1/2/2024, 9:05 am - Alice: see https://example.com: it's good");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].author, "Alice");
    assert_eq!(messages[0].body, "see https://example.com: it's good");
}

#[test]
fn continuation_looking_like_date_prefix() {
    // A continuation that merely starts with a date but fails the full
    // grammar stays a continuation.
    let text = "1/2/2024, 9:05 am - Alice: deadlines\n1/2/2024 is the last day";
    let messages = parse(text);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].body, "deadlines\n1/2/2024 is the last day");
}

#[test]
fn crlf_line_endings() {
    let text = "1/2/2024, 9:05 am - Alice: Hello\r\n1/2/2024, 9:06 am - Bob: Hi\r\n";
    let messages = parse(text);
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].body, "Hi");
}

#[test]
fn huge_minute_value_rejected_by_grammar_shape() {
    // 9:99 matches \d{2} but fails chrono's minute range.
    let outcome = parse_with_outcome("1/2/2024, 9:99 am - Alice: Hello");
    assert!(outcome.messages.is_empty());
    assert_eq!(outcome.dropped_lines, 1);
}
