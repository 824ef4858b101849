//! Contracts of the aggregation modules over parsed data.

use chatlens::parser::parse;
use chatlens::prelude::*;

const EXPORT: &str = "\
5/1/2024, 8:15 am - Alice: morning! coffee at https://cafe.example.com 😀
5/1/2024, 8:20 am - Bob: sure, coffee sounds great
6/1/2024, 9:00 pm - Alice: <Media omitted>
6/1/2024, 9:05 pm - Alice: that photo was from the coffee place
7/1/2024, 11:45 am - Carol: This message was deleted
12/2/2024, 6:30 pm - Bob: coffee again? 😀😀
";

#[test]
fn per_author_totals_partition_the_whole() {
    let messages = parse(EXPORT);
    let total = messages.len();

    let per_author: usize = author_list(&messages)
        .into_iter()
        .map(|author| {
            apply_filters(messages.clone(), &FilterConfig::new().with_author(author)).len()
        })
        .sum();

    assert_eq!(per_author, total);
}

#[test]
fn busiest_author_percentages_cover_everyone() {
    let messages = parse(EXPORT);
    let ranked = busiest_authors(&messages, usize::MAX);

    let message_sum: usize = ranked.iter().map(|a| a.messages).sum();
    assert_eq!(message_sum, messages.len());

    let percent_sum: f64 = ranked.iter().map(|a| a.percent).sum();
    assert!((percent_sum - 100.0).abs() < 0.1);
}

#[test]
fn word_ranking_ignores_placeholders_links_and_stopwords() {
    let messages = parse(EXPORT);
    let top = most_common_words(&messages, 50);

    let words: Vec<&str> = top.iter().map(|(w, _)| w.as_str()).collect();
    assert!(words.contains(&"coffee"));
    assert!(!words.iter().any(|w| w.contains("example.com")));
    assert!(!words.contains(&"the"));
    assert!(!words.contains(&"omitted"));
    assert!(!words.contains(&"deleted"));

    let coffee = top.iter().find(|(w, _)| w == "coffee").unwrap();
    assert_eq!(coffee.1, 4);
}

#[test]
fn emoji_totals_and_ranking_agree() {
    let messages = parse(EXPORT);
    assert_eq!(total_emojis(&messages), 3);
    assert_eq!(most_common_emojis(&messages, 10), vec![('😀', 3)]);
}

#[test]
fn link_count_matches_extracted_list() {
    let messages = parse(EXPORT);
    assert_eq!(link_count(&messages), extract_links(&messages).len());
    assert_eq!(link_count(&messages), 1);
}

#[test]
fn daily_timeline_covers_every_message_once() {
    let messages = parse(EXPORT);
    let timeline_sum: usize = daily_timeline(&messages).iter().map(|(_, c)| c).sum();
    assert_eq!(timeline_sum, messages.len());

    let dates: Vec<_> = daily_timeline(&messages)
        .iter()
        .map(|(d, _)| *d)
        .collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
}

#[test]
fn monthly_activity_in_calendar_order() {
    let messages = parse(EXPORT);
    assert_eq!(
        monthly_activity(&messages),
        vec![("January", 5), ("February", 1)]
    );
}

#[test]
fn weekday_profile_aligns_with_heatmap_rows() {
    let messages = parse(EXPORT);
    let profile = weekday_activity(&messages);
    let grid = hourly_heatmap(&messages);

    for (row, (_, weekday_count)) in grid.iter().zip(profile.iter()) {
        let row_sum: usize = row.iter().sum();
        assert_eq!(row_sum, *weekday_count);
    }
}

#[test]
fn filtered_weekday_counts_sum_to_author_total() {
    let messages = parse(EXPORT);
    let alices = apply_filters(messages, &FilterConfig::new().with_author("Alice"));
    let sum: usize = weekday_activity(&alices).iter().map(|(_, c)| c).sum();
    assert_eq!(sum, alices.len());
}

#[test]
fn date_range_filter_scopes_aggregations() {
    let messages = parse(EXPORT);
    let january = apply_filters(
        messages,
        &FilterConfig::new()
            .with_date_from("2024-01-01")
            .unwrap()
            .with_date_to("2024-01-31")
            .unwrap(),
    );

    assert_eq!(january.len(), 5);
    assert_eq!(monthly_activity(&january), vec![("January", 5)]);
}

#[test]
fn overview_of_filtered_set_matches_manual_counts() {
    let messages = parse(EXPORT);
    let alices = apply_filters(messages, &FilterConfig::new().with_author("Alice"));
    let stats = overview(&alices);

    assert_eq!(stats.messages, 3);
    assert_eq!(stats.media, 1);
    assert_eq!(stats.links, 1);
    assert_eq!(stats.emojis, 1);
}

#[test]
fn aggregations_over_empty_set_are_empty_not_errors() {
    let none: Vec<Message> = Vec::new();
    assert_eq!(overview(&none).messages, 0);
    assert!(busiest_authors(&none, 5).is_empty());
    assert!(most_common_words(&none, 5).is_empty());
    assert!(most_common_emojis(&none, 5).is_empty());
    assert!(extract_links(&none).is_empty());
    assert!(daily_timeline(&none).is_empty());
    assert!(monthly_activity(&none).is_empty());
    assert_eq!(
        weekday_activity(&none).iter().map(|(_, c)| c).sum::<usize>(),
        0
    );
}
