use proptest::prelude::*;
use quotebook_core::{find_by_topic, QuoteSource, QuoteStore, TopicQuery};
use std::collections::HashSet;

const TOPICS: &[&str] = &["life", "wisdom", "success", "Life", "WISDOM"];

fn arb_store() -> impl Strategy<Value = QuoteStore> {
    prop::collection::vec((prop::sample::select(TOPICS), "[a-z]{1,12}"), 0..20).prop_map(
        |records| {
            let mut builder = QuoteStore::builder();
            for (topic, text) in records {
                builder.push(topic, text).unwrap();
            }
            builder.build()
        },
    )
}

proptest! {
    #[test]
    fn never_returns_more_than_limit(store in arb_store(), topic in "[a-zA-Z ]{0,10}", limit in 0usize..8) {
        let hits = find_by_topic(&store, &TopicQuery::new(topic).with_limit(limit));
        prop_assert!(hits.len() <= limit);
    }

    #[test]
    fn results_match_topic_and_keep_store_order(store in arb_store(), topic in prop::sample::select(TOPICS), limit in 0usize..8) {
        let hits = find_by_topic(&store, &TopicQuery::new(topic).with_limit(limit));
        let expected = store
            .quotes()
            .iter()
            .filter(|q| q.topic() == topic.to_lowercase())
            .take(limit)
            .collect::<Vec<_>>();
        prop_assert_eq!(hits, expected);
    }

    #[test]
    fn case_variants_agree(store in arb_store(), topic in prop::sample::select(TOPICS)) {
        let lower = find_by_topic(&store, &TopicQuery::new(topic.to_lowercase()));
        let upper = find_by_topic(&store, &TopicQuery::new(topic.to_uppercase()));
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn all_topics_has_no_duplicates(store in arb_store()) {
        let topics = store.all_topics();
        let unique = topics.iter().copied().collect::<HashSet<_>>();
        prop_assert_eq!(unique.len(), topics.len());
    }
}
