#![no_main]
use libfuzzer_sys::fuzz_target;
use river_equity::core::{Card, CardIter, HandScore, Rankable, evaluate};

fuzz_target!(|cards: [Card; 7]| {
    // Only distinct cards are a real hand.
    if let Ok(score) = evaluate(&cards) {
        let best_five = CardIter::new(&cards, 5)
            .map(|five| five.rank())
            .max()
            .unwrap();
        assert_eq!(best_five, score);
        assert_eq!(Ok(score), HandScore::try_from(&score.to_vec()[..]));
    }
});
