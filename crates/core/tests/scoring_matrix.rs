use drawsim_core::{category_score, evaluate, Card, HandKind, Rank, Suit};

macro_rules! cards {
    ($(($rank:ident, $suit:ident)),* $(,)?) => {
        vec![$(Card::new(Rank::$rank, Suit::$suit)),*]
    };
}

macro_rules! score_case {
    ($name:ident, $kind:expr, $score:expr, $cards:expr) => {
        #[test]
        fn $name() {
            let cards = $cards;
            assert_eq!(evaluate(&cards), ($kind, $score));
        }
    };
}

score_case!(
    royal_straight_flush,
    HandKind::StraightFlush,
    (100 + 51) * 8,
    cards![
        (Ace, Spades),
        (King, Spades),
        (Queen, Spades),
        (Jack, Spades),
        (Ten, Spades),
    ]
);

score_case!(
    wheel_straight_flush,
    HandKind::StraightFlush,
    (100 + 25) * 8,
    cards![
        (Ace, Hearts),
        (Two, Hearts),
        (Three, Hearts),
        (Four, Hearts),
        (Five, Hearts),
    ]
);

score_case!(
    quads_with_kicker,
    HandKind::Quads,
    (60 + 4 * 7) * 7,
    cards![
        (Seven, Hearts),
        (Seven, Diamonds),
        (Seven, Clubs),
        (Seven, Spades),
        (King, Hearts),
    ]
);

score_case!(
    bare_pair,
    HandKind::Pair,
    (10 + 2 * 2) * 2,
    cards![(Two, Hearts), (Two, Diamonds), (Nine, Clubs)]
);

score_case!(
    lone_ace,
    HandKind::HighCard,
    (5 + 11) * 1,
    cards![(Ace, Spades)]
);

score_case!(
    wheel_straight,
    HandKind::Straight,
    (30 + 25) * 4,
    cards![
        (Ace, Hearts),
        (Two, Clubs),
        (Three, Diamonds),
        (Four, Spades),
        (Five, Hearts),
    ]
);

score_case!(
    ace_high_straight,
    HandKind::Straight,
    (30 + 51) * 4,
    cards![
        (Ten, Clubs),
        (Jack, Hearts),
        (Queen, Diamonds),
        (King, Spades),
        (Ace, Hearts),
    ]
);

score_case!(
    six_card_flush_keeps_top_five,
    HandKind::Flush,
    (35 + 43) * 4,
    cards![
        (Two, Hearts),
        (Five, Hearts),
        (Seven, Hearts),
        (Ten, Hearts),
        (King, Hearts),
        (Ace, Hearts),
    ]
);

score_case!(
    full_house,
    HandKind::FullHouse,
    (40 + 3 * 10 + 2 * 4) * 4,
    cards![
        (Queen, Hearts),
        (Queen, Diamonds),
        (Queen, Clubs),
        (Four, Spades),
        (Four, Hearts),
    ]
);

score_case!(
    two_pair,
    HandKind::TwoPair,
    (20 + 2 * 10 + 2 * 3) * 2,
    cards![
        (Jack, Hearts),
        (Jack, Diamonds),
        (Three, Clubs),
        (Three, Spades),
        (Eight, Hearts),
    ]
);

score_case!(
    bare_trips,
    HandKind::Trips,
    (30 + 3 * 5) * 3,
    cards![(Five, Hearts), (Five, Diamonds), (Five, Clubs)]
);

score_case!(
    eight_card_hand_takes_the_best_straight,
    HandKind::Straight,
    (30 + 25) * 4,
    cards![
        (Two, Hearts),
        (Three, Clubs),
        (Four, Diamonds),
        (Five, Spades),
        (Six, Hearts),
        (Seven, Clubs),
        (Nine, Hearts),
        (Nine, Clubs),
    ]
);

score_case!(
    straight_beats_the_pair_inside_it,
    HandKind::Straight,
    (30 + 49) * 4,
    cards![
        (Nine, Hearts),
        (Ten, Clubs),
        (Jack, Diamonds),
        (Queen, Spades),
        (King, Hearts),
        (Nine, Clubs),
    ]
);

#[test]
fn empty_input_is_a_zero_high_card() {
    assert_eq!(evaluate(&[]), (HandKind::HighCard, 0));
}

#[test]
fn full_house_needs_a_distinct_pair() {
    let quads = cards![
        (Seven, Hearts),
        (Seven, Diamonds),
        (Seven, Clubs),
        (Seven, Spades),
        (King, Hearts),
    ];
    assert_eq!(category_score(&quads, HandKind::FullHouse), 0);
}

#[test]
fn straight_flush_needs_one_suit() {
    let mixed = cards![
        (Nine, Hearts),
        (Ten, Clubs),
        (Jack, Hearts),
        (Queen, Hearts),
        (King, Hearts),
    ];
    assert_eq!(category_score(&mixed, HandKind::StraightFlush), 0);
    assert_eq!(evaluate(&mixed).0, HandKind::Straight);
}

#[test]
fn evaluator_never_loses_to_a_single_category() {
    let hands = [
        cards![
            (Ace, Spades),
            (King, Spades),
            (Queen, Spades),
            (Jack, Spades),
            (Ten, Spades),
        ],
        cards![
            (Two, Hearts),
            (Five, Hearts),
            (Seven, Hearts),
            (Ten, Hearts),
            (King, Hearts),
            (Ace, Hearts),
            (Two, Clubs),
            (Two, Spades),
        ],
        cards![
            (Nine, Hearts),
            (Nine, Clubs),
            (Nine, Diamonds),
            (Four, Spades),
            (Four, Hearts),
            (Ten, Clubs),
            (Jack, Diamonds),
            (Queen, Spades),
        ],
        cards![(Three, Hearts), (Eight, Clubs)],
    ];
    for hand in &hands {
        let (_, best) = evaluate(hand);
        for kind in HandKind::ALL {
            assert!(
                best >= category_score(hand, kind),
                "{kind:?} outscored the evaluator on {hand:?}"
            );
        }
    }
}
