use approx::assert_abs_diff_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use river_equity::core::{
    Deck, EquityError, FlatDeck, HandCategory, HandScore, Value, evaluate, parse_cards,
};
use river_equity::holdem::{
    EquityResult, MonteCarloEquity, RiverSpot, SimulationConfig, approx_multiway, beating_hands,
    exact_equity, label, monte_carlo_equity,
};

#[test_log::test]
fn kings_full_of_fives() {
    let spot: RiverSpot = "AsKs KhKd5c5d2s".parse().unwrap();

    assert_eq!(
        HandScore::FullHouse {
            trips: Value::King,
            pair: Value::Five,
        },
        spot.hero_score()
    );
    assert_eq!(vec![7, 13, 5], spot.hero_score().to_vec());

    let heads_up = exact_equity(&spot);
    assert_eq!(990, heads_up.total());
    // The last king with anything splits, only the last two fives win.
    assert_eq!(44, heads_up.ties);
    assert_eq!(1, heads_up.losses);
    assert!(heads_up.wins > heads_up.losses);

    let beating = beating_hands(&spot);
    assert_eq!(
        vec![HandCategory::FourOfAKind],
        beating.iter().map(|(c, _)| c).collect::<Vec<_>>()
    );
    assert_eq!(1, beating.count());
    let fives = beating.get(HandCategory::FourOfAKind)[0];
    assert!(fives.iter().all(|c| c.value == Value::Five));

    assert_eq!("Full house (K over 5)", label(&spot.hero_score()).to_string());
}

#[test]
fn higher_category_always_wins() {
    let weakest_flush = HandScore::Flush([
        Value::Seven,
        Value::Five,
        Value::Four,
        Value::Three,
        Value::Two,
    ]);
    let best_straight = HandScore::Straight(Value::Ace);
    assert!(weakest_flush > best_straight);

    let kings_and_twos = evaluate(&parse_cards("KsKd2c2h9s5d4h").unwrap()).unwrap();
    let queens_and_jacks = evaluate(&parse_cards("QsQdJcJhAs5d4h").unwrap()).unwrap();
    assert!(kings_and_twos > queens_and_jacks);
}

#[test]
fn exact_total_holds_for_random_spots() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut deck: FlatDeck = Deck::default().into();
    for _ in 0..25 {
        deck.shuffle(&mut rng);
        let spot = RiverSpot::from_cards(&deck[0..2], &deck[2..7]).unwrap();
        assert_eq!(990, exact_equity(&spot).total());
    }
}

#[test_log::test]
fn monte_carlo_converges_on_exact_heads_up() {
    let spot: RiverSpot = "Tc9c Jd8s3h2c2d".parse().unwrap();
    let exact = exact_equity(&spot);

    let config = SimulationConfig::default()
        .with_opponents(1)
        .with_trials(100_000)
        .with_seed(31337);
    let estimate = monte_carlo_equity(&spot, &config).unwrap();

    assert_abs_diff_eq!(
        exact.loss_probability(),
        estimate.loss_probability(),
        epsilon = 0.02
    );
}

#[test]
fn approximation_tracks_simulation_loosely() {
    let spot: RiverSpot = "AhQc Qd9s6h4c2s".parse().unwrap();
    let heads_up = exact_equity(&spot);
    let approx = approx_multiway(&heads_up, 4);

    let mut sim = MonteCarloEquity::new(&spot, 4).unwrap();
    let mut rng = StdRng::seed_from_u64(8);
    let simulated = sim.estimate(50_000, &mut rng).unwrap();

    // Independence is only an approximation, keep the bound loose.
    assert_abs_diff_eq!(approx.beaten, simulated.loss_probability(), epsilon = 0.1);
}

#[test]
fn zero_opponents_is_defined() {
    let spot: RiverSpot = "AhQc Qd9s6h4c2s".parse().unwrap();
    let config = SimulationConfig::default()
        .with_players(1)
        .unwrap()
        .with_seed(1);
    let result = monte_carlo_equity(&spot, &config).unwrap();
    assert_eq!(EquityResult::default(), result);
    assert_eq!(0.0, result.loss_probability());
}

#[test]
fn precondition_violations_are_rejected() {
    assert!(matches!(
        evaluate(&parse_cards("AsKsQsJs").unwrap()),
        Err(EquityError::WrongCardCount {
            expected: 7,
            found: 4
        })
    ));
    assert!(matches!(
        "AsAs KhKd5c5d2s".parse::<RiverSpot>(),
        Err(EquityError::DuplicateCard(_))
    ));
    assert!(matches!(
        "AsKh KhKd5c5d2s".parse::<RiverSpot>(),
        Err(EquityError::DuplicateCard(_))
    ));

    let spot: RiverSpot = "AsKs KhKd5c5d2s".parse().unwrap();
    assert!(matches!(
        MonteCarloEquity::new(&spot, 23),
        Err(EquityError::TooManyOpponents { .. })
    ));
    assert_eq!(
        Err(EquityError::InvalidTrials),
        monte_carlo_equity(&spot, &SimulationConfig::default().with_trials(0))
    );
}
