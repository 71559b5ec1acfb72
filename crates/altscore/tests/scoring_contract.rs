use altscore::scoring::{fields, CreditRating, ScoreCategory};
use altscore::{compute_score, RawProfile, ScoreResult};
use serde_json::json;

fn worked_example() -> RawProfile {
    serde_json::from_value(json!({
        "rentHistory": "excellent",
        "utilityHistory": "good",
        "monthlyIncome": 30000,
        "avgBalance": 5000,
        "savingsRate": 0.2,
        "overdrafts": 0,
        "employmentStability": "high",
        "rentAmount": 8000,
    }))
    .expect("object payload")
}

#[test]
fn worked_example_scores_797_good() {
    let result = compute_score(&worked_example());

    assert_eq!(result.total_score, 797);
    assert_eq!(result.rating, CreditRating::Good);
    let scores: Vec<u8> = result
        .breakdown
        .entries()
        .iter()
        .map(|entry| entry.score)
        .collect();
    assert_eq!(scores, vec![90, 100, 100, 70]);
    assert_eq!(
        result.breakdown.get(ScoreCategory::CreditUtilization).label,
        "Income-to-Rent"
    );
}

#[test]
fn rating_bands_follow_fixed_thresholds() {
    let table = [
        (850, CreditRating::Excellent),
        (800, CreditRating::Excellent),
        (799, CreditRating::VeryGood),
        (740, CreditRating::VeryGood),
        (739, CreditRating::Good),
        (670, CreditRating::Good),
        (669, CreditRating::Fair),
        (580, CreditRating::Fair),
        (579, CreditRating::Poor),
        (300, CreditRating::Poor),
    ];

    for (score, expected) in table {
        assert_eq!(CreditRating::from_score(score), expected, "score {score}");
    }
}

#[test]
fn numeric_strings_and_numbers_score_alike() {
    let textual = worked_example()
        .with(fields::MONTHLY_INCOME, " 30000 ")
        .with(fields::AVG_BALANCE, "5000.0")
        .with(fields::OVERDRAFTS, "0");

    assert_eq!(compute_score(&textual), compute_score(&worked_example()));
}

#[test]
fn fractional_overdraft_strings_are_malformed_but_numbers_truncate() {
    let truncated = compute_score(&worked_example().with(fields::OVERDRAFTS, 0.7));
    assert_eq!(truncated.total_score, 797);

    let malformed = compute_score(&worked_example().with(fields::OVERDRAFTS, "0.7"));
    assert_eq!(malformed, ScoreResult::fallback());
}

#[test]
fn categorical_values_are_case_sensitive() {
    let shouted = worked_example()
        .with(fields::RENT_HISTORY, "Excellent")
        .with(fields::EMPLOYMENT_STABILITY, "HIGH");

    let result = compute_score(&shouted);

    assert!(!result.is_fallback());
    // only utilities "good" counts: 75 * 0.4
    assert_eq!(result.breakdown.payment_history.score, 30);
    assert_eq!(result.breakdown.financial_stability.score, 75);
}

#[test]
fn list_valued_categories_fall_back_to_the_error_result() {
    let listed = RawProfile::new()
        .with(fields::RENT_HISTORY, json!(["excellent"]))
        .with(fields::MONTHLY_INCOME, 1000);
    assert_eq!(compute_score(&listed), ScoreResult::fallback());

    let nested = worked_example().with(fields::EMPLOYMENT_STABILITY, json!({ "level": "high" }));
    assert_eq!(compute_score(&nested), ScoreResult::fallback());

    // scalars of the wrong type still count as unreported
    let numeric = worked_example().with(fields::UTILITY_HISTORY, 3);
    assert!(!compute_score(&numeric).is_fallback());
}

#[test]
fn booleans_coerce_to_one_and_zero() {
    let profile = RawProfile::new()
        .with(fields::SAVINGS_RATE, true)
        .with(fields::OVERDRAFTS, false);

    let result = compute_score(&profile);

    assert!(!result.is_fallback());
    assert_eq!(result.breakdown.financial_stability.score, 50);
}

#[test]
fn fallback_result_serializes_with_error_rating() {
    let broken = worked_example().with(fields::SAVINGS_RATE, json!([0.2]));

    let payload = serde_json::to_value(compute_score(&broken)).expect("serializable");

    assert_eq!(payload["total_score"], 400);
    assert_eq!(payload["rating"], "Error");
    assert_eq!(payload["breakdown"]["data_richness"]["score"], 0);
    assert_eq!(payload["breakdown"]["data_richness"]["label"], "Data Richness");
}
