use dartforge::api::{advise, build_advice, build_chart, parse_score, write_chart_csv, Regime};
use dartforge::config::ScoreLimits;
use dartforge::error::DartForgeError;
use regex::Regex;

#[test]
fn test_parse_score_accepts_trimmed_input() {
    let limits = ScoreLimits::default();
    assert_eq!(parse_score(" 170\n", &limits).unwrap(), 170);
}

#[test]
fn test_parse_score_rejects_garbage() {
    let limits = ScoreLimits::default();
    let err = parse_score("abc", &limits).unwrap_err();
    assert!(matches!(err, DartForgeError::NotANumber(_)));
    assert_eq!(err.to_string(), "Veuillez entrer un nombre valide.");
}

#[test]
fn test_parse_score_enforces_range() {
    let limits = ScoreLimits::default();
    for input in ["1", "0", "-3", "502"] {
        let err = parse_score(input, &limits).unwrap_err();
        assert!(matches!(err, DartForgeError::OutOfRange { .. }), "{}", input);
        assert_eq!(err.to_string(), "Veuillez entrer un score entre 2 et 501.");
    }
    assert!(parse_score("501", &limits).is_ok());
    assert!(parse_score("2", &limits).is_ok());
}

#[test]
fn test_custom_limits() {
    let limits = ScoreLimits {
        min_score: 2,
        max_score: 170,
    };
    assert!(advise("171", &limits).is_err());
    assert!(advise("170", &limits).is_ok());
}

#[test]
fn test_limits_validation() {
    assert!(ScoreLimits::default().validate().is_ok());
    let inverted = ScoreLimits {
        min_score: 10,
        max_score: 5,
    };
    assert!(matches!(inverted.validate(), Err(DartForgeError::Config(_))));
    let zero = ScoreLimits {
        min_score: 0,
        max_score: 5,
    };
    assert!(zero.validate().is_err());
}

#[test]
fn test_checkout_advice_steps_end_at_zero() {
    let advice = build_advice(170);
    assert_eq!(advice.regime, Regime::Checkout);
    assert!(advice.fallback.is_none());

    let option = &advice.options[0];
    assert!(option.is_checkout);
    assert_eq!(option.title, "Option 1: Finition parfaite");
    let remaining: Vec<i32> = option.steps.iter().map(|s| s.remaining).collect();
    assert_eq!(remaining, vec![110, 50, 0]);
    assert_eq!(option.score_left, 0);
    assert!(option.note.is_none());
}

#[test]
fn test_accumulation_advice() {
    let advice = build_advice(301);
    assert_eq!(advice.regime, Regime::Accumulation);
    assert_eq!(advice.options.len(), 3);
    assert_eq!(advice.guidance.len(), 2);

    let marker = &advice.options[1];
    assert_eq!(
        marker.title,
        "Option 2: Préparation en laissant 181 (2 fléchettes)"
    );
    // Notes are only given once a finish is in reach.
    assert!(marker.note.is_none());
}

#[test]
fn test_setup_options_carry_next_visit_note() {
    let advice = build_advice(99);
    let notes: Vec<Option<&str>> = advice.options.iter().map(|o| o.note.as_deref()).collect();
    assert_eq!(
        notes,
        vec![
            Some("Le score restant est 39."),
            Some("Le score restant est 42."),
        ]
    );
}

#[test]
fn test_no_solution_gives_fallback_hint() {
    let advice = build_advice(1);
    assert!(advice.options.is_empty());
    let hint = advice.fallback.unwrap();
    assert!(hint.contains("Visez le T20"));
    assert!(hint.contains("-59"));
}

#[test]
fn test_advice_serializes_targets_as_notation() {
    let advice = build_advice(170);
    let json = serde_json::to_string(&advice).unwrap();
    assert!(json.contains(r#""sequence":["T20","T20","D-BULL (50)"]"#));
    assert!(json.contains(r#""isCheckout":true"#));
    assert!(json.contains(r#""regime":"Checkout""#));
}

#[test]
fn test_chart_covers_range_in_order() {
    let rows = build_chart(2, 170);
    assert_eq!(rows.len(), 169);
    assert!(rows.windows(2).all(|w| w[0].score + 1 == w[1].score));

    let notation = Regex::new(r"^(T\d+|D\d+|S\d+|D-BULL \(50\)|S-BULL \(25\)|À viser \d+)$").unwrap();
    for row in &rows {
        assert!(row.options > 0, "score {}", row.score);
        for part in row.best.split(", ") {
            assert!(notation.is_match(part), "bad notation '{}'", part);
        }
    }

    let setups: Vec<i32> = rows.iter().filter(|r| !r.is_checkout).map(|r| r.score).collect();
    assert_eq!(setups, vec![99, 159, 162, 163, 165, 166, 168, 169]);
}

#[test]
fn test_chart_empty_range() {
    assert!(build_chart(10, 5).is_empty());
}

#[test]
fn test_chart_csv_export() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("chart.csv");

    let rows = build_chart(168, 170);
    write_chart_csv(&path, &rows).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "score,isCheckout,options,best");
    assert_eq!(lines[1], "168,false,2,\"T20, À viser 108\"");
    assert_eq!(lines[3], "170,true,1,\"T20, T20, D-BULL (50)\"");
}

#[test]
fn test_chart_csv_bad_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("chart.csv");
    let err = write_chart_csv(&path, &build_chart(2, 3)).unwrap_err();
    assert!(matches!(err, DartForgeError::Csv(_) | DartForgeError::Io(_)));
}
