use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use symbolguard_resolver::{
    AmbiguityPolicy, EngineConfig, InstrumentRecord, ReferenceData, ResolutionKind, SymbolEngine,
    ValidationResult,
};

fn engine() -> SymbolEngine {
    SymbolEngine::with_builtin().unwrap()
}

fn symbols(result: &ValidationResult) -> Vec<&str> {
    result.suggestions.iter().map(|r| r.symbol()).collect()
}

fn alternating_case(s: &str) -> String {
    s.chars()
        .enumerate()
        .map(|(i, c)| {
            if i % 2 == 0 {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect()
}

#[test]
fn every_catalog_symbol_validates_to_itself() {
    let engine = engine();
    for record in ReferenceData::builtin().instruments {
        let result = engine.validate(record.symbol());
        assert!(result.is_valid, "{} did not validate", record.symbol());
        assert_eq!(result.validated_symbol.as_deref(), Some(record.symbol()));
        assert_eq!(result.suggestions.len(), 1);
    }
}

#[test]
fn validation_is_case_insensitive() {
    let engine = engine();
    for record in ReferenceData::builtin().instruments {
        let expected = engine.validate(record.symbol());
        for variant in [
            record.symbol().to_lowercase(),
            alternating_case(record.symbol()),
        ] {
            assert_eq!(engine.validate(&variant), expected, "variant {}", variant);
        }
    }
}

#[test]
fn noisy_input_resolves_like_the_symbol() {
    let engine = engine();
    let cases = [
        ("HDFC BANK", "HDFCBANK"),
        ("hdfc-bank", "HDFCBANK"),
        (" Hdfc  Bank ", "HDFCBANK"),
        ("nestle", "NESTLEIND"),
        ("m & m", "M&M"),
        ("Infosys", "INFY"),
        ("bharti airtel", "BHARTIARTL"),
        ("ultra-tech", "ULTRACEMCO"),
    ];

    for (input, symbol) in cases {
        assert_eq!(engine.validate(input), engine.validate(symbol), "input {:?}", input);
    }
}

#[test]
fn validation_is_idempotent() {
    let engine = engine();
    for input in ["HDFC", "Reliance Industries", "tata", "zzz", "ltd", "INFY"] {
        assert_eq!(engine.validate(input), engine.validate(input));
    }
}

#[test]
fn brand_aliases_are_ambiguous() {
    let engine = engine();

    let hdfc = engine.validate("HDFC");
    assert!(!hdfc.is_valid);
    assert!(hdfc.validated_symbol.is_none());
    assert_eq!(hdfc.kind(), ResolutionKind::Ambiguous);
    assert!(symbols(&hdfc).contains(&"HDFCBANK"));
    assert!(symbols(&hdfc).contains(&"HDFCLIFE"));

    let icici = engine.validate("icici");
    assert_eq!(
        &symbols(&icici)[..3],
        &["ICICIBANK", "ICICIGI", "ICICIPRULI"]
    );

    let tata = engine.validate("Tata");
    assert!(!tata.is_valid);
    assert_eq!(&symbols(&tata)[..3], &["TATASTEEL", "TATAMOTORS", "TCS"]);
}

#[test]
fn legacy_policy_promotes_first_alias_target() {
    let engine = SymbolEngine::new(
        &ReferenceData::builtin(),
        EngineConfig {
            ambiguity_policy: AmbiguityPolicy::FirstCandidate,
            ..EngineConfig::default()
        },
    )
    .unwrap();

    let result = engine.validate("HDFC");
    assert!(result.is_valid);
    assert_eq!(result.validated_symbol.as_deref(), Some("HDFCBANK"));
}

#[test]
fn unknown_input_has_no_suggestions() {
    let result = engine().validate("ZZZZZZ123");
    assert!(!result.is_valid);
    assert!(result.suggestions.is_empty());
    assert_eq!(
        result.message,
        "No instruments found matching \"ZZZZZZ123\". Please check the symbol and try again."
    );
}

#[test]
fn exact_name_resolves_and_long_name_falls_to_fuzzy() {
    let engine = engine();

    let exact = engine.validate("reliance");
    assert!(exact.is_valid);
    assert_eq!(exact.validated_symbol.as_deref(), Some("RELIANCE"));

    let fuzzy = engine.validate("Reliance Industries");
    assert!(!fuzzy.is_valid);
    assert_eq!(
        symbols(&fuzzy),
        vec!["RELIANCE", "BRITANNIA", "HINDALCO", "SUNPHARMA", "GRASIM"]
    );
}

#[test]
fn search_stocks_is_stable_and_capped() {
    let engine = engine();
    let first = engine.search_stocks("bank");
    assert_eq!(first, engine.search_stocks("bank"));
    assert!(first.len() <= 10);
    assert_eq!(first[0].symbol(), "HDFCBANK");
}

#[test]
fn concurrent_validation_during_reload_sees_whole_snapshots() {
    let alpha = ReferenceData::new(
        "alpha",
        vec![
            InstrumentRecord::new("AAA", "Alpha Holdings Ltd", "NSE"),
            InstrumentRecord::new("AAB", "Alpha Bank Ltd", "NSE"),
        ],
    );
    let beta = ReferenceData::new(
        "beta",
        vec![
            InstrumentRecord::new("BBB", "Beta Holdings Ltd", "NSE"),
            InstrumentRecord::new("BBC", "Beta Bank Ltd", "NSE"),
            InstrumentRecord::new("BBD", "Beta Digital Ltd", "NSE"),
        ],
    );

    let engine = Arc::new(SymbolEngine::new(&alpha, EngineConfig::default()).unwrap());
    let done = Arc::new(AtomicBool::new(false));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let done = Arc::clone(&done);
            thread::spawn(move || {
                let mut checks = 0;
                while !done.load(Ordering::Relaxed) || checks < 100 {
                    let snapshot = engine.snapshot();
                    let is_alpha = snapshot.version() == "alpha";
                    let expected_len = if is_alpha { 2 } else { 3 };

                    assert_eq!(snapshot.len(), expected_len);
                    assert_eq!(snapshot.symbols().contains("AAA"), is_alpha);
                    assert_eq!(snapshot.symbols().contains("BBB"), !is_alpha);
                    for (_, bucket) in snapshot.tokens().iter() {
                        for symbol in bucket {
                            assert!(snapshot.symbols().contains(symbol));
                        }
                    }

                    let result = engine.validate("ltd");
                    let n = result.suggestions.len();
                    assert!(n == 2 || n == 3, "mixed snapshot: {} suggestions", n);
                    checks += 1;
                }
            })
        })
        .collect();

    for i in 0..200 {
        let next = if i % 2 == 0 { &beta } else { &alpha };
        engine.reload(next).unwrap();
    }
    done.store(true, Ordering::Relaxed);

    for reader in readers {
        reader.join().unwrap();
    }
}
