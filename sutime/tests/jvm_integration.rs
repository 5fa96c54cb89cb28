//! End-to-end tests against a real JVM and the CoreNLP jars
//!
//! Ignored by default: they need a JVM on the machine and the dependency
//! archives downloaded into the resource root (`SUTIME_JARS`, default
//! `jars/`). Run with `cargo test -- --ignored`.

use chrono::{Duration, Local, NaiveDate};
use std::sync::OnceLock;
use sutime::{Config, SuTime, TimexType};

const REFERENCE_DATE: &str = "2017-01-09";

fn init_logging() {
    static INIT: OnceLock<()> = OnceLock::new();
    INIT.get_or_init(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

fn sutime() -> &'static SuTime {
    static SESSION: OnceLock<SuTime> = OnceLock::new();
    init_logging();
    SESSION.get_or_init(|| SuTime::new(Config::default()).expect("session should load"))
}

fn sutime_with_ranges() -> &'static SuTime {
    static SESSION: OnceLock<SuTime> = OnceLock::new();
    init_logging();
    SESSION.get_or_init(|| {
        SuTime::new(Config::builder().mark_time_ranges(true).build())
            .expect("session should load")
    })
}

fn tomorrow() -> NaiveDate {
    Local::now().date_naive() + Duration::days(1)
}

#[test]
#[ignore = "requires a JVM and the CoreNLP jars"]
fn today_resolves_against_the_reference_date() {
    let result = sutime()
        .parse("I have written a test today.", Some(REFERENCE_DATE))
        .unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].timex_type, TimexType::Date);
    assert_eq!(result[0].value.as_text(), Some(REFERENCE_DATE));
}

#[test]
#[ignore = "requires a JVM and the CoreNLP jars"]
fn duration_decomposes_into_three_records() {
    let result = sutime()
        .parse("I need a desk for tomorrow from 2pm for 2 hours", None)
        .unwrap();

    assert_eq!(result.len(), 3);
    assert_eq!(result[0].timex_type, TimexType::Date);
    assert!(result[0]
        .value
        .as_text()
        .unwrap()
        .starts_with(&tomorrow().to_string()));
    assert_eq!(result[1].timex_type, TimexType::Time);
    assert!(result[1].value.as_text().unwrap().ends_with("T14:00"));
    assert_eq!(result[2].timex_type, TimexType::Duration);
    assert_eq!(result[2].value.as_text(), Some("PT2H"));
}

#[test]
#[ignore = "requires a JVM and the CoreNLP jars"]
fn unmerged_range_yields_two_times() {
    let result = sutime()
        .parse("I need a desk for tomorrow from 2pm to 3pm", None)
        .unwrap();

    assert_eq!(result.len(), 3);
    assert_eq!(result[1].timex_type, TimexType::Time);
    assert!(result[1].value.as_text().unwrap().ends_with("T14:00"));
    assert_eq!(result[2].timex_type, TimexType::Time);
    assert!(result[2].value.as_text().unwrap().ends_with("T15:00"));
}

#[test]
#[ignore = "requires a JVM and the CoreNLP jars"]
fn merged_range_yields_one_duration_with_bounds() {
    let result = sutime_with_ranges()
        .parse("I need a desk for tomorrow from 2pm to 3pm", None)
        .unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result[1].timex_type, TimexType::Duration);
    let (begin, end) = result[1].value.as_range().unwrap();
    assert!(begin.ends_with("T14:00"));
    assert!(end.ends_with("T15:00"));
}

#[test]
#[ignore = "requires a JVM and the CoreNLP jars"]
fn recurring_expressions_come_back_as_sets() {
    let result = sutime_with_ranges().parse("christmas eve", None).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].timex_type, TimexType::Set);
    assert_eq!(result[0].value.as_text(), Some("XXXX-12-24"));
}

#[test]
#[ignore = "requires a JVM and the CoreNLP jars"]
fn runtime_flags_pass_through() {
    // The effect of a memory flag is not observable from here; this only
    // confirms the session still works when flags are supplied. The flags
    // take effect only if this test is the one that starts the runtime.
    let session = SuTime::new(Config::builder().jvm_flag("-Xms256m").build())
        .expect("session should load");
    let result = session
        .parse("I have written a test today.", Some(REFERENCE_DATE))
        .unwrap();
    assert_eq!(result.len(), 1);
}

#[test]
#[ignore = "requires a JVM and the CoreNLP jars"]
fn concurrent_parses_on_one_session_stay_independent() {
    let session = sutime();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                if i % 2 == 0 {
                    let result = session
                        .parse("I have written a test today.", Some(REFERENCE_DATE))
                        .unwrap();
                    assert_eq!(result[0].value.as_text(), Some(REFERENCE_DATE));
                } else {
                    let result = session
                        .parse("Mary had spent Sunday night with us.", Some(REFERENCE_DATE))
                        .unwrap();
                    assert_eq!(result[0].timex_type, TimexType::Time);
                    assert_eq!(result[0].value.as_text(), Some("2017-01-15TNI"));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
#[ignore = "requires a JVM, the CoreNLP jars, and the spanish model archive"]
fn spanish_model_resolves_spanish_text() {
    let session = SuTime::new(Config::builder().language("spanish").build())
        .expect("session should load");
    let result = session
        .parse("Hoy he escrito una prueba.", Some(REFERENCE_DATE))
        .unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].timex_type, TimexType::Date);
    assert_eq!(result[0].value.as_text(), Some(REFERENCE_DATE));
}
