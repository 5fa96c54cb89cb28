//! Basic usage: construct one session, parse a few sentences
//!
//! Needs a JVM and the CoreNLP jars downloaded into `jars/` (or the
//! directory named by `SUTIME_JARS`).

use sutime::{AnnotationValue, Config, SuTime};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let sutime = SuTime::new(
        Config::builder()
            .mark_time_ranges(true)
            .include_range(true)
            .build(),
    )?;

    let sentences = [
        "I have written a test today.",
        "I need a desk for tomorrow from 2pm for 2 hours",
        "Let's meet from July to August.",
    ];

    for sentence in sentences {
        println!("{sentence}");
        for annotation in sutime.parse(sentence, Some("2017-01-09"))? {
            match &annotation.value {
                AnnotationValue::Text(value) => {
                    println!("  {:?} {:?} -> {value}", annotation.timex_type, annotation.text);
                }
                AnnotationValue::Range { begin, end } => {
                    println!(
                        "  {:?} {:?} -> {begin} .. {end}",
                        annotation.timex_type, annotation.text
                    );
                }
            }
        }
    }

    Ok(())
}
