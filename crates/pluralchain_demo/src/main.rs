//! Pluralchain demonstration entry point.
//!
//! Prints example sentences exercising the public chain surface: articles,
//! copulas, counts, and suffix pairs composed over both invocation forms.

use std::process::ExitCode;

use pluralchain_engine::plural;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    for nephews in [vec!["Tick", "Trick", "Track"], vec!["Joe"]] {
        println!(
            "There {}.",
            plural().is_a__are().s().resolve([("nephews", &nephews)])?
        );
        println!(
            "Where {} the {}?",
            plural().is_are().resolve([("nephews", &nephews)])?,
            plural().s().resolve([("nephews", &nephews)])?
        );
    }

    for potatoes in [vec!["boiled", "mash", "stuck in a stew"], vec!["Sir Spud"]] {
        println!(
            "We're eating {} tonight.",
            plural().a().es().resolve([("potatoes", &potatoes)])?
        );
    }

    for n in 0..5_u32 {
        println!(
            "You have been dealt a hand of {}.",
            plural().num().s().with_count(&n).word("cards")?
        );
        println!(
            "There {}.",
            plural().is_are().num().s().with_count(&n).word("lights")?
        );
    }

    println!(
        "I have {} at home!",
        plural().a().y_ies().with_count(&1).word("cherries")?
    );

    for fruits in [vec!["apple"], vec!["pear", "peach"]] {
        println!(
            "I have {} of {} at home!",
            plural()
                .literal_pair(Some("a"), Some("some"))
                .s()
                .with_count(&fruits)
                .word("pieces")?,
            plural().s().singular().resolve([("fruits", &fruits)])?
        );
    }

    Ok(())
}
