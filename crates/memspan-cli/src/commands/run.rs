//! The `memspan run` command: one interactive session over stdin/stdout.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use memspan_core::model::{Choice, Identity, Problem, PROBLEM_COUNT, WORD_COUNT};
use memspan_core::session::{Phase, SessionConfig, SessionInput, SessionState};

pub fn execute(
    seed: Option<String>,
    name: Option<String>,
    class: Option<String>,
    id: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let identity = Identity { name, class, id };
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut session = SessionState::new(SessionConfig { seed, identity });

    loop {
        run_quiz(&mut session, &mut lines)?;
        collect_recall(&mut session, &mut lines)?;

        let report = session
            .report()
            .context("session finished without a report")?;
        super::print_report(&report);

        if let Some(dir) = &output {
            let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");
            let path = dir.join(format!("memspan-{timestamp}.json"));
            report.save_json(&path)?;
            println!("Report saved to: {}", path.display());
        }

        print!("\nPlay again with a new set? [y/N] ");
        io::stdout().flush()?;
        match next_line(&mut lines)? {
            Some(line) if line.trim().eq_ignore_ascii_case("y") => {
                session.apply(SessionInput::Restart { seed: None });
                println!();
            }
            _ => break,
        }
    }

    Ok(())
}

fn next_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<Option<String>> {
    match lines.next() {
        Some(line) => Ok(Some(line.context("failed to read from stdin")?)),
        None => Ok(None),
    }
}

fn run_quiz(
    session: &mut SessionState,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    println!("Memory-span training: {PROBLEM_COUNT} problems.");
    println!("Odd problems: judge the statement with o (true) or x (false).");
    println!("Even problems: memorize the word, then press Enter.\n");

    while session.phase() == Phase::Quiz {
        let problem = session
            .current_problem()
            .context("quiz phase without a current problem")?
            .clone();

        println!("[{}/{PROBLEM_COUNT}]", problem.ordinal());
        match &problem {
            Problem::Judgment { statement, .. } => {
                println!("{statement}");
                let choice = loop {
                    print!("o/x> ");
                    io::stdout().flush()?;
                    let Some(line) = next_line(lines)? else {
                        bail!("stdin closed before the quiz finished");
                    };
                    match line.parse::<Choice>() {
                        Ok(choice) => break choice,
                        Err(_) => println!("Please answer o or x."),
                    }
                };
                session.apply(SessionInput::Choose(choice));
            }
            Problem::WordPrompt { word, .. } => {
                println!("Memorize: {word}");
                print!("Enter> ");
                io::stdout().flush()?;
                if next_line(lines)?.is_none() {
                    bail!("stdin closed before the quiz finished");
                }
                session.apply(SessionInput::Acknowledge);
            }
        }
        println!();
    }
    Ok(())
}

fn collect_recall(
    session: &mut SessionState,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    println!(
        "Recall: type the {WORD_COUNT} presented words in order (problems 2, 4, 6, 8, 10)."
    );

    let mut entries = Vec::with_capacity(WORD_COUNT);
    for slot in 1..=WORD_COUNT {
        print!("word {slot}> ");
        io::stdout().flush()?;
        match next_line(lines)? {
            Some(line) => entries.push(line),
            None => bail!("stdin closed before recall finished"),
        }
    }
    session.apply(SessionInput::SubmitRecall(entries));
    Ok(())
}
