//! The `memspan preview` command: inspect a generated quiz without
//! running a session.

use anyhow::Result;

use memspan_core::generate::Generator;
use memspan_core::model::Problem;

pub fn execute(seed: Option<String>) -> Result<()> {
    let quiz = Generator::builtin().quiz(seed.as_deref());

    for problem in quiz.problems() {
        match problem {
            Problem::Judgment {
                ordinal,
                statement,
                truth,
            } => {
                let answer = if *truth { "O" } else { "X" };
                println!("{ordinal:>2}. [judgment] {statement} (answer: {answer})");
            }
            Problem::WordPrompt { ordinal, word } => {
                println!("{ordinal:>2}. [word]     {word}");
            }
        }
    }

    println!("\nRecall key: {}", quiz.words().join(", "));
    Ok(())
}
