//! Interactive play with a decision tree
//!
//! The tree suggests each guess; the player types back the colours the game
//! showed and the tree moves to the matching child.

use super::build::SearchConfig;
use crate::core::Feedback;
use crate::solver::{DecisionTree, FeedbackCache, Node};
use anyhow::Result;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Enter the colours the game showed for the suggested guess, one symbol per letter:
  G, 2 or 🟩   right letter, right place
  Y, 1 or 🟨   right letter, wrong place
  -, 0 or ⬜   letter not in the word
So if CRANE came back grey, green, grey, yellow, grey type -G-Y- (or 02010).

Commands: 'win' when the guess was right, 'undo' to take back the last
feedback, 'quit' to stop.";

enum Action {
    Feedback(Feedback),
    Undo,
}

/// Play one game, reading feedback from `input`
///
/// Returns the number of guesses used, or `None` if the player quit or the
/// input ended first.
///
/// # Errors
/// Propagates I/O errors from `input` and `output`.
pub fn play_tree<R: BufRead, W: Write>(
    tree: &DecisionTree<'_>,
    mut input: R,
    mut output: W,
) -> io::Result<Option<usize>> {
    let mut path: Vec<&Node<'_>> = vec![tree.root()];
    writeln!(
        output,
        "{} possible answers. Type 'help' for instructions.",
        tree.root().len()
    )?;

    while let Some(&node) = path.last() {
        let turn = path.len();
        let guess = node.guess().text().to_uppercase();

        if node.is_leaf() {
            writeln!(output, "FINAL ANSWER: {guess}!")?;
            return Ok(Some(turn));
        }

        writeln!(output, "Guess {turn}: {guess} ({} candidates)", node.len())?;

        let Some(action) = read_action(&mut input, &mut output)? else {
            return Ok(None);
        };

        match action {
            Action::Undo if turn > 1 => {
                path.pop();
                writeln!(output, "Back to guess {}", turn - 1)?;
            }
            Action::Undo => writeln!(output, "Nothing to undo")?,
            Action::Feedback(feedback) if feedback.is_all_exact() && node.finishes_here() => {
                writeln!(output, "Solved in {turn} guesses!")?;
                return Ok(Some(turn));
            }
            Action::Feedback(feedback) => match node.child(feedback).filter(|_| !feedback.is_all_exact()) {
                Some(child) => path.push(child),
                None => writeln!(
                    output,
                    "Impossible feedback {feedback} for {guess}. Double check your input."
                )?,
            },
        }
    }

    Ok(None)
}

/// Prompt until the player enters feedback or a command; `None` means stop
fn read_action<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Option<Action>> {
    loop {
        write!(output, "feedback> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match line.trim().to_lowercase().as_str() {
            "" => {}
            "help" | "h" | "?" => writeln!(output, "{HELP}")?,
            "quit" | "q" | "exit" => return Ok(None),
            "undo" | "u" => return Ok(Some(Action::Undo)),
            "win" | "correct" | "solved" => return Ok(Some(Action::Feedback(Feedback::ALL_EXACT))),
            text => match Feedback::parse(text) {
                Some(feedback) => return Ok(Some(Action::Feedback(feedback))),
                None => writeln!(output, "Invalid feedback. Use G/Y/- or 2/1/0, e.g. -G-Y-")?,
            },
        }
    }
}

/// Build the tree and play it on the terminal
///
/// # Errors
/// Returns an error if the search fails or the terminal cannot be used.
pub fn run_play(config: &SearchConfig) -> Result<Option<usize>> {
    let vocabulary = config.vocabulary()?;
    let cache = FeedbackCache::for_vocabulary(&vocabulary);
    let outcome = config.search(&vocabulary, &cache)?;
    Ok(play_tree(&outcome.tree, io::stdin().lock(), io::stdout().lock())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vocabulary;
    use crate::solver::{SearchParams, TreeBuilder};
    use std::io::Cursor;

    fn play(tree: &DecisionTree<'_>, input: &str) -> (Option<usize>, String) {
        let mut output = Vec::new();
        let result = play_tree(tree, Cursor::new(input), &mut output).unwrap();
        (result, String::from_utf8(output).unwrap())
    }

    fn splitter_vocabulary() -> Vocabulary {
        Vocabulary::new(["bbbbb", "ccccc", "ddddd", "eeeee", "fffff"], ["bcdef"]).unwrap()
    }

    #[test]
    fn feedback_leads_to_final_answer() {
        let vocabulary = splitter_vocabulary();
        let cache = FeedbackCache::for_vocabulary(&vocabulary);
        let tree = TreeBuilder::new(&vocabulary, &cache, SearchParams::default())
            .build(None)
            .unwrap();

        let (result, output) = play(&tree, "G----\n");

        assert_eq!(result, Some(2));
        assert!(output.contains("Guess 1: BCDEF"));
        assert!(output.contains("FINAL ANSWER: BBBBB!"));
    }

    #[test]
    fn impossible_feedback_prompts_again() {
        let vocabulary = splitter_vocabulary();
        let cache = FeedbackCache::for_vocabulary(&vocabulary);
        let tree = TreeBuilder::new(&vocabulary, &cache, SearchParams::default())
            .build(None)
            .unwrap();

        // BCDEF is not an answer, and no answer gives two greens
        let (result, output) = play(&tree, "GGGGG\nGG---\n00002\n");

        assert_eq!(result, Some(2));
        assert_eq!(output.matches("Impossible feedback").count(), 2);
        assert!(output.contains("FINAL ANSWER: FFFFF!"));
    }

    #[test]
    fn undo_and_win() {
        let vocabulary = Vocabulary::new(
            ["bbbbb", "ccccc", "ddddd", "eeeee", "fffff"],
            Vec::<String>::new(),
        )
        .unwrap();
        let cache = FeedbackCache::for_vocabulary(&vocabulary);
        let tree = TreeBuilder::new(&vocabulary, &cache, SearchParams::default())
            .build(None)
            .unwrap();

        let (result, output) = play(&tree, "-----\nundo\n-----\n-----\nwin\n");

        assert_eq!(result, Some(3));
        assert!(output.contains("Back to guess 1"));
        assert!(output.contains("Guess 3: DDDDD"));
        assert!(output.contains("Solved in 3 guesses!"));
    }

    #[test]
    fn quit_and_end_of_input() {
        let vocabulary = splitter_vocabulary();
        let cache = FeedbackCache::for_vocabulary(&vocabulary);
        let tree = TreeBuilder::new(&vocabulary, &cache, SearchParams::default())
            .build(None)
            .unwrap();

        assert_eq!(play(&tree, "quit\n").0, None);
        assert_eq!(play(&tree, "").0, None);

        let (result, output) = play(&tree, "undo\nhelp\nnonsense\nq\n");
        assert_eq!(result, None);
        assert!(output.contains("Nothing to undo"));
        assert!(output.contains("Commands:"));
        assert!(output.contains("Invalid feedback"));
    }

    #[test]
    fn single_answer_needs_no_input() {
        let vocabulary = Vocabulary::new(["crane"], ["slate"]).unwrap();
        let cache = FeedbackCache::for_vocabulary(&vocabulary);
        let tree = TreeBuilder::new(&vocabulary, &cache, SearchParams::default())
            .build(None)
            .unwrap();

        let (result, output) = play(&tree, "");
        assert_eq!(result, Some(1));
        assert!(output.contains("FINAL ANSWER: CRANE!"));
    }

    #[test]
    fn every_secret_can_be_played() {
        let vocabulary = Vocabulary::new(
            ["crane", "slate", "trace", "crate", "grate", "irate", "plate", "stare", "share", "spare"],
            ["pious", "thumb"],
        )
        .unwrap();
        let cache = FeedbackCache::for_vocabulary(&vocabulary);
        let tree = TreeBuilder::new(&vocabulary, &cache, SearchParams::default())
            .build(None)
            .unwrap();

        for secret in vocabulary.solutions() {
            let guesses = tree.guesses_for(secret).unwrap();
            let mut input: String = guesses[..guesses.len() - 1]
                .iter()
                .map(|guess| format!("{}\n", Feedback::calculate(guess, secret)))
                .collect();
            input.push_str("win\n");

            let (result, _) = play(&tree, &input);
            assert_eq!(result, Some(guesses.len()), "secret {secret}");
        }
    }
}
