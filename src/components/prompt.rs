//! Blocking prompts: alerts and yes/no confirmations. Prompt text may include
//! student emails but never credentials.

use std::io::{self, BufRead, Write};
use tokio::runtime::{Handle, RuntimeFlavor};
use tracing::warn;

pub trait Prompt: Send + Sync {
    fn alert(&self, message: &str);

    /// Returns `true` only on an explicit yes.
    fn confirm(&self, message: &str) -> bool;
}

/// Prompts on stderr, answers from stdin.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalPrompt {
    assume_yes: bool,
}

impl TerminalPrompt {
    #[must_use]
    pub const fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Prompt for TerminalPrompt {
    fn alert(&self, message: &str) {
        eprintln!("! {message}");
    }

    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            eprintln!("? {message} [y/N] y");
            return true;
        }

        eprint!("? {message} [y/N] ");
        let _ = io::stderr().flush();

        match blocking(read_answer) {
            Ok(answer) => is_yes(&answer),
            Err(err) => {
                warn!("Failed to read confirmation: {err}");
                false
            }
        }
    }
}

fn read_answer() -> io::Result<String> {
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer)
}

/// Runs `f` off the async workers when called from a multi-thread runtime.
fn blocking<R>(f: impl FnOnce() -> R) -> R {
    let multi_thread = Handle::try_current()
        .is_ok_and(|handle| handle.runtime_flavor() == RuntimeFlavor::MultiThread);
    if multi_thread {
        tokio::task::block_in_place(f)
    } else {
        f()
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_yes_accepts_only_explicit_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("yep"));
    }

    #[test]
    fn blocking_runs_outside_a_runtime() {
        assert_eq!(blocking(|| 7), 7);
    }

    #[tokio::test]
    async fn blocking_runs_on_current_thread_runtime() {
        assert_eq!(blocking(|| "answer"), "answer");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn blocking_moves_off_multi_thread_workers() {
        let answer = blocking(|| String::from("y\n"));
        assert!(is_yes(&answer));
    }

    #[test]
    fn assume_yes_confirms_without_input() {
        assert!(TerminalPrompt::new(true).confirm("Remove a@mergington.edu from Chess Club?"));
    }
}
