//! Display functions for game output

use super::formatters::{evaluation_to_emoji, evaluation_to_tiles, masked_word};
use crate::commands::{ScoreResult, SessionStats};
use crate::core::Lexeme;
use crate::game::{Difficulty, GuessOutcome, HintLedger, HintPayload, RoundEnd, RoundInfo};
use colored::Colorize;

/// Print the play-mode banner
pub fn print_play_banner(difficulty: Difficulty, max_attempts: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LEXIGUESS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("\nGuess the hidden word from the lexicon.");
    println!("Difficulty: {} · Attempts per word: {max_attempts}", difficulty.to_string().bright_yellow());
    println!("Type 'hint' to see which hints your difficulty offers.\n");
}

/// Print the opening state of a fresh round
pub fn print_round_start(info: &RoundInfo, difficulty: Difficulty) {
    println!("{}", "─".repeat(60).cyan());
    if let Some(length) = info.word_length {
        println!(
            "New word: {}  ({length} letters, {} attempts)",
            masked_word(length).bright_yellow().bold(),
            info.max_attempts
        );
    }

    let labels: Vec<&str> = difficulty
        .allowed_kinds()
        .iter()
        .map(|kind| kind.label())
        .collect();
    println!("Hints on offer: {}\n", labels.join(", "));
}

/// Print the feedback for one guess
pub fn print_guess_feedback(outcome: &GuessOutcome) {
    println!("\n{}", evaluation_to_tiles(&outcome.evaluation));
    println!("{}", evaluation_to_emoji(&outcome.evaluation));

    if outcome.terminal.is_none() {
        println!("Attempts remaining: {}\n", outcome.attempts_remaining);
    }
}

/// Print the end-of-round summary and session stats
pub fn print_round_end(end: &RoundEnd, stats: &SessionStats) {
    println!();
    if end.won {
        println!(
            "{}",
            format!("✅ Correct! The word was \"{}\".", end.revealed_word)
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Out of attempts. The word was \"{}\".", end.revealed_word)
                .red()
                .bold()
        );
    }
    print_session_stats(stats);
    println!("Type 'new' for another word, or 'quit' to stop.\n");
}

/// Print one revealed hint
pub fn print_hint_payload(payload: &HintPayload) {
    match payload {
        HintPayload::GrammaticalFeatures(features) => {
            println!("💡 {} {features}\n", "Grammatical features:".bold());
        }
        HintPayload::Definition(definition) => {
            println!("💡 {} {definition}\n", "Definition:".bold());
        }
        HintPayload::Translations(translations) => {
            println!("💡 {} {translations}\n", "Translations:".bold());
        }
        HintPayload::Image(uri) => {
            println!("💡 {} {}\n", "Image:".bold(), uri.underline());
        }
        HintPayload::Pronunciation(reference) => {
            println!("💡 {} {}\n", "Pronunciation:".bold(), reference.underline());
        }
    }
}

/// Print which hints the difficulty offers and which are spent
pub fn print_hint_menu(difficulty: Difficulty, ledger: &HintLedger) {
    println!("\nHints on {difficulty} difficulty:");
    for kind in difficulty.allowed_kinds() {
        let status = if ledger.is_revealed(*kind) {
            "used".dimmed().to_string()
        } else {
            "available".green().to_string()
        };
        println!("  • hint {:<22} [{status}]", kind.name());
    }
    println!();
}

/// Print the session statistics
pub fn print_session_stats(stats: &SessionStats) {
    println!("\n📊 {}", "Session:".bright_cyan().bold());
    println!("   Played:    {}", stats.played);
    println!("   Won:       {}", stats.won);
    println!("   Win rate:  {}%", stats.win_rate());
    println!("   Score:     {}", stats.score.to_string().bright_yellow());
}

/// Print the result of the score command
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Guess {} against {}",
        result.guess.to_uppercase().bright_yellow().bold(),
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n{}", evaluation_to_tiles(&result.evaluation));
    println!("{}", evaluation_to_emoji(&result.evaluation));

    if result.exact {
        println!("\n{}", "Exact match!".green().bold());
    }
    println!();
}

/// Print the available lexemes and which metadata each carries
pub fn print_lexicon(lexemes: &[Lexeme]) {
    println!("\n{} lexemes available:\n", lexemes.len());
    for lexeme in lexemes {
        let mut tags = Vec::new();
        if lexeme.grammatical_features().is_some() {
            tags.push("grammar");
        }
        if lexeme.definition().is_some() {
            tags.push("definition");
        }
        if lexeme.translations().is_some() {
            tags.push("translations");
        }
        if lexeme.image().is_some() {
            tags.push("image");
        }
        if lexeme.pronunciation().is_some() {
            tags.push("audio");
        }

        println!(
            "  {:<14} {:>2} letters   {}",
            lexeme.lemma().bold(),
            lexeme.len(),
            tags.join(", ").dimmed()
        );
    }
    println!();
}
