use aac_core::config::AacConfig;
use aac_core::glyphs::{glyph_for, BuiltinGlyphs};
use aac_core::speech::PendingSpeech;
use aac_core::{AacEngine, Intent, Phase, Snapshot};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, stdin, stdout, Write};
use std::path::Path;

fn main() -> io::Result<()> {
    let config = AacConfig::load_default().unwrap_or_else(|e| {
        eprintln!("[WARN] config unreadable ({e}), using defaults");
        AacConfig::default()
    });
    let _log_guard = aac_core::logging::init(&config);

    let speech = PendingSpeech::default();
    let mut engine = AacEngine::from_config(config, Box::new(speech.clone()));
    let mut last_spoken: Option<String> = None;
    let mut notice = String::new();

    loop {
        if let Some(text) = speech.take() {
            last_spoken = Some(text);
        }
        let snapshot = engine.snapshot();
        print_ui(&snapshot, last_spoken.as_deref(), &notice)?;
        notice.clear();

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let cmd = input.trim();
        let (head, arg) = match cmd.split_once(' ') {
            Some((head, arg)) => (head, arg.trim()),
            None => (cmd, ""),
        };
        let index = |s: &str| s.parse::<usize>().ok().filter(|&n| n > 0).map(|n| n - 1);

        let intent = match head {
            "q" | "exit" => break,
            "" => None,
            "t" => index(arg)
                .and_then(|i| snapshot.starters.get(i).cloned())
                .map(|tile| Intent::SelectStarter { tile }),
            "k" => index(arg)
                .and_then(|i| snapshot.contexts.get(i).cloned())
                .map(|tile| Intent::SelectContext { tile }),
            "r" => index(arg)
                .and_then(|i| snapshot.routines.get(i))
                .map(|r| Intent::OpenRoutine { key: r.key.clone() }),
            "s" => Some(Intent::SaveFavorite),
            "p" => Some(Intent::SpeakSentence),
            "f" => index(arg)
                .and_then(|i| snapshot.favorites.get(i).cloned())
                .map(|sentence| Intent::SpeakFavorite { sentence }),
            "u" => index(arg)
                .and_then(|i| snapshot.favorites.get(i).cloned())
                .map(|sentence| Intent::RemoveFavorite { sentence }),
            "c" => Some(Intent::ResetFlow),
            "e" => Some(Intent::ToggleEditMode),
            "+" => Some(Intent::EditAdd { value: arg.to_string() }),
            "-" => index(arg)
                .and_then(|i| snapshot.options.get(i).cloned())
                .map(|value| Intent::EditRemove { value }),
            "x" => Some(if snapshot.open_routine.is_some() {
                Intent::CloseRoutine
            } else {
                Intent::CloseChoice
            }),
            "i" => {
                match std::fs::read(arg) {
                    Ok(bytes) => {
                        if engine.import(&bytes).is_ok() {
                            notice = "Vocabulary imported.".to_string();
                        }
                    }
                    Err(e) => notice = format!("Cannot read {arg}: {e}"),
                }
                None
            }
            "o" => {
                let exported = engine.export();
                let dir = if arg.is_empty() { "." } else { arg };
                let path = Path::new(dir).join(&exported.file_name);
                notice = match std::fs::write(&path, &exported.bytes) {
                    Ok(()) => format!("Exported to {}", path.display()),
                    Err(e) => format!("Cannot write {}: {e}", path.display()),
                };
                None
            }
            n => index(n).and_then(|i| pick(&snapshot, i)),
        };

        match intent {
            Some(intent) => {
                engine.dispatch(intent);
            }
            None if !head.is_empty() && notice.is_empty() && !matches!(head, "i" | "o") => {
                notice = format!("Nothing to do for '{cmd}'.");
            }
            None => {}
        }
    }

    println!("\nBye.");
    Ok(())
}

/// A bare number picks from whichever menu is in front.
fn pick(snapshot: &Snapshot, i: usize) -> Option<Intent> {
    if let Some(routine) = &snapshot.open_routine {
        return routine
            .phrases
            .get(i)
            .cloned()
            .map(|phrase| Intent::ChooseRoutinePhrase { phrase });
    }
    if let Some(choice) = &snapshot.choice {
        return choice
            .get(i)
            .map(|c| Intent::ResolveChoice { item: c.value.clone() });
    }
    match snapshot.phase {
        Phase::Idle => snapshot
            .starters
            .get(i)
            .cloned()
            .map(|tile| Intent::SelectStarter { tile }),
        Phase::StarterChosen => snapshot
            .contexts
            .get(i)
            .cloned()
            .map(|tile| Intent::SelectContext { tile }),
        Phase::ContextChosen | Phase::ChoicePending => snapshot
            .options
            .get(i)
            .cloned()
            .map(|value| Intent::SelectSpecific { value }),
    }
}

fn print_ui(snapshot: &Snapshot, spoken: Option<&str>, notice: &str) -> io::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    let glyphs = BuiltinGlyphs;

    println!("{}", "Aahil’s AAC (terminal simulator)".bold());
    println!("---------------------------------------------------------------");
    println!("N pick from menu | t N starter | k N context | r N routine | x close");
    println!("s save | p speak | f N speak fav | u N unsave | c clear | e edit mode | q quit");
    println!("i FILE import | o DIR export | + TEXT add option | - N remove option (edit mode)\n");

    if let Some(err) = &snapshot.import_error {
        println!("{}", err.as_str().red());
    }
    if !notice.is_empty() {
        println!("{}", notice.yellow());
    }

    if snapshot.sentence.is_empty() {
        println!("Sentence: {}", "Tap tiles to build a sentence…".dark_grey());
    } else {
        println!("Sentence: {}", snapshot.sentence.as_str().bold());
    }
    if let Some(text) = spoken {
        println!("🔊 {text}");
    }

    println!("\n{}", "Tier 1 – Starters".underlined());
    for (i, tile) in snapshot.starters.iter().enumerate() {
        let marker = if snapshot.selected_starter.as_deref() == Some(tile.key.as_str()) {
            "*"
        } else {
            " "
        };
        println!(" {marker}{:>2}: {} {}", i + 1, glyph_for(&glyphs, &tile.icon), tile.label);
    }

    if snapshot.phase != Phase::Idle {
        println!("\n{}", "Tier 2 – Context".underlined());
        for (i, tile) in snapshot.contexts.iter().enumerate() {
            let marker = if snapshot.selected_context.as_ref().map(|c| &c.key) == Some(&tile.key) {
                "*"
            } else {
                " "
            };
            println!(" {marker}{:>2}: {} {}", i + 1, glyph_for(&glyphs, &tile.icon), tile.label);
        }
    }

    if snapshot.selected_context.is_some() {
        let edit = if snapshot.edit_mode { " (editing)" } else { "" };
        println!("\n{}{edit}", "Tier 3 – Options".underlined());
        if snapshot.options.is_empty() {
            println!("  {}", "No options here yet.".dark_grey());
        }
        for (i, option) in snapshot.options.iter().enumerate() {
            println!("  {:>2}: {option}", i + 1);
        }
    }

    println!("\n{}", "Daily Routines".underlined());
    let routines: Vec<String> = snapshot
        .routines
        .iter()
        .enumerate()
        .map(|(i, r)| format!("{}:{} {}", i + 1, glyph_for(&glyphs, &r.icon), r.label))
        .collect();
    println!("  {}", routines.join("  "));

    println!("\n{}", "Favorites".underlined());
    if snapshot.favorites.is_empty() {
        println!("  {}", "Saved sentences will appear here.".dark_grey());
    }
    for (i, fav) in snapshot.favorites.iter().enumerate() {
        println!("  {:>2}: {fav}", i + 1);
    }

    if let Some(routine) = &snapshot.open_routine {
        println!("\n{} {}", glyph_for(&glyphs, &routine.icon), routine.label.as_str().bold());
        for (i, phrase) in routine.phrases.iter().enumerate() {
            println!("  {:>2}: {}", i + 1, phrase.join(" "));
        }
    } else if let Some(choice) = &snapshot.choice {
        println!("\n{}", "Choose one".bold());
        for (i, candidate) in choice.iter().enumerate() {
            println!("  {:>2}: {} ({:?})", i + 1, candidate.value, candidate.source);
        }
    }

    print!("\n> ");
    out.flush()
}
