// Line-protocol host: a UI process writes commands on stdin and reads
// snapshots and speech requests from stdout. Logs go to a file.
use aac_core::config::AacConfig;
use aac_core::speech::PendingSpeech;
use aac_core::{AacEngine, Intent};
use std::io::{self, BufRead, Write};
use std::path::Path;

fn main() -> io::Result<()> {
    let config = AacConfig::load_default().unwrap_or_else(|e| {
        eprintln!("[aac] config unreadable ({e}), using defaults");
        AacConfig::default()
    });
    let _log_guard = aac_core::logging::init(&config);
    tracing::info!("--- AAC host starting ---");

    let speech = PendingSpeech::default();
    let mut engine = AacEngine::from_config(config, Box::new(speech.clone()));
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    send_snapshot(&engine, &speech, &mut stdout)?;

    for line in stdin.lock().lines() {
        let input = line?;
        tracing::debug!(input = %input, "host <-");
        let (command, rest) = match input.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (input.trim(), ""),
        };

        match command {
            "INTENT" => match serde_json::from_str::<Intent>(rest) {
                Ok(intent) => {
                    engine.dispatch(intent);
                    send_snapshot(&engine, &speech, &mut stdout)?;
                }
                Err(e) => writeln!(stdout, "ERROR unrecognized intent: {e}")?,
            },
            "SNAPSHOT" => send_snapshot(&engine, &speech, &mut stdout)?,
            "IMPORT" => {
                match std::fs::read(rest) {
                    Ok(bytes) => match engine.import(&bytes) {
                        Ok(()) => writeln!(stdout, "IMPORT_OK")?,
                        Err(e) => writeln!(stdout, "IMPORT_ERROR {}", e.user_message())?,
                    },
                    Err(e) => writeln!(stdout, "ERROR cannot read {rest}: {e}")?,
                }
                send_snapshot(&engine, &speech, &mut stdout)?;
            }
            "EXPORT" => {
                let exported = engine.export();
                let dir = if rest.is_empty() { "." } else { rest };
                let path = Path::new(dir).join(&exported.file_name);
                match std::fs::write(&path, &exported.bytes) {
                    Ok(()) => writeln!(stdout, "EXPORTED {}", path.display())?,
                    Err(e) => writeln!(stdout, "ERROR cannot write {}: {e}", path.display())?,
                }
            }
            "EXIT" => {
                tracing::info!("received EXIT");
                break;
            }
            _ => {
                tracing::debug!(command, "unknown command");
                writeln!(stdout, "ERROR unknown command")?;
            }
        }
        stdout.flush()?;
    }
    tracing::info!("AAC host shutting down");
    Ok(())
}

fn send_snapshot(engine: &AacEngine, speech: &PendingSpeech, stdout: &mut io::Stdout) -> io::Result<()> {
    if let Some(text) = speech.take() {
        tracing::debug!(text = %text, "host -> SPEAK");
        writeln!(stdout, "SPEAK {text}")?;
    }
    let json = serde_json::to_string(&engine.snapshot()).map_err(io::Error::other)?;
    writeln!(stdout, "SNAPSHOT {json}")?;
    stdout.flush()
}
