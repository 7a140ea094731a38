//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `cleannote_core` linkage.
//! - Run one add/list probe against an in-memory database.
//! - Honor `CLEANNOTE_LOG_DIR`/`CLEANNOTE_LOG_LEVEL` for file logging.

use cleannote_core::db::open_db_in_memory;
use cleannote_core::{
    init_logging_from_config, CoreConfig, Note, NoteOrder, NoteUseCases, SqliteNoteRepository,
    NOTE_COLORS,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = init_logging_from_config(&CoreConfig::from_env()) {
        eprintln!("cleannote_core logging=disabled {err}");
    }

    println!("cleannote_core ping={}", cleannote_core::ping());
    println!("cleannote_core version={}", cleannote_core::core_version());

    match probe() {
        Ok(count) => {
            println!("cleannote_core probe=ok notes={count}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("cleannote_core probe=error {err}");
            ExitCode::FAILURE
        }
    }
}

fn probe() -> Result<usize, Box<dyn std::error::Error>> {
    let conn = open_db_in_memory()?;
    let repo = SqliteNoteRepository::try_new(&conn)?;
    let use_cases = NoteUseCases::new(&repo);

    use_cases
        .add_note
        .invoke(&Note::new("probe", "smoke check", 0, NOTE_COLORS[0]))?;
    let rejected = use_cases
        .add_note
        .invoke(&Note::new(" ", "blank title", 0, NOTE_COLORS[0]));
    if let Err(err) = rejected {
        println!("cleannote_core validation={err}");
    }

    Ok(use_cases.get_notes.invoke(NoteOrder::default())?.len())
}
