use std::time::Instant;

use crate::session::{EditorSession, SessionError};

use super::{EditScript, Result, ScriptError, ScriptReport, ScriptStep, StepReport};

/// Replays `script` against `session` and returns the session in its final
/// state together with per-step timings.
pub fn run_script(
    script: &EditScript,
    mut session: EditorSession,
) -> Result<(EditorSession, ScriptReport)> {
    script.validate()?;
    session.set_container(script.container);

    let mut steps = Vec::with_capacity(script.steps.len());
    for (index, step) in script.steps.iter().enumerate() {
        let started = Instant::now();
        run_step(&mut session, step).map_err(|source| ScriptError::Step {
            index,
            action: step.action(),
            source,
        })?;
        steps.push(StepReport {
            action: step.action().to_string(),
            duration_us: started.elapsed().as_micros(),
        });
    }
    log::info!(
        "replayed {} steps, history {}/{}",
        steps.len(),
        session.history().cursor() + 1,
        session.history().len()
    );

    let (width, height) = session.working().dimensions();
    let report = ScriptReport {
        script_name: script.name.clone(),
        steps,
        history_len: session.history().len(),
        history_cursor: session.history().cursor(),
        viewport: *session.viewport(),
        width,
        height,
    };
    Ok((session, report))
}

fn run_step(session: &mut EditorSession, step: &ScriptStep) -> std::result::Result<(), SessionError> {
    match step {
        ScriptStep::Tool { mode } => session.set_tool(*mode),
        ScriptStep::Brush { size, hardness } => {
            if let Some(size) = size {
                session.set_brush_size(*size)?;
            }
            if let Some(hardness) = hardness {
                session.set_hardness(*hardness)?;
            }
        }
        ScriptStep::Undo => {
            if !session.undo() {
                log::debug!("undo ignored");
            }
        }
        ScriptStep::Redo => {
            if !session.redo() {
                log::debug!("redo ignored");
            }
        }
        ScriptStep::Reset => session.reset(),
        ScriptStep::Fit => {
            session.fit();
        }
        _ => {
            for event in step.events() {
                session.dispatch(&event)?;
            }
        }
    }
    Ok(())
}
