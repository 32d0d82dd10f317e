use crate::errors::TareaError;
use crate::types::{Envelope, EnvelopeErr, EnvelopeError, EnvelopeOk, SCHEMA_VERSION};
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub struct GlobalOpts {
    pub json: bool,
}

/// Runs one command action and prints either the human rendering or the
/// JSON envelope, returning the process exit code. All command executors
/// funnel through here so the two output modes cannot drift apart.
pub fn run_action<T, J, F, M, H>(
    command_line: &str,
    opts: GlobalOpts,
    action: F,
    map_json: M,
    human: H,
) -> i32
where
    F: FnOnce() -> Result<T, TareaError>,
    M: FnOnce(&T) -> J,
    H: FnOnce(&T),
    J: Serialize,
{
    match action() {
        Ok(value) => {
            if opts.json {
                let envelope = Envelope::Ok(EnvelopeOk {
                    schema_version: SCHEMA_VERSION,
                    command: command_line.to_string(),
                    ok: true,
                    data: map_json(&value),
                });
                match serde_json::to_string_pretty(&envelope) {
                    Ok(text) => println!("{}", text),
                    Err(error) => {
                        eprintln!("INTERNAL_ERROR: failed serializing json output: {}", error);
                        return 2;
                    }
                }
            } else {
                human(&value);
            }
            0
        }
        Err(error) => emit_error(command_line, opts, error),
    }
}

pub fn emit_error(command_line: &str, opts: GlobalOpts, error: TareaError) -> i32 {
    if opts.json {
        let envelope: Envelope<serde_json::Value> = Envelope::Err(EnvelopeErr {
            schema_version: SCHEMA_VERSION,
            command: command_line.to_string(),
            ok: false,
            error: EnvelopeError {
                code: error.code,
                message: error.message,
                details: error.details,
            },
        });
        match serde_json::to_string_pretty(&envelope) {
            Ok(text) => println!("{}", text),
            Err(json_error) => {
                eprintln!(
                    "INTERNAL_ERROR: failed serializing error envelope: {}",
                    json_error
                );
                return 2;
            }
        }
    } else {
        eprintln!("{}: {}", error.code, error.message);
        if let Some(details) = error.details {
            eprintln!("{}", details);
        }
    }
    error.exit_code
}
