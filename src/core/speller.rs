use std::io::Write;

use crate::core::extenso::translate;
use crate::domain::model::{ErroResponse, ExtensoResponse};
use crate::utils::error::Result;
use crate::utils::validation::parse_number;

/// Spells each input on its own line and returns how many were rejected.
///
/// Plain mode writes `<input>: <phrase>` to `out` and rejections to `err`.
/// JSON mode writes every payload, accepted or not, to `out`.
pub fn write_spellings<O: Write, E: Write>(
    inputs: &[String],
    json: bool,
    out: &mut O,
    err: &mut E,
) -> Result<usize> {
    let mut failed = 0;

    for input in inputs {
        match parse_number(input).and_then(translate) {
            Ok(extenso) => {
                if json {
                    serde_json::to_writer(&mut *out, &ExtensoResponse { extenso })?;
                    writeln!(out)?;
                } else {
                    writeln!(out, "{}: {}", input, extenso)?;
                }
            }
            Err(e) => {
                tracing::debug!("{}", e.detail());
                failed += 1;
                if json {
                    let erro = ErroResponse { erro: e.to_string() };
                    serde_json::to_writer(&mut *out, &erro)?;
                    writeln!(out)?;
                } else {
                    writeln!(err, "{}: {}", input, e)?;
                }
            }
        }
    }

    Ok(failed)
}
