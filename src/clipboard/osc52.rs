use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Write};

use super::backend::{ClipboardError, ClipboardResult};

pub fn copy(text: &str) -> ClipboardResult {
    write_sequence(&mut io::stdout(), text)
}

fn write_sequence(out: &mut impl Write, text: &str) -> ClipboardResult {
    out.write_all(encode_osc52(text).as_bytes())
        .map_err(|_| ClipboardError::WriteError)?;
    out.flush().map_err(|_| ClipboardError::WriteError)
}

pub fn encode_osc52(text: &str) -> String {
    let encoded = STANDARD.encode(text);
    format!("\x1b]52;c;{}\x07", encoded)
}
