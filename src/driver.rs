//! Line-oriented front end used by the `slirc-filter` binary.
//!
//! Input is one `<nick> <body>` message per line. Output is what the UI
//! would display: `<nick> body`, or `<nick> (via bot) body` for unwrapped
//! relaybot lines. Dropped messages produce no output.

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::filter::{Registry, Verdict, process};
use crate::message::IncomingMessage;

/// Filter every line of `input` into `out`.
///
/// Bad lines never stop the stream: invalid UTF-8 is decoded lossily and
/// lines without a space are skipped with a warning. Only I/O errors are
/// returned.
pub fn run<R: BufRead, W: Write>(registry: &Registry, input: R, mut out: W) -> io::Result<()> {
    for raw in input.split(b'\n') {
        let mut raw = raw?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        let line = match String::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                let line = String::from_utf8_lossy(e.as_bytes()).into_owned();
                warn!(line = %line, "Replaced invalid UTF-8 in line");
                line
            }
        };

        let Some((nick, body)) = line.split_once(' ') else {
            warn!(line = %line, "Skipping malformed line");
            continue;
        };

        let mut msg = IncomingMessage::new(nick, body);
        match process(registry, &mut msg) {
            Verdict::Drop => {}
            Verdict::Deliver { rewritten: true } => {
                writeln!(out, "<{}> (via {}) {}", msg.sender_nick, msg.server_alias, msg.body)?;
            }
            Verdict::Deliver { rewritten: false } => {
                writeln!(out, "<{}> {}", msg.sender_nick, msg.body)?;
            }
        }
    }
    out.flush()
}
