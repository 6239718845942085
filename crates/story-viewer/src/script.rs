// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Line-oriented input scripts.
//!
//! One command per line; `#` starts a comment:
//!
//! ```text
//! next | prev | key <name> | jump <ordinal> | start <year> | end <year>
//! hover <x> <y> | leave | click <x> <y> | clear | reset
//! ```

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use story_core::{InputEvent, Key};

/// One parsed script line.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    /// 1-based source line.
    pub line: usize,
    /// Command text without the comment.
    pub text: String,
    /// Event to dispatch.
    pub event: InputEvent,
}

/// Read a script from `path`, or stdin when `None`.
pub fn read(path: Option<&Path>) -> Result<Vec<Step>> {
    let source = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read script {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read script from stdin")?;
            buf
        }
    };
    parse(&source)
}

/// Parse a whole script.
pub fn parse(source: &str) -> Result<Vec<Step>> {
    let mut steps = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let line = idx + 1;
        let text = raw.split('#').next().unwrap_or_default().trim();
        if text.is_empty() {
            continue;
        }
        let event = parse_command(text).with_context(|| format!("line {line}: `{text}`"))?;
        steps.push(Step {
            line,
            text: text.to_owned(),
            event,
        });
    }
    Ok(steps)
}

fn arg<T: FromStr>(args: &[&str], idx: usize, what: &str) -> Result<T> {
    let Some(raw) = args.get(idx) else {
        bail!("missing {what}");
    };
    raw.parse()
        .map_err(|_| anyhow::anyhow!("invalid {what} `{raw}`"))
}

fn parse_command(text: &str) -> Result<InputEvent> {
    let mut words = text.split_whitespace();
    let command = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();
    let arity = match command {
        "next" | "prev" | "leave" | "clear" | "reset" => 0,
        "key" | "jump" | "start" | "end" => 1,
        "hover" | "click" => 2,
        other => bail!("unknown command `{other}`"),
    };
    if args.len() > arity {
        bail!("`{command}` takes {arity} argument(s)");
    }
    Ok(match command {
        "next" => InputEvent::NextClicked,
        "prev" => InputEvent::PrevClicked,
        "leave" => InputEvent::PointerLeave,
        "clear" => InputEvent::ClearSelectionClicked,
        "reset" => InputEvent::Reset,
        "key" => InputEvent::Key(Key::from_name(&arg::<String>(&args, 0, "key name")?)),
        "jump" => InputEvent::JumpTo(arg(&args, 0, "scene ordinal")?),
        "start" => InputEvent::StartYearInput(arg(&args, 0, "year")?),
        "end" => InputEvent::EndYearInput(arg(&args, 0, "year")?),
        "hover" => InputEvent::PointerMove([arg(&args, 0, "x")?, arg(&args, 1, "y")?]),
        _ => InputEvent::Click([arg(&args, 0, "x")?, arg(&args, 1, "y")?]),
    })
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let steps = parse("# tour\nnext\n\n  key ArrowRight # forward\njump 3\n").expect("parse");
        let events: Vec<_> = steps.iter().map(|s| s.event.clone()).collect();
        assert_eq!(
            events,
            [
                InputEvent::NextClicked,
                InputEvent::Key(Key::ArrowRight),
                InputEvent::JumpTo(3),
            ]
        );
        assert_eq!(steps[1].line, 4);
        assert_eq!(steps[1].text, "key ArrowRight");
    }

    #[test]
    fn pointer_commands_take_coordinates() {
        let steps = parse("hover 218 227.5\nclick 1 2\nleave").expect("parse");
        assert_eq!(steps[0].event, InputEvent::PointerMove([218.0, 227.5]));
        assert_eq!(steps[1].event, InputEvent::Click([1.0, 2.0]));
        assert_eq!(steps[2].event, InputEvent::PointerLeave);
    }

    #[test]
    fn errors_name_the_line() {
        let err = parse("next\njump x").expect_err("bad ordinal");
        assert!(format!("{err:#}").contains("line 2"));
        let err = parse("fly").expect_err("unknown");
        assert!(format!("{err:#}").contains("unknown command"));
        let err = parse("next 3").expect_err("arity");
        assert!(format!("{err:#}").contains("takes 0"));
        let err = parse("click 4").expect_err("missing y");
        assert!(format!("{err:#}").contains("missing y"));
    }
}
