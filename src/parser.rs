use crate::entity::{Link, Segment, Segmented};

use nom::{
    bytes::complete::{is_not, take_till},
    character::complete::char,
    sequence::delimited,
    IResult,
};

enum State<'a> {
    ScanningPlaintext,
    InLinkText { open: usize },
    InHref { open: usize, text: &'a str },
}

/// Splits `source` into plain text runs and `[text](href)` links.
///
/// Returns `Segmented::Plain(source)` when no well-formed link occurs. A `[`
/// that does not start a well-formed link is kept as ordinary text, so the
/// segments always concatenate back to `source`.
pub fn segment(source: &str) -> Segmented<'_> {
    let mut segments = Vec::new();
    // start of the plain run not yet emitted
    let mut pending = 0;
    let mut cursor = 0;
    let mut state = State::ScanningPlaintext;

    loop {
        let rest = &source[cursor..];
        state = match state {
            State::ScanningPlaintext => {
                let (remaining, run) = parse_plaintext(rest);
                if remaining.is_empty() {
                    break;
                }
                cursor += run.len();
                State::InLinkText { open: cursor }
            }
            State::InLinkText { open } => match parse_link_text(rest) {
                Ok((remaining, text)) => {
                    cursor = source.len() - remaining.len();
                    State::InHref { open, text }
                }
                Err(_) => {
                    log::trace!("unclosed link text at byte {}", open);
                    cursor = open + 1;
                    State::ScanningPlaintext
                }
            },
            State::InHref { open, text } => match parse_href(rest) {
                Ok((remaining, href)) => {
                    if pending < open {
                        segments.push(Segment::Plaintext(&source[pending..open]));
                    }
                    segments.push(Segment::Link(Link { text, href }));
                    cursor = source.len() - remaining.len();
                    pending = cursor;
                    State::ScanningPlaintext
                }
                Err(_) => {
                    log::trace!("link text at byte {} has no href", open);
                    cursor = open + 1;
                    State::ScanningPlaintext
                }
            },
        };
    }

    if segments.is_empty() {
        return Segmented::Plain(source);
    }
    if pending < source.len() {
        segments.push(Segment::Plaintext(&source[pending..]));
    }
    log::trace!("segmented {} bytes into {} segments", source.len(), segments.len());
    Segmented::Segments(segments)
}

// everything up to the next '[', possibly empty
fn parse_plaintext(i: &str) -> (&str, &str) {
    let res: IResult<&str, &str> = take_till(|c: char| c == '[')(i);
    // take_till on complete input cannot fail
    res.unwrap_or(("", i))
}

fn parse_link_text(i: &str) -> IResult<&str, &str> {
    delimited(char('['), is_not("[]"), char(']'))(i)
}

fn parse_href(i: &str) -> IResult<&str, &str> {
    delimited(char('('), is_not("()"), char(')'))(i)
}
