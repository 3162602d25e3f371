use std::fmt;

/// A `[text](href)` occurrence. Both fields are non-empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link<'a> {
    pub text: &'a str,
    pub href: &'a str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Plaintext(&'a str),
    Link(Link<'a>),
}

/// Result of segmenting a source text.
///
/// `Plain` holds the untouched source when no link was found, so callers can
/// render it directly without walking a sequence. `Segments` is never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segmented<'a> {
    Plain(&'a str),
    Segments(Vec<Segment<'a>>),
}

impl<'a> Segmented<'a> {
    pub fn has_links(&self) -> bool {
        matches!(self, Segmented::Segments(_))
    }

    pub fn links(&self) -> impl Iterator<Item = &Link<'a>> {
        let segments: &[Segment<'a>] = match self {
            Segmented::Plain(_) => &[],
            Segmented::Segments(segments) => segments,
        };
        segments.iter().filter_map(|segment| match segment {
            Segment::Link(link) => Some(link),
            Segment::Plaintext(_) => None,
        })
    }
}

impl fmt::Display for Link<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]({})", self.text, self.href)
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Plaintext(text) => f.write_str(text),
            Segment::Link(link) => write!(f, "{link}"),
        }
    }
}

// Writes the source form back, so `segment(s).to_string() == s`.
impl fmt::Display for Segmented<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segmented::Plain(text) => f.write_str(text),
            Segmented::Segments(segments) => {
                for segment in segments {
                    write!(f, "{segment}")?;
                }
                Ok(())
            }
        }
    }
}
