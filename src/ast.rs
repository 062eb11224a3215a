/// A piece of a parsed template.
///
/// Which placeholder syntax produced a `Placeholder` depends on the grammar
/// the template was parsed with: `<name>` or `{name}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied to the output unchanged
    Literal(&'a str),
    /// A placeholder, holding just the name
    Placeholder(&'a str),
}

impl Segment<'_> {
    /// Name of the placeholder, if this segment is one
    pub fn name(&self) -> Option<&str> {
        match self {
            Segment::Literal(_) => None,
            Segment::Placeholder(name) => Some(*name),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Segment::Placeholder(_))
    }
}
