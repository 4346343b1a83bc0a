//! Line art used to draw the gutter and pointers of a code window.

#[derive(Clone, Copy, Debug)]
pub struct LineArt {
    pub(crate) vertical: char,
    pub(crate) up: char,
    pub(crate) arrow: &'static str,
    pub(crate) more: char,
}

impl LineArt {
    /// Unicode line art symbols
    pub const UNICODE: LineArt = LineArt {
        vertical: '│',
        up: '↑',
        arrow: "──▶",
        more: '…',
    };

    /// ASCII line art symbols
    pub const ASCII: LineArt = LineArt {
        vertical: '|',
        up: '^',
        arrow: "-->",
        more: '.',
    };
}
