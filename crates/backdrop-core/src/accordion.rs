/// Single-open accordion over `len` entries (the FAQ list).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Open `index`, or close it when it is already open. Out-of-range
    /// indices leave the state untouched.
    pub fn toggle(&mut self, index: usize) -> Option<usize> {
        if index < self.len {
            self.open = if self.is_open(index) { None } else { Some(index) };
        }
        self.open
    }
}
