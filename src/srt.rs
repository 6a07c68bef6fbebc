/// A single subtitle block. Times are in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Subtitle {
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub text: String,
}

impl Subtitle {
    pub(crate) fn open(index: usize) -> Self {
        Self {
            index,
            start: 0.0,
            end: 0.0,
            text: String::new(),
        }
    }

    pub(crate) fn push_line(&mut self, line: &str) {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(line);
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}
