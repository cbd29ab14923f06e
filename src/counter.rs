pub const STAT_SELECTOR: &str = ".stat-number";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CounterFrame {
    Counting(String),
    Finished(String),
}

impl CounterFrame {
    pub fn text(&self) -> &str {
        match self {
            Self::Counting(text) | Self::Finished(text) => text,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

#[derive(Clone, Debug)]
pub struct StatCounter {
    original: String,
    target: f64,
    suffix: Option<char>,
    increment: f64,
    current: f64,
}

impl StatCounter {
    /// Returns `None` when `text` has no leading integer to count toward.
    pub fn parse(text: &str, steps: u32) -> Option<Self> {
        let trimmed = text.trim();
        let digits_end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        let target = trimmed[..digits_end].parse::<f64>().ok()?;
        let suffix = trimmed.chars().last().filter(|c| matches!(c, '+' | '%'));

        Some(Self {
            original: text.to_string(),
            target,
            suffix,
            increment: target / f64::from(steps.max(1)),
            current: 0.0,
        })
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn tick(&mut self) -> CounterFrame {
        self.current += self.increment;

        if self.current >= self.target {
            return CounterFrame::Finished(self.original.clone());
        }

        let mut text = format!("{:.0}", self.current.floor());
        if let Some(suffix) = self.suffix {
            text.push(suffix);
        }
        CounterFrame::Counting(text)
    }
}
