#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Digit,
    Literal(char),
}

/// Punctuation layout of a fully formatted number, with every digit position
/// turned into a slot that typed digits fill left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Template {
    slots: Vec<Slot>,
}

impl Template {
    pub(crate) fn from_formatted(formatted: &str) -> Self {
        let slots = formatted
            .chars()
            .map(|c| {
                if c.is_ascii_digit() {
                    Slot::Digit
                } else {
                    Slot::Literal(c)
                }
            })
            .collect();
        Self { slots }
    }

    /// Drop the first `count` digit slots along with the punctuation that
    /// separated them from the rest.
    pub(crate) fn skip_digits(&self, count: usize) -> Self {
        if count == 0 {
            return self.clone();
        }
        let mut seen = 0;
        let start = self
            .slots
            .iter()
            .position(|slot| {
                if seen == count && *slot == Slot::Digit {
                    return true;
                }
                if *slot == Slot::Digit {
                    seen += 1;
                }
                false
            })
            .unwrap_or(self.slots.len());
        Self {
            slots: self.slots[start..].to_vec(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.iter().filter(|s| **s == Slot::Digit).count()
    }

    /// Render `digits` into the layout, cut after the last filled slot.
    /// Punctuation ahead of the first slot, like an opening parenthesis, is
    /// emitted with the first digit. `None` when there are more digits than
    /// slots.
    pub(crate) fn fill(&self, digits: &str) -> Option<String> {
        if digits.chars().count() > self.capacity() {
            return None;
        }

        let mut out = String::with_capacity(self.slots.len());
        let mut pending = String::new();
        let mut remaining = digits.chars().peekable();
        for slot in &self.slots {
            if remaining.peek().is_none() {
                break;
            }
            match slot {
                Slot::Literal(c) => pending.push(*c),
                Slot::Digit => {
                    out.push_str(&pending);
                    pending.clear();
                    if let Some(d) = remaining.next() {
                        out.push(d);
                    }
                }
            }
        }
        Some(out)
    }
}
