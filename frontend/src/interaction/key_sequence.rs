/// Up, up, down, down, left, right, left, right, B, A.
pub const KONAMI: &[&str] = &[
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "KeyB",
    "KeyA",
];

/// Matches a fixed key-code sequence against a stream of key presses.
/// `progress` is the length of the longest prefix of the sequence that is
/// also a suffix of the keys seen so far.
#[derive(Debug, Clone)]
pub struct KeySequence {
    codes: Vec<String>,
    fallback: Vec<usize>,
    progress: usize,
}

impl KeySequence {
    pub fn new<S: AsRef<str>>(codes: &[S]) -> Self {
        let codes: Vec<String> = codes.iter().map(|c| c.as_ref().to_string()).collect();
        let fallback = failure_table(&codes);
        Self {
            codes,
            fallback,
            progress: 0,
        }
    }

    pub fn konami() -> Self {
        Self::new(KONAMI)
    }

    /// Feeds one key code. Returns true when it completes the sequence.
    pub fn push(&mut self, code: &str) -> bool {
        if self.codes.is_empty() {
            return false;
        }
        while self.progress > 0 && self.codes[self.progress] != code {
            self.progress = self.fallback[self.progress - 1];
        }
        if self.codes[self.progress] == code {
            self.progress += 1;
        }
        if self.progress == self.codes.len() {
            self.progress = self.fallback[self.progress - 1];
            return true;
        }
        false
    }
}

fn failure_table(codes: &[String]) -> Vec<usize> {
    let mut table = vec![0; codes.len()];
    let mut k = 0;
    for i in 1..codes.len() {
        while k > 0 && codes[i] != codes[k] {
            k = table[k - 1];
        }
        if codes[i] == codes[k] {
            k += 1;
        }
        table[i] = k;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(seq: &mut KeySequence, keys: &[&str]) -> usize {
        keys.iter().filter(|k| seq.push(k)).count()
    }

    #[test]
    fn matches_konami_code() {
        let mut seq = KeySequence::konami();
        assert_eq!(feed(&mut seq, KONAMI), 1);
    }

    #[test]
    fn recovers_from_repeated_prefix() {
        let mut seq = KeySequence::konami();
        let mut keys = vec!["ArrowUp"];
        keys.extend_from_slice(KONAMI);
        assert_eq!(feed(&mut seq, &keys), 1);
    }

    #[test]
    fn wrong_key_restarts_match() {
        let mut seq = KeySequence::konami();
        let mut keys = KONAMI[..5].to_vec();
        keys.push("KeyX");
        assert_eq!(feed(&mut seq, &keys), 0);
        assert_eq!(feed(&mut seq, KONAMI), 1);
    }

    #[test]
    fn matches_again_after_completion() {
        let mut seq = KeySequence::new(&["a", "b", "a"]);
        assert_eq!(feed(&mut seq, &["a", "b", "a", "b", "a"]), 2);
    }
}
