use std::collections::HashMap;

/// Word → transcription pairs in file order.
///
/// Re-inserting a word replaces its transcription without moving it, so the
/// rendered dictionary keeps the position of the word's first occurrence.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TranscriptionMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl TranscriptionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: String, transcription: String) {
        match self.index.get(&word) {
            Some(&pos) => self.entries[pos].1 = transcription,
            None => {
                self.index.insert(word.clone(), self.entries.len());
                self.entries.push((word, transcription));
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.index
            .get(word)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(w, t)| (w.as_str(), t.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<W: Into<String>, T: Into<String>> FromIterator<(W, T)> for TranscriptionMap {
    fn from_iter<I: IntoIterator<Item = (W, T)>>(iter: I) -> Self {
        let mut map = TranscriptionMap::new();
        for (word, transcription) in iter {
            map.insert(word.into(), transcription.into());
        }
        map
    }
}
