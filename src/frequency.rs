use std::collections::HashMap;

/// Word counts across every document of a run. Iteration follows first-insertion order.
#[derive(Clone, Debug, Default)]
pub struct FreqTable {
    index : HashMap<String, usize>,
    entries : Vec<(String, u64)>,
}

impl FreqTable {
    pub fn new() -> FreqTable
    {
        FreqTable::default()
    }
    pub fn update<I, T>(&mut self, tokens : I)
        where I : IntoIterator<Item = T>, T : Into<String>
    {
        for token in tokens
        {
            let token = token.into();
            if let Some(&i) = self.index.get(&token)
            {
                self.entries[i].1 += 1;
            }
            else
            {
                self.index.insert(token.clone(), self.entries.len());
                self.entries.push((token, 1));
            }
        }
    }
    pub fn get(&self, word : &str) -> u64
    {
        self.index.get(word).map(|&i| self.entries[i].1).unwrap_or(0)
    }
    pub fn len(&self) -> usize
    {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool
    {
        self.entries.is_empty()
    }
    pub fn total(&self) -> u64
    {
        self.entries.iter().map(|(_, count)| count).sum()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)>
    {
        self.entries.iter().map(|(word, count)| (word.as_str(), *count))
    }
    pub fn into_entries(self) -> Vec<(String, u64)>
    {
        self.entries
    }
}
