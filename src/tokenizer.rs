use std::collections::HashSet;
use std::path::Path;

use log::trace;
use notmecab::{Blob, Dict, TokenType};

use crate::errors::{FreqError, Result};

pub const DEFAULT_STOPWORDS : &[&str] = &[
    "の", "は", "に", "で", "を", "と", "が", "た", "だ", "て", "な", "も", "から", "よ", "し", "あり", "ない", "ん",
];

/// Index of the base form in an IPADIC feature string.
const BASE_FORM_FIELD : usize = 6;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Morpheme {
    pub surface : String,
    pub base : String,
}

/// Anything that can split text into morphemes and report their dictionary forms.
pub trait Segmenter {
    fn segment(&self, text : &str) -> Result<Vec<Morpheme>>;
}

#[derive(Clone, Debug)]
pub struct StopwordSet {
    words : HashSet<String>,
}

impl StopwordSet {
    /// One word per line; blank lines and lines starting with `#` are skipped.
    pub fn parse(text : &str) -> StopwordSet
    {
        let words = text.lines().map(|line| line.trim()).filter(|line| !line.is_empty() && !line.starts_with('#')).map(|line| line.to_string()).collect();
        StopwordSet{words}
    }
    pub fn contains(&self, word : &str) -> bool
    {
        self.words.contains(word)
    }
    pub fn len(&self) -> usize
    {
        self.words.len()
    }
}

impl Default for StopwordSet {
    fn default() -> StopwordSet
    {
        StopwordSet{words : DEFAULT_STOPWORDS.iter().map(|word| word.to_string()).collect()}
    }
}

fn parse_csv_line(text : &str) -> Vec<String>
{
    let mut reader = csv::ReaderBuilder::new().has_headers(false).flexible(true).from_reader(text.as_bytes());
    match reader.records().next()
    {
        Some(Ok(record)) => record.iter().map(|x| x.to_string()).collect(),
        _ => Vec::new()
    }
}

fn base_form_from_feature(feature : &str, surface : &str) -> String
{
    match parse_csv_line(feature).get(BASE_FORM_FIELD)
    {
        Some(base) if base != "*" && !base.is_empty() => base.clone(),
        _ => surface.to_string()
    }
}

pub struct MecabSegmenter {
    dict : Dict
}

impl MecabSegmenter {
    /// Loads `sys.dic`, `unk.dic`, `matrix.bin` and `char.bin` from `dict_dir`.
    pub fn load(dict_dir : &Path, user_dict : Option<&Path>) -> Result<MecabSegmenter>
    {
        let mut dict = Dict::load(
            open_blob(&dict_dir.join("sys.dic"))?,
            open_blob(&dict_dir.join("unk.dic"))?,
            open_blob(&dict_dir.join("matrix.bin"))?,
            open_blob(&dict_dir.join("char.bin"))?,
        ).map_err(|err| FreqError::Dictionary(format!("{:?}", err)))?;
        if let Some(user_dict) = user_dict
        {
            dict.load_user_dictionary(open_blob(user_dict)?).map_err(|err| FreqError::Dictionary(format!("{:?}", err)))?;
        }
        Ok(MecabSegmenter{dict})
    }
}

fn open_blob(path : &Path) -> Result<Blob>
{
    let name = path.to_str().ok_or_else(|| FreqError::Dictionary(format!("{:?}: path is not valid unicode", path)))?;
    Blob::open(name).map_err(|err| FreqError::Dictionary(format!("{:?}: {:?}", path, err)))
}

impl Segmenter for MecabSegmenter {
    fn segment(&self, text : &str) -> Result<Vec<Morpheme>>
    {
        let (tokens, _cost) = self.dict.tokenize(text).map_err(|err| FreqError::Tokenize(format!("{:?}", err)))?;
        let mut ret = Vec::with_capacity(tokens.len());
        for token in tokens
        {
            let surface = token.get_text(text).to_string();
            let base = if token.kind == TokenType::UNK
            {
                surface.clone()
            }
            else
            {
                base_form_from_feature(token.get_feature(&self.dict), &surface)
            };
            ret.push(Morpheme{surface, base});
        }
        Ok(ret)
    }
}

pub struct Tokenizer<S : Segmenter> {
    segmenter : S,
    stopwords : StopwordSet,
}

impl<S : Segmenter> Tokenizer<S> {
    pub fn new(segmenter : S, stopwords : StopwordSet) -> Tokenizer<S>
    {
        Tokenizer{segmenter, stopwords}
    }
    fn keep(&self, base : &str) -> bool
    {
        base.chars().count() > 1 && !self.stopwords.contains(base)
    }
    /// Base forms of the countable morphemes of `text`, in order of occurrence.
    pub fn tokenize(&self, text : &str) -> Result<Vec<String>>
    {
        if text.is_empty()
        {
            return Ok(Vec::new());
        }
        let morphemes = self.segmenter.segment(text)?;
        Ok(morphemes.into_iter().filter_map(|morpheme|
        {
            let base = morpheme.base.trim();
            if self.keep(base)
            {
                Some(base.to_string())
            }
            else
            {
                trace!("dropping {} ({})", morpheme.surface, base);
                None
            }
        }).collect())
    }
}
