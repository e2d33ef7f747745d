use std::fs::{File, read_dir};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::errors::{FreqError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubtitleFormat {
    /// SubRip: numbered cues with `HH:MM:SS,mmm --> HH:MM:SS,mmm` timing lines
    Srt,
    /// Advanced SubStation Alpha: `Dialogue:` records with the text in the tenth field
    Ass,
}

impl SubtitleFormat {
    pub fn from_path(path : &Path) -> Option<SubtitleFormat>
    {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("srt")
        {
            Some(SubtitleFormat::Srt)
        }
        else if ext.eq_ignore_ascii_case("ass")
        {
            Some(SubtitleFormat::Ass)
        }
        else
        {
            None
        }
    }
}

pub struct RawDocument {
    pub name : String,
    pub format : SubtitleFormat,
    pub text : String,
}

fn file_to_string(path : &Path) -> Result<String>
{
    let mut bytes = Vec::new();
    let mut file = File::open(path).map_err(|source| FreqError::Read{path : path.to_path_buf(), source})?;
    file.read_to_end(&mut bytes).map_err(|source| FreqError::Read{path : path.to_path_buf(), source})?;
    let text = String::from_utf8(bytes).map_err(|_| FreqError::Decode{path : path.to_path_buf()})?;
    match text.strip_prefix('\u{feff}')
    {
        Some(rest) => Ok(rest.to_string()),
        None => Ok(text)
    }
}

/// Lists the subtitle files directly inside `location`, sorted by path.
pub fn get_filenames(location : &Path) -> Result<Vec<(PathBuf, SubtitleFormat)>>
{
    let list_err = |source| FreqError::ListDir{path : location.to_path_buf(), source};
    let mut ret = Vec::new();
    for entry in read_dir(location).map_err(list_err)?
    {
        let path = entry.map_err(list_err)?.path();
        if !path.is_file()
        {
            continue;
        }
        if let Some(format) = SubtitleFormat::from_path(&path)
        {
            ret.push((path, format));
        }
    }
    ret.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(ret)
}

pub fn load_file(path : &Path, format : SubtitleFormat) -> Result<RawDocument>
{
    let name = path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default();
    let text = file_to_string(path)?;
    Ok(RawDocument{name, format, text})
}
