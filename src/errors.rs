use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FreqError {
    #[error("failed to list directory {path:?}: {source}")]
    ListDir {
        path : PathBuf,
        source : std::io::Error,
    },
    
    #[error("failed to read {path:?}: {source}")]
    Read {
        path : PathBuf,
        source : std::io::Error,
    },
    
    #[error("{path:?} is not valid UTF-8")]
    Decode {
        path : PathBuf,
    },
    
    #[error("failed to load dictionary: {0}")]
    Dictionary(String),
    
    #[error("analyzer failed on input text: {0}")]
    Tokenize(String),
    
    #[error("failed to read config file {path:?}: {source}")]
    Config {
        path : PathBuf,
        source : std::io::Error,
    },
    
    #[error("failed to write report to {path:?}: {source}")]
    Write {
        path : PathBuf,
        source : csv::Error,
    },
}

impl FreqError {
    /// Errors tied to a single subtitle file, which keep-going mode may skip.
    pub fn is_per_file(&self) -> bool
    {
        match self
        {
            FreqError::Read{..} | FreqError::Decode{..} => true,
            _ => false
        }
    }
}

pub type Result<T> = std::result::Result<T, FreqError>;
