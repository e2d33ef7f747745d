use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::cleaner::PunctuationSet;
use crate::errors::{FreqError, Result};
use crate::report::DEFAULT_TOP_N;
use crate::tokenizer::StopwordSet;

/// Count dictionary-form words across a folder of .srt and .ass subtitles
#[derive(Parser, Debug)]
#[command(name = "subfreq", version)]
pub struct Args {
    /// Directory containing the subtitle files
    pub input_dir : PathBuf,

    /// Where the Word,Frequency report is written (overwritten if present)
    #[arg(short, long, default_value = "frequency.csv")]
    pub output : PathBuf,

    /// Maximum number of rows in the report
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    pub top_n : usize,

    /// Stopword list replacing the built-in one, one word per line
    #[arg(long)]
    pub stopwords : Option<PathBuf>,

    /// File whose characters replace the built-in full-width punctuation set
    #[arg(long)]
    pub punctuation : Option<PathBuf>,

    /// Directory holding sys.dic, unk.dic, matrix.bin and char.bin
    #[arg(long, default_value = "data")]
    pub dict_dir : PathBuf,

    /// Optional user dictionary csv for the analyzer
    #[arg(long)]
    pub user_dict : Option<PathBuf>,

    /// Log and skip subtitle files that cannot be read instead of aborting
    #[arg(long)]
    pub keep_going : bool,
}

pub struct Config {
    pub input_directory : PathBuf,
    pub output_path : PathBuf,
    pub top_n : usize,
    pub exclusion_set : StopwordSet,
    pub punctuation : PunctuationSet,
    pub keep_going : bool,
}

impl Config {
    pub fn new(input_directory : PathBuf, output_path : PathBuf) -> Config
    {
        Config {
            input_directory,
            output_path,
            top_n : DEFAULT_TOP_N,
            exclusion_set : StopwordSet::default(),
            punctuation : PunctuationSet::default(),
            keep_going : false,
        }
    }
    pub fn from_args(args : &Args) -> Result<Config>
    {
        let mut config = Config::new(args.input_dir.clone(), args.output.clone());
        config.top_n = args.top_n;
        config.keep_going = args.keep_going;
        if let Some(path) = &args.stopwords
        {
            config.exclusion_set = StopwordSet::parse(&read_config_file(path)?);
        }
        if let Some(path) = &args.punctuation
        {
            config.punctuation = PunctuationSet::from_chars(&read_config_file(path)?);
        }
        Ok(config)
    }
}

fn read_config_file(path : &Path) -> Result<String>
{
    fs::read_to_string(path).map_err(|source| FreqError::Config{path : path.to_path_buf(), source})
}
