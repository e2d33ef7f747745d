use anyhow::Context;
use clap::Parser;
use log::{debug, info, warn};

mod cleaner;
mod config;
mod errors;
mod frequency;
mod report;
mod scanner;
mod tokenizer;

use cleaner::Cleaner;
use config::{Args, Config};
use errors::Result;
use frequency::FreqTable;
use report::{build_report, write_report, ReportRow};
use scanner::{get_filenames, load_file};
use tokenizer::{MecabSegmenter, Segmenter, Tokenizer};

#[derive(Debug, Default, PartialEq, Eq)]
struct RunSummary {
    documents : usize,
    skipped : usize,
    tokens : u64,
    distinct : usize,
    rows : usize,
}

struct FreqSystem<S : Segmenter> {
    config : Config,
    cleaner : Cleaner,
    tokenizer : Tokenizer<S>,
}

impl<S : Segmenter> FreqSystem<S> {
    fn init(config : Config, segmenter : S) -> FreqSystem<S>
    {
        let cleaner = Cleaner::new(config.punctuation.clone());
        let tokenizer = Tokenizer::new(segmenter, config.exclusion_set.clone());
        FreqSystem{config, cleaner, tokenizer}
    }
    fn count_words(&self, summary : &mut RunSummary) -> Result<FreqTable>
    {
        let mut counts = FreqTable::new();
        for (path, format) in get_filenames(&self.config.input_directory)?
        {
            let doc = match load_file(&path, format)
            {
                Ok(doc) => doc,
                Err(err) if self.config.keep_going && err.is_per_file() =>
                {
                    warn!("skipping: {}", err);
                    summary.skipped += 1;
                    continue;
                }
                Err(err) => return Err(err)
            };
            info!("analyzing {}", doc.name);
            let cleaned = self.cleaner.clean(&doc.text, doc.format);
            let tokens = self.tokenizer.tokenize(&cleaned)?;
            debug!("{}: {} tokens", doc.name, tokens.len());
            counts.update(tokens);
            summary.documents += 1;
        }
        Ok(counts)
    }
    fn build_rows(&self, summary : &mut RunSummary) -> Result<Vec<ReportRow>>
    {
        let counts = self.count_words(summary)?;
        summary.tokens = counts.total();
        summary.distinct = counts.len();
        if counts.is_empty()
        {
            warn!("no countable words found in {:?}", self.config.input_directory);
        }
        let rows = build_report(counts, self.config.top_n);
        summary.rows = rows.len();
        Ok(rows)
    }
    fn run(&self) -> Result<RunSummary>
    {
        let mut summary = RunSummary::default();
        let rows = self.build_rows(&mut summary)?;
        write_report(&self.config.output_path, &rows)?;
        Ok(summary)
    }
}

fn main() -> anyhow::Result<()>
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = Config::from_args(&args).context("loading configuration")?;
    debug!("{} stopwords", config.exclusion_set.len());

    let segmenter = MecabSegmenter::load(&args.dict_dir, args.user_dict.as_deref())
        .with_context(|| format!("loading analyzer dictionary from {:?}", args.dict_dir))?;
    let system = FreqSystem::init(config, segmenter);
    let summary = system.run().with_context(|| format!("building report for {:?}", args.input_dir))?;

    info!("processed {} files ({} skipped)", summary.documents, summary.skipped);
    info!("counted {} tokens, {} distinct words", summary.tokens, summary.distinct);
    info!("wrote {} rows to {:?}", summary.rows, args.output);
    Ok(())
}
