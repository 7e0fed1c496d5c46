mod logging;
mod opts;

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader};
use tracing::info;
use zerolock::driver::{LineSource, OutputFormat, PromptSource, ReaderSource, Session};

fn main() -> Result<()> {
    let opts = opts::parse();
    logging::init(opts.verbose)?;

    let mut source: Box<dyn LineSource> = match (&opts.input, opts.interactive) {
        (Some(path), _) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Box::new(ReaderSource::new(BufReader::new(file)))
        }
        (None, true) => Box::new(PromptSource::default()),
        (None, false) => Box::new(ReaderSource::new(io::stdin().lock())),
    };

    let banner = opts.format == OutputFormat::Text && opts.input.is_none();
    let mut session = Session::new(opts.format).with_banner(banner);

    let mut out = io::stdout().lock();
    let stats = session
        .run(source.as_mut(), &mut out)
        .context("reading session failed")?;

    info!(%stats, "input finished");
    Ok(())
}
