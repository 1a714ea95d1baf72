use clap::Parser;
use extenso::utils::logger;
use extenso::{write_spellings, LogFormat, SpellerArgs};

fn main() -> anyhow::Result<()> {
    let args = SpellerArgs::parse();
    logger::init_logger(args.verbose, LogFormat::Compact);

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let failed = write_spellings(
        &args.numbers,
        args.json,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;

    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
