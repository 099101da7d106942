use std::env;
use std::error::Error;
use std::io::{self, Write};

use linesource::{LineSource, LineSourceBuilder, RewindMode};

struct Options {
    encoding: String,
    skip: i64,
    tokens: bool,
    epochs: u32,
    input: String,
}

fn print_usage_and_exit() -> ! {
    eprintln!("Usage:");
    eprintln!("  linesource_cat [--encoding NAME] [--skip N] [--tokens] [--epochs K] <PATH|->");
    std::process::exit(1);
}

fn parse_args() -> Result<Options, Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let mut encoding = LineSourceBuilder::DEFAULT_ENCODING.to_string();
    let mut skip = 0;
    let mut tokens = false;
    let mut epochs = 1;
    let mut input = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--encoding" => encoding = args.next().ok_or("--encoding requires a name")?,
            "--skip" => skip = args.next().ok_or("--skip requires a count")?.parse()?,
            "--epochs" => epochs = args.next().ok_or("--epochs requires a count")?.parse()?,
            "--tokens" => tokens = true,
            "-h" | "--help" => print_usage_and_exit(),
            other if input.is_none() => input = Some(other.to_string()),
            other => return Err(format!("unexpected argument: {other}").into()),
        }
    }

    let input = input.ok_or("missing input argument")?;
    Ok(Options {
        encoding,
        skip,
        tokens,
        epochs,
        input,
    })
}

fn dump(source: &mut LineSource<'_>, opts: &Options) -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for epoch in 0..opts.epochs {
        if epoch > 0 {
            source.rewind()?;
        }
        source.skip_line(opts.skip)?;
        if opts.tokens {
            while let Some(tokens) = source.read_line_tokens()? {
                writeln!(out, "{}", tokens.join("\t"))?;
            }
        } else {
            while let Some(line) = source.read_line()? {
                writeln!(out, "{line}")?;
            }
        }
        log::info!("epoch {} done after {} lines", epoch + 1, source.line_number());
    }

    out.flush()?;
    Ok(())
}

fn run() -> Result<(), Box<dyn Error>> {
    let opts = parse_args()?;

    if opts.input == "-" {
        let mut stdin = io::stdin();
        let mode = if opts.epochs > 1 {
            RewindMode::Replay
        } else {
            RewindMode::ForwardOnly
        };
        let mut source = LineSource::from_stream_with(&mut stdin, &opts.encoding, mode)?;
        dump(&mut source, &opts)
    } else {
        let mut source = LineSource::from_path(&opts.input, &opts.encoding)?;
        dump(&mut source, &opts)
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("error: {e}");
        print_usage_and_exit();
    }
}
