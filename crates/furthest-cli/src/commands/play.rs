use std::io;

use clap::Args;
use furthest_core::{
    answer_timeout, validate_highest_number, Config, LineReader, QuestionGenerator, Session,
    SessionSummary,
};
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::debug;

const MAX_PROMPT: &str = "Enter the max value for the numbers in the game.\n";

#[derive(Args)]
pub struct PlayArgs {
    /// Largest number a question may contain (4-100). Prompted for when unset
    #[arg(long, allow_negative_numbers = true)]
    max: Option<i64>,
    /// Seconds allowed for each answer
    #[arg(long)]
    timeout_secs: Option<u64>,
    /// Seed for a reproducible question sequence
    #[arg(long)]
    seed: Option<u64>,
    /// Print the end-of-run summary as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: PlayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let summary = runtime.block_on(play(&args, &config))?;

    println!();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary.render_text());
    }
    Ok(())
}

async fn play(
    args: &PlayArgs,
    config: &Config,
) -> Result<SessionSummary, Box<dyn std::error::Error>> {
    let timeout = answer_timeout(args.timeout_secs.unwrap_or(config.game.answer_timeout_secs))?;

    let mut lines = LineReader::new(BufReader::new(tokio::io::stdin()));
    let mut stdout = tokio::io::stdout();

    let requested = match args.max.or(config.game.highest_number.map(i64::from)) {
        Some(max) => max,
        None => prompt_highest_number(&mut lines, &mut stdout).await?,
    };
    let highest = validate_highest_number(requested)?;
    let seed = args.seed.or(config.seed);
    debug!(highest, timeout_secs = timeout.as_secs(), ?seed, "starting session");

    let generator = match seed {
        Some(seed) => QuestionGenerator::with_seed(highest, seed),
        None => QuestionGenerator::new(highest),
    };

    // Anything typed after the max value stays buffered for the first round.
    let mut session = Session::new(generator, lines, stdout, timeout);
    session.run().await?;
    Ok(session.into_tracker().summary())
}

/// Ask for the max value until an integer is entered.
async fn prompt_highest_number<R, W>(lines: &mut LineReader<R>, out: &mut W) -> io::Result<i64>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    out.write_all(MAX_PROMPT.as_bytes()).await?;
    out.flush().await?;

    loop {
        let Some(line) = lines.next_line().await? else {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a max value was entered",
            ));
        };
        match line.trim().parse::<i64>() {
            Ok(value) => return Ok(value),
            Err(_) => {
                debug!(%line, "rejected max value");
                out.write_all(format!("I am sorry, but '{line}' is not a number\n").as_bytes())
                    .await?;
                out.flush().await?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn prompt(input: &[u8]) -> (io::Result<i64>, String) {
        let mut lines = LineReader::new(input);
        let mut out = Vec::new();
        let result = prompt_highest_number(&mut lines, &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn accepts_first_integer() {
        let (result, out) = prompt(b" 20 \n").await;
        assert_eq!(result.unwrap(), 20);
        assert_eq!(out, MAX_PROMPT);
    }

    #[tokio::test]
    async fn reprompts_until_a_number_is_entered() {
        let (result, out) = prompt(b"ten\n\n12\n").await;
        assert_eq!(result.unwrap(), 12);
        assert!(out.contains("I am sorry, but 'ten' is not a number\n"));
        assert!(out.contains("I am sorry, but '' is not a number\n"));
    }

    #[tokio::test]
    async fn invalid_utf8_is_reprompted() {
        let (result, out) = prompt(b"\xff\xfe\n30\n").await;
        assert_eq!(result.unwrap(), 30);
        assert!(out.contains("I am sorry, but '\u{FFFD}\u{FFFD}' is not a number\n"));
    }

    #[tokio::test]
    async fn out_of_range_numbers_are_returned_for_validation() {
        let (result, _) = prompt(b"3\n").await;
        assert_eq!(result.unwrap(), 3);
    }

    #[tokio::test]
    async fn closed_input_is_an_error() {
        let (result, _) = prompt(b"abc\n").await;
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
    }
}
