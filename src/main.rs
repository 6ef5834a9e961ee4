//! AlgebraAide: quadratic equation tutor CLI

use algebra_aide::analyzer::QuadraticAnalyzer;
use algebra_aide::config::{load_config, write_default, Config};
use algebra_aide::explainer::lesson_steps;
use algebra_aide::parser::parse_equation;
use algebra_aide::progress::ProgressReport;
use algebra_aide::quiz::{self, QuizSession, SubmitOutcome};
use algebra_aide::reporter::{ConsoleReporter, JsonReporter, SvgReporter};
use algebra_aide::Difficulty;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// AlgebraAide: quadratic equation tutor for the terminal
#[derive(Parser, Debug)]
#[command(name = "algebra-aide")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Equation to analyze, e.g. "x^2 - 4", "2x^2 - 7x + 3" or "1, 0, -4"
    equation: Option<String>,

    /// Output the analysis as JSON
    #[arg(long, short)]
    json: bool,

    /// Write an SVG graph of the curve to this file
    #[arg(long, value_name = "FILE")]
    svg: Option<PathBuf>,

    /// Quiet mode (single-line output)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output
    #[arg(long, short)]
    verbose: bool,

    /// Half-width of the sampling window around the vertex
    #[arg(long, value_name = "UNITS")]
    half_range: Option<f64>,

    /// Number of curve samples across the window
    #[arg(long, value_name = "N")]
    samples: Option<usize>,

    /// SVG viewport width in pixels
    #[arg(long, value_name = "PX")]
    width: Option<f64>,

    /// SVG viewport height in pixels
    #[arg(long, value_name = "PX")]
    height: Option<f64>,

    /// Path to config file (default: search .algebraiderc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run an interactive quiz round (answers read from stdin)
    Quiz {
        /// Starting difficulty: easy, medium, hard
        #[arg(long)]
        difficulty: Option<String>,

        /// Seed for question selection (deterministic rounds)
        #[arg(long)]
        seed: Option<u64>,

        /// Number of rounds to play, adapting difficulty between them
        #[arg(long, default_value_t = 1)]
        rounds: usize,
    },

    /// Show the step-by-step quadratic equations lesson
    Explain {
        /// Show a single step (1-4) instead of the whole lesson
        #[arg(long)]
        step: Option<usize>,
    },

    /// Show the learning progress overview
    Progress {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create .algebraiderc.json with sensible defaults
    Init {
        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let mut args = Args::parse();

    let work_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = load_config(&work_dir, args.config.as_deref())?;

    if let Some(cmd) = args.command.take() {
        return match cmd {
            Commands::Quiz {
                difficulty,
                seed,
                rounds,
            } => run_quiz(&config, difficulty.as_deref(), seed, rounds),
            Commands::Explain { step } => run_explain(step),
            Commands::Progress { json } => run_progress(json),
            Commands::Init { dir } => run_init(dir.as_deref().unwrap_or(&work_dir)),
        };
    }

    let equation = args
        .equation
        .as_deref()
        .context("equation required when not using a subcommand")?;
    let config = config.merge_with_cli(args.half_range, args.samples, args.width, args.height, None);
    run_analyze(&args, &config, equation)
}

fn run_analyze(args: &Args, config: &Config, equation: &str) -> Result<ExitCode> {
    let coefficients = parse_equation(equation)?;
    let analysis = QuadraticAnalyzer::new()
        .with_half_range(config.half_range)
        .with_sample_count(config.sample_count)
        .analyze(coefficients);

    if args.json {
        println!("{}", JsonReporter::new().pretty().report(&analysis));
    } else if args.quiet {
        ConsoleReporter::new().report_quiet(&analysis);
    } else {
        let mut reporter = ConsoleReporter::new();
        if args.verbose {
            reporter = reporter.verbose();
        }
        reporter.report(&analysis);
    }

    if let Some(ref path) = args.svg {
        let svg = SvgReporter::new(config.width, config.height).render(&analysis);
        std::fs::write(path, svg)
            .with_context(|| format!("Failed to write SVG: {}", path.display()))?;
        if !args.quiet && !args.json {
            println!("   Graph written to {}", path.display());
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn run_quiz(
    config: &Config,
    difficulty: Option<&str>,
    seed: Option<u64>,
    rounds: usize,
) -> Result<ExitCode> {
    let mut difficulty = match difficulty {
        Some(text) => text.parse::<Difficulty>()?,
        None => config.difficulty,
    };
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let reporter = ConsoleReporter::new();
    let bank = quiz::built_in();
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut progress = ProgressReport::sample(chrono::Utc::now());

    for round in 0..rounds.max(1) {
        if round > 0 {
            println!("{}", "─".repeat(40));
        }
        let questions =
            quiz::select_round(&bank, difficulty, config.questions_per_round, &mut rng);
        let mut session = QuizSession::new(questions, difficulty);

        while !session.is_complete() {
            reporter.report_question(&session);
            let Some(answer) = prompt_line(&mut input, "   Your answer: ")? else {
                // stdin closed; score what we have
                break;
            };
            match session.submit(&answer) {
                SubmitOutcome::Correct => reporter.report_answer(true, &session),
                SubmitOutcome::Incorrect => {
                    reporter.report_answer(false, &session);
                    // One retry after the hint, then move on
                    if let Some(retry) = prompt_line(&mut input, "   Try again: ")? {
                        match session.submit(&retry) {
                            SubmitOutcome::Correct => reporter.report_answer(true, &session),
                            SubmitOutcome::Incorrect => {
                                println!("   Moving on.");
                            }
                        }
                    }
                }
            }
            session.advance();
        }

        reporter.report_quiz_summary(&session);
        progress.record_round(
            "Quadratic Equations",
            session.score(),
            session.attempts(),
            chrono::Utc::now(),
        );
        difficulty = session.recommended_difficulty();
    }

    reporter.report_progress(&progress, chrono::Utc::now());
    Ok(ExitCode::SUCCESS)
}

/// Prompt and read one trimmed line; None on EOF
fn prompt_line(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    std::io::stdout().flush().context("Failed to flush stdout")?;
    let mut line = String::new();
    let bytes = input.read_line(&mut line).context("Failed to read stdin")?;
    if bytes == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn run_explain(step: Option<usize>) -> Result<ExitCode> {
    let steps = lesson_steps();

    let selected: Vec<_> = match step {
        Some(n) => {
            let found = steps.into_iter().find(|s| s.number == n);
            match found {
                Some(s) => vec![s],
                None => anyhow::bail!("no such lesson step: {} (expected 1-4)", n),
            }
        }
        None => steps,
    };

    for lesson in &selected {
        println!();
        println!(
            "{}",
            format!("Step {}: {}", lesson.number, lesson.title).bold()
        );
        for line in &lesson.body {
            println!("   {}", line);
        }
        if let Some(coeffs) = lesson.try_coefficients {
            println!(
                "   {} algebra-aide \"{}, {}, {}\"",
                "Try it:".cyan(),
                coeffs.a, coeffs.b, coeffs.c
            );
        }
    }
    println!();
    Ok(ExitCode::SUCCESS)
}

fn run_progress(json: bool) -> Result<ExitCode> {
    let now = chrono::Utc::now();
    let report = ProgressReport::sample(now);
    if json {
        println!("{}", JsonReporter::new().pretty().report_progress(&report));
    } else {
        ConsoleReporter::new().report_progress(&report, now);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_init(dir: &std::path::Path) -> Result<ExitCode> {
    let path = write_default(dir)?;
    println!("{} Created {}", "✓".green(), path.display());
    Ok(ExitCode::SUCCESS)
}
