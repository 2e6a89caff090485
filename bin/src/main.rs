use clap::{Parser, Subcommand};
use entropy_wordle_solver::*;
use log::error;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io;
use std::io::Write;
use std::time::Instant;

const BANNER: &str = r"
 __        __            _ _        ____        _
 \ \      / /__  _ __ __| | | ___  / ___|  ___ | |_   _____ _ __
  \ \ /\ / / _ \| '__/ _` | |/ _ \ \___ \ / _ \| \ \ / / _ \ '__|
   \ V  V / (_) | | | (_| | |  __/  ___) | (_) | |\ V /  __/ |
    \_/\_/ \___/|_|  \__,_|_|\___| |____/ \___/|_| \_/ \___|_|
";

/// Solves Wordle-style puzzles by guessing high-entropy words and narrowing the candidates with
/// each round of feedback.
///
/// Without a subcommand, an interactive menu lets you solve puzzles one after another.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[arg(short = 'f', long, default_value = "/usr/share/dict/words")]
    words_file: String,

    /// The number of guesses allowed before giving up.
    #[arg(long, default_value_t = SolverConfig::default().max_attempts)]
    max_attempts: u32,

    /// Each guess is picked at random from this many of the best candidates.
    #[arg(long, default_value_t = SolverConfig::default().top_n)]
    top_n: usize,

    /// How many candidate words to generate when no known word fits the feedback.
    #[arg(long, default_value_t = DEFAULT_FALLBACK_WORDS)]
    fallback_words: usize,

    /// Seeds the solver's random choices, so that runs can be reproduced.
    #[arg(long)]
    rng_seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve today's puzzle.
    Daily {
        /// The number of letters in the word.
        #[arg(short, long, default_value_t = DEFAULT_WORD_LENGTH)]
        size: usize,
    },
    /// Solve the puzzle picked by a seed.
    Random {
        /// The number of letters in the word.
        #[arg(short, long, default_value_t = DEFAULT_WORD_LENGTH)]
        size: usize,
        /// The seed of the puzzle.
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },
    /// Solve a puzzle for a word of your choosing.
    Custom {
        #[arg(default_value = DEFAULT_CUSTOM_WORD)]
        word: String,
    },
}

fn main() -> Result<(), SolverError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let start_time = Instant::now();
    let words_reader = io::BufReader::new(File::open(&args.words_file)?);
    let word_bank = WordBank::from_reader(words_reader)?;
    println!(
        "Loaded {} words from {} in {:.3}s.",
        word_bank.len(),
        args.words_file,
        start_time.elapsed().as_secs_f64()
    );

    let solver = Solver::with_config(
        &word_bank,
        SolverConfig {
            max_attempts: args.max_attempts,
            top_n: args.top_n,
            fallback_words: args.fallback_words,
        },
    );
    let mut rng = match args.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match args.command {
        Some(Command::Daily { size }) => {
            run_puzzle(&solver, Puzzle::daily(size), &mut rng);
        }
        Some(Command::Random { size, seed }) => {
            run_puzzle(&solver, Puzzle::random(size, seed), &mut rng);
        }
        Some(Command::Custom { word }) => {
            run_puzzle(&solver, Puzzle::custom(&word), &mut rng);
        }
        None => run_menu(&solver, &mut rng)?,
    }

    Ok(())
}

fn run_menu(solver: &Solver<WordBank>, rng: &mut StdRng) -> io::Result<()> {
    println!("Welcome to Wordle Solver!");
    println!("{}", BANNER);

    loop {
        println!(
            "\nSelect a mode:\n\
             \t1. Daily\n\
             \t2. Random\n\
             \t3. Custom Word\n\
             \t4. Exit\n"
        );
        let choice = match prompt("Enter your choice (1-4): ")? {
            Some(choice) => choice,
            None => break,
        };

        let puzzle = match choice.as_str() {
            "1" => {
                println!("You selected Daily mode.");
                let size = match prompt_number(
                    "Enter the word size for the daily puzzle (default is 5): ",
                    DEFAULT_WORD_LENGTH,
                )? {
                    Some(size) => size,
                    None => continue,
                };
                Puzzle::daily(size)
            }
            "2" => {
                println!("You selected Random mode.");
                let size = match prompt_number(
                    "Enter the word size for the random puzzle (default is 5): ",
                    DEFAULT_WORD_LENGTH,
                )? {
                    Some(size) => size,
                    None => continue,
                };
                let seed = match prompt_number(
                    "Enter the seed for the random puzzle (default is 1234): ",
                    DEFAULT_SEED,
                )? {
                    Some(seed) => seed,
                    None => continue,
                };
                Puzzle::random(size, seed)
            }
            "3" => {
                println!("You selected Custom Word mode.");
                let word = prompt("Enter the custom word to guess (default is 'alan'): ")?
                    .filter(|word| !word.is_empty())
                    .unwrap_or_else(|| DEFAULT_CUSTOM_WORD.to_string());
                Puzzle::custom(&word)
            }
            "4" => break,
            _ => {
                println!("Invalid choice. Please enter a number between 1 and 4.");
                continue;
            }
        };

        run_puzzle(solver, puzzle, rng);

        let again = prompt("Do you want to solve another puzzle? (yes/no): ")?;
        if again.map(|answer| answer.to_lowercase()) != Some("yes".to_string()) {
            break;
        }
    }

    println!("Goodbye~");
    Ok(())
}

/// Runs one solve session and reports how it went. Failures end the session, not the program.
fn run_puzzle(solver: &Solver<WordBank>, puzzle: Result<Puzzle, SolverError>, rng: &mut StdRng) {
    let puzzle = match puzzle {
        Ok(puzzle) => puzzle,
        Err(err) => {
            error!("{}", err);
            println!("Puzzle could not be solved..");
            return;
        }
    };
    let mut oracle: Box<dyn FeedbackOracle> = match TargetWordOracle::for_puzzle(&puzzle) {
        Some(oracle) => Box::new(oracle),
        None => {
            print_feedback_instructions(&puzzle);
            Box::new(InteractiveOracle)
        }
    };

    match solver.solve(&puzzle, oracle.as_mut(), rng) {
        Ok(SolveOutcome::Solved(guesses)) => {
            println!("Solved it! It took me {} guesses.", guesses.len());
            for guess in guesses.iter() {
                println!("\t{}", guess);
            }
            println!(
                "Puzzle solved! The word is: {}",
                guesses.last().map(|word| word.as_ref()).unwrap_or_default()
            );
        }
        Ok(outcome) => {
            println!("{}", outcome);
            println!("Puzzle could not be solved..");
        }
        Err(err) => {
            error!("{}", err);
            println!("Puzzle could not be solved..");
        }
    }
}

fn print_feedback_instructions(puzzle: &Puzzle) {
    println!(
        "Submit each guess to the {} puzzle, then enter the feedback for every letter as:\n\n\
           * '.' = this letter is not in the word\n\
           * 'y' = this letter is in the word, but not in this location\n\
           * 'g' = this letter is in the word and in the right location.\n\n\
         For example, if the word was \"spade\" and the guess was \"soapy\", you would enter \"g.gy.\"\n\
         Enter a blank line to stop.",
        puzzle.mode()
    );
}

/// Relays each guess to the person at the terminal, who reports the puzzle's feedback.
struct InteractiveOracle;

impl FeedbackOracle for InteractiveOracle {
    fn feedback(&mut self, request: &GuessRequest) -> Result<Vec<SlotFeedback>, SolverError> {
        loop {
            let input = prompt(&format!("I'm guessing: {}. How did I do? ", request.guess))
                .map_err(|err| SolverError::OracleUnavailable(err.to_string()))?;
            let pattern = match input {
                Some(pattern) if !pattern.is_empty() => pattern,
                _ => {
                    return Err(SolverError::OracleUnavailable(
                        "no feedback was entered".to_string(),
                    ))
                }
            };
            match feedback_from_pattern(request.guess, &pattern) {
                Ok(feedback) => return Ok(feedback),
                Err(err) => println!("{} Try again.", err),
            }
        }
    }
}

/// Prints the message and reads one trimmed line. Returns `None` at the end of input.
fn prompt(message: &str) -> io::Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut buffer = String::new();
    if io::stdin().read_line(&mut buffer)? == 0 {
        return Ok(None);
    }
    Ok(Some(buffer.trim().to_string()))
}

/// Reads a number, using the default for a blank line. Returns `None` if the input isn't a
/// number, or at the end of input.
fn prompt_number<T>(message: &str, default: T) -> io::Result<Option<T>>
where
    T: std::str::FromStr,
{
    let input = match prompt(message)? {
        Some(input) => input,
        None => return Ok(None),
    };
    if input.is_empty() {
        return Ok(Some(default));
    }
    match input.parse() {
        Ok(number) => Ok(Some(number)),
        Err(_) => {
            println!("{:?} is not a valid number.", input);
            Ok(None)
        }
    }
}
