use clap::{Parser, Subcommand};
use colored::Colorize;
use vimgex::{transpile, Options, VimRegex};

#[derive(Parser)]
#[command(name = "vimgex")]
#[command(about = "Vimgex - compile Vim regular expressions to a native engine")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a Vim pattern to host syntax
    Convert {
        /// The Vim pattern
        pattern: String,
        /// Flag characters (d, g, i, y)
        #[arg(short, long, default_value = "")]
        flags: String,
        /// Start at the 'nomagic' level
        #[arg(long)]
        no_magic: bool,
        /// Show the options bundle in effect
        #[arg(short, long)]
        verbose: bool,
    },
    /// Test a Vim pattern against input
    Test {
        /// The Vim pattern
        pattern: String,
        /// The input string to test
        input: String,
        /// Flag characters (d, g, i, y)
        #[arg(short, long, default_value = "")]
        flags: String,
        /// Show detailed match information
        #[arg(short, long)]
        verbose: bool,
    },
    /// Find all matches in input
    Find {
        /// The Vim pattern
        pattern: String,
        /// The input string
        input: String,
        /// Flag characters (d, g, i, y)
        #[arg(short, long, default_value = "")]
        flags: String,
    },
    /// Check if pattern matches (exit status reports the result)
    Match {
        /// The Vim pattern
        pattern: String,
        /// The input string
        input: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            pattern,
            flags,
            no_magic,
            verbose,
        } => cmd_convert(&pattern, &flags, no_magic, verbose),
        Commands::Test {
            pattern,
            input,
            flags,
            verbose,
        } => cmd_test(&pattern, &input, &flags, verbose),
        Commands::Find {
            pattern,
            input,
            flags,
        } => cmd_find(&pattern, &input, &flags),
        Commands::Match { pattern, input } => cmd_match(&pattern, &input),
    }
}

fn options_from(flags: &str, no_magic: bool) -> Options {
    let mut options = Options::new().flags(flags);
    if no_magic {
        options = options.magic(false);
    }
    options
}

fn cmd_convert(pattern: &str, flags: &str, no_magic: bool, verbose: bool) {
    println!("{}", "Converting pattern...".bold());
    println!("  Input:  {}", pattern.cyan());
    println!();

    let options = options_from(flags, no_magic);
    match transpile(pattern, &options) {
        Ok(compiled) => {
            println!("{}", "Output:".bold());
            println!("  Source: {}", compiled.source.green());
            println!("  Flags:  {}", compiled.flags.green());
            if verbose {
                println!();
                println!("{}", "Options:".bold());
                println!("  {:?}", options);
            }
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn cmd_test(pattern: &str, input: &str, flags: &str, verbose: bool) {
    println!("{}", "Testing pattern...".bold());
    println!("  Pattern: {}", pattern.cyan());
    println!("  Input:   {}", input.yellow());
    println!();

    let regex = match VimRegex::with_options(pattern, options_from(flags, false)) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    if let Some(m) = regex.find(input) {
        println!("{}", "✓ Match found!".green().bold());
        println!("  Position: {}..{}", m.start(), m.end());
        println!("  Match:    {}", m.as_str().green());

        if verbose {
            if let Some(caps) = regex.captures(input) {
                println!();
                println!("{}", "Capture groups:".bold());
                for idx in 1..caps.len() {
                    match caps.get(idx) {
                        Some(group) => println!(
                            "  Group {}: {}..{} = {}",
                            idx,
                            group.start(),
                            group.end(),
                            group.as_str().green()
                        ),
                        None => println!("  Group {}: unmatched", idx),
                    }
                }
            }
        }
    } else {
        println!("{}", "✗ No match".red());
    }
}

fn cmd_find(pattern: &str, input: &str, flags: &str) {
    let regex = match VimRegex::with_options(pattern, options_from(flags, false)) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    let matches = regex.find_all(input);

    if matches.is_empty() {
        println!("{}", "No matches found".red());
    } else {
        println!(
            "{} {}",
            "Found".bold(),
            format!("{} match(es)", matches.len()).green()
        );
        println!();

        for (i, m) in matches.iter().enumerate() {
            println!(
                "  [{}] {}..{} = {}",
                i + 1,
                m.start(),
                m.end(),
                m.as_str().green()
            );
        }
    }
}

fn cmd_match(pattern: &str, input: &str) {
    let regex = match VimRegex::new(pattern) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    if regex.is_match(input) {
        println!("{}", "true".green());
        std::process::exit(0);
    } else {
        println!("{}", "false".red());
        std::process::exit(1);
    }
}
