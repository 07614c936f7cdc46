use std::process;

use clap::{Args, Parser, Subcommand};

use kanaconv::{
    to_hiragana_with, to_kana_with, to_katakana_with, to_romaji_with, tokenize, tokenize_compact,
    ConvertOptions, CustomMapping, Romanization, Script,
};

#[derive(Parser)]
#[command(name = "kanatool", about = "Kana conversion diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert romaji to kana (casing selects hiragana or katakana)
    ToKana {
        /// Input text
        input: String,
        #[command(flatten)]
        opts: ConvertArgs,
    },

    /// Convert kana to romaji
    ToRomaji {
        /// Input text
        input: String,
        #[command(flatten)]
        opts: ConvertArgs,
    },

    /// Convert romaji and katakana to hiragana
    ToHiragana {
        /// Input text
        input: String,
        #[command(flatten)]
        opts: ConvertArgs,
    },

    /// Convert romaji and hiragana to katakana
    ToKatakana {
        /// Input text
        input: String,
        #[command(flatten)]
        opts: ConvertArgs,
    },

    /// Split text into script runs
    Tokenize {
        /// Input text
        input: String,
        /// Merge related scripts into broader categories
        #[arg(long)]
        compact: bool,
        /// Show an aligned kind/text table instead of bare tokens
        #[arg(long)]
        detailed: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct ConvertArgs {
    /// Map wi/we to the archaic ゐ/ゑ
    #[arg(long)]
    obsolete_kana: bool,
    /// Leave a trailing ambiguous romaji fragment unconverted
    #[arg(long)]
    no_convert_ending: bool,
    /// Force the output script (hiragana or katakana)
    #[arg(long)]
    enforce: Option<Script>,
    /// Romanisation scheme (hepburn or kunrei)
    #[arg(long, default_value_t = Romanization::Hepburn)]
    romanization: Romanization,
    /// Uppercase romaji produced from katakana spans
    #[arg(long)]
    uppercase_katakana: bool,
    /// Only shift between kana blocks, leaving romaji untouched
    #[arg(long)]
    pass_romaji: bool,
    /// Extra mapping entries as a JSON object, e.g. '{"wi":"うぃ"}'
    #[arg(long)]
    mapping: Option<String>,
}

impl ConvertArgs {
    fn into_options(self) -> ConvertOptions {
        let custom_mapping = self.mapping.map(|raw| {
            match serde_json::from_str::<CustomMapping>(&raw) {
                Ok(mapping) => mapping,
                Err(e) => {
                    eprintln!("Failed to parse --mapping as a JSON object: {}", e);
                    process::exit(1);
                }
            }
        });

        ConvertOptions {
            use_obsolete_kana: self.obsolete_kana,
            custom_mapping,
            convert_ending: !self.no_convert_ending,
            enforce: self.enforce,
            uppercase_katakana: self.uppercase_katakana,
            romanization: self.romanization,
            pass_romaji: self.pass_romaji,
        }
    }
}

fn print_tokens(input: &str, compact: bool, detailed: bool, json: bool) {
    let tokens: Vec<_> = if compact {
        tokenize_compact(input).collect()
    } else {
        tokenize(input).collect()
    };

    if json {
        match serde_json::to_string_pretty(&tokens) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Failed to serialize tokens: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    if detailed {
        use unicode_width::UnicodeWidthStr;
        let kind_width = tokens
            .iter()
            .map(|t| t.kind.as_str().len())
            .max()
            .unwrap_or(0);
        let text_width = tokens.iter().map(|t| t.text.width()).max().unwrap_or(0);
        for token in &tokens {
            let pad = text_width - token.text.width();
            println!(
                "{:kw$}  {}{:pad$}  ({} chars)",
                token.kind.as_str(),
                token.text,
                "",
                token.text.chars().count(),
                kw = kind_width,
                pad = pad,
            );
        }
    } else {
        for token in &tokens {
            println!("{}\t{}", token.kind.as_str(), token.text);
        }
    }
}

fn main() {
    #[cfg(feature = "trace")]
    kanaconv::trace_init::init_tracing(std::path::Path::new("."));

    let cli = Cli::parse();

    match cli.command {
        Command::ToKana { input, opts } => {
            println!("{}", to_kana_with(&input, &opts.into_options()));
        }
        Command::ToRomaji { input, opts } => {
            println!("{}", to_romaji_with(&input, &opts.into_options()));
        }
        Command::ToHiragana { input, opts } => {
            println!("{}", to_hiragana_with(&input, &opts.into_options()));
        }
        Command::ToKatakana { input, opts } => {
            println!("{}", to_katakana_with(&input, &opts.into_options()));
        }
        Command::Tokenize {
            input,
            compact,
            detailed,
            json,
        } => print_tokens(&input, compact, detailed, json),
    }
}
