use seqsynth::arg_parser::ArgsParser;
use seqsynth::logging;
use seqsynth::{
    check_guidelines_batch, decode_sequence_to_text, required_text_length, BaseSequence, Error,
    Result, SynthesisReport, SynthesisRules,
};
use std::env;
use std::process;
use tracing::{error, info};

const USAGE: &str = "usage: seqsynth mode=<encode|decode|check|required> [args]
  mode=encode text=<text> [pretty=yes]     encode text and print a JSON synthesis report
  mode=decode seq=<ACGT...>                decode a sequence back to text
  mode=check seq=<ACGT...> | fasta=<path>  check sequences against the synthesis guidelines
  mode=required [min_bp=<n>]               characters of text needed for n bases
options:
  rules=<path.toml>  threshold overrides (default: vendor guidelines)
  threads=<n>        worker threads for fasta checks (default: number of CPUs)";

fn main() {
    logging::init_tracing();

    if let Err(e) = run(env::args().skip(1)) {
        error!("{}", e);
        eprintln!("{}", USAGE);
        process::exit(1);
    }
}

fn run(args: impl IntoIterator<Item = String>) -> Result<()> {
    let args = ArgsParser::from_args(args)?;
    let rules = match args.get("rules") {
        Some(path) => {
            info!(path, "loading synthesis rules");
            SynthesisRules::from_toml_file(path)?
        }
        None => SynthesisRules::default(),
    };

    match args.require("mode")? {
        "encode" => {
            let report = SynthesisReport::from_text(args.require("text")?, &rules)?;
            let json = if args.get_as_bool("pretty", false) {
                serde_json::to_string_pretty(&report)
            } else {
                serde_json::to_string(&report)
            };
            println!("{}", json?);
        }
        "decode" => {
            let text = decode_sequence_to_text(&normalize(args.require("seq")?))?;
            if text.is_empty() {
                println!("[No readable text found]");
            } else {
                println!("{}", text);
            }
        }
        "check" => {
            let seqs = match args.get("fasta") {
                Some(path) => BaseSequence::read_fasta(path)?,
                None => vec![BaseSequence::parse(&normalize(args.require("seq")?))?],
            };
            let threads = args.get_as("threads", num_cpus::get())?;
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| Error::InvalidArgument {
                    argument: format!("threads={}", threads),
                    reason: e.to_string(),
                })?;
            info!(sequences = seqs.len(), threads, "checking sequences");

            let results = pool.install(|| check_guidelines_batch(&seqs, &rules));
            for (i, (seq, issues)) in seqs.iter().zip(results.iter()).enumerate() {
                println!(
                    "sequence {} ({} bp, GC {:.1}%, GC variation {:.1}%)",
                    i + 1,
                    seq.len(),
                    seq.gc_content(),
                    seq.gc_variation(rules.gc_window)
                );
                if issues.is_empty() {
                    println!("passes all checks");
                }
                for issue in issues {
                    println!("- {}", issue);
                }
            }
        }
        "required" => {
            let min_bp = args.get_as("min_bp", rules.min_length)?;
            println!("{}", required_text_length(min_bp));
        }
        other => {
            return Err(Error::InvalidArgument {
                argument: format!("mode={}", other),
                reason: "unknown mode".to_string(),
            })
        }
    }
    Ok(())
}

/// User-entered sequences may carry lowercase symbols and surrounding whitespace.
fn normalize(seq: &str) -> String {
    seq.trim().to_ascii_uppercase()
}
