use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use rayon::prelude::*;

mod error;
mod graph;
mod index;
mod io;
mod search;
mod util;

use graph::overlap::{build_overlap_graph, OverlapParams};
use index::store::{IndexMeta, SuffixIndex};
use search::{find_approx, search_bad_char, search_good_suffix, DistanceMode, MatchSet};

// jemalloc：补回 musl malloc 性能差距，多线程场景显著提升
#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "seqlab", author, version, about = "DNA sequence analysis: Boyer-Moore search, suffix arrays, approximate matching, overlap graphs", arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ExactAlgo {
    /// Bad-character shift rule
    BadChar,
    /// Good-suffix shift rule
    GoodSuffix,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ApproxMode {
    /// Mismatches only (equal-length windows)
    Hamming,
    /// Insertions, deletions and substitutions
    Edit,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Per-record length and GC statistics
    Stats {
        /// Input FASTA file
        fasta: String,
    },
    /// Exact pattern search over every record
    Search {
        /// Input FASTA file
        fasta: String,
        /// Pattern to search for
        pattern: String,
        /// Shift strategy
        #[arg(long = "algo", value_enum, default_value_t = ExactAlgo::BadChar)]
        algo: ExactAlgo,
        #[arg(short = 't', long = "threads", default_value_t = 1)]
        threads: usize,
    },
    /// Approximate pattern search (bounded Hamming or edit distance)
    Approx {
        /// Input FASTA file
        fasta: String,
        /// Pattern to search for
        pattern: String,
        /// Maximum allowed distance
        #[arg(short = 'k', long = "max-dist")]
        max_dist: i32,
        #[arg(long = "mode", value_enum, default_value_t = ApproxMode::Hamming)]
        mode: ApproxMode,
        #[arg(short = 't', long = "threads", default_value_t = 1)]
        threads: usize,
    },
    /// Translate records to amino acids in a reading frame
    Translate {
        /// Input FASTA file
        fasta: String,
        /// Reading frame (0, 1 or 2)
        #[arg(short = 'f', long = "frame", default_value_t = 0)]
        frame: usize,
    },
    /// Reverse-complement every record
    Revcomp {
        /// Input FASTA file
        fasta: String,
    },
    /// Suffix/prefix overlap graph across all records
    Overlap {
        /// Input FASTA file
        fasta: String,
        /// Minimum overlap length for an edge
        #[arg(short = 'm', long = "min-overlap", default_value_t = 10)]
        min_overlap: usize,
        /// Also report overlaps of a sequence with itself
        #[arg(long = "self-overlap", default_value_t = false)]
        self_overlap: bool,
    },
    /// Build a suffix-array index of the input (one array per record)
    Index {
        /// Input FASTA file
        fasta: String,
        /// Output prefix for the index file
        #[arg(short, long, default_value = "seqs")]
        output: String,
    },
    /// Query a saved suffix-array index
    Locate {
        /// Path to index (.sax)
        #[arg(short = 'i', long = "index")]
        index: String,
        /// Pattern to locate
        pattern: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Stats { fasta } => run_stats(&fasta),
        Commands::Search {
            fasta,
            pattern,
            algo,
            threads,
        } => run_search(&fasta, &pattern, algo, threads),
        Commands::Approx {
            fasta,
            pattern,
            max_dist,
            mode,
            threads,
        } => run_approx(&fasta, &pattern, max_dist, mode, threads),
        Commands::Translate { fasta, frame } => run_translate(&fasta, frame),
        Commands::Revcomp { fasta } => run_revcomp(&fasta),
        Commands::Overlap {
            fasta,
            min_overlap,
            self_overlap,
        } => run_overlap(&fasta, min_overlap, self_overlap),
        Commands::Index { fasta, output } => run_index(&fasta, &output),
        Commands::Locate { index, pattern } => run_locate(&index, &pattern),
    }
}

fn load_records(fasta: &str) -> Result<Vec<io::fasta::FastaRecord>> {
    io::fasta::read_fasta(fasta)
        .map_err(|e| anyhow::anyhow!("cannot read FASTA '{}': {}", fasta, e))
}

fn run_stats(fasta: &str) -> Result<()> {
    let records = load_records(fasta)?;
    println!("file: {}", fasta);
    println!("sequences: {}", records.len());
    for rec in &records {
        println!(
            "{}\tlen={}\tgc={:.4}",
            rec.id,
            rec.seq.len(),
            util::dna::gc_content(&rec.seq)
        );
    }
    Ok(())
}

/// 按每条记录并行跑一次搜索；结果按记录下标回收，输出顺序稳定。
fn search_records<F>(
    records: &[io::fasta::FastaRecord],
    threads: usize,
    search: F,
) -> Result<Vec<MatchSet>>
where
    F: Fn(&[u8]) -> error::Result<MatchSet> + Sync,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads.max(1))
        .build()?;
    let results: Vec<error::Result<MatchSet>> = pool.install(|| {
        records
            .par_iter()
            .map(|rec| search(&util::dna::normalize_seq(&rec.seq)))
            .collect()
    });
    results
        .into_iter()
        .map(|r| r.map_err(Into::into))
        .collect()
}

fn print_hits(records: &[io::fasta::FastaRecord], hits: &[MatchSet]) {
    let total: usize = hits.iter().map(MatchSet::len).sum();
    for (rec, ms) in records.iter().zip(hits) {
        let positions: Vec<String> = ms.positions.iter().map(ToString::to_string).collect();
        println!("{}\t{}\t[{}]", rec.id, ms.len(), positions.join(", "));
    }
    println!("total: {}", total);
}

fn run_search(fasta: &str, pattern: &str, algo: ExactAlgo, threads: usize) -> Result<()> {
    let records = load_records(fasta)?;
    let pattern = util::dna::normalize_seq(pattern.as_bytes());
    let hits = match algo {
        ExactAlgo::BadChar => search_records(&records, threads, |seq| {
            search_bad_char(seq, &pattern)
        })?,
        ExactAlgo::GoodSuffix => search_records(&records, threads, |seq| {
            search_good_suffix(seq, &pattern)
        })?,
    };
    print_hits(&records, &hits);
    Ok(())
}

fn run_approx(
    fasta: &str,
    pattern: &str,
    max_dist: i32,
    mode: ApproxMode,
    threads: usize,
) -> Result<()> {
    let records = load_records(fasta)?;
    let pattern = util::dna::normalize_seq(pattern.as_bytes());
    let mode = match mode {
        ApproxMode::Hamming => DistanceMode::Hamming,
        ApproxMode::Edit => DistanceMode::Edit,
    };
    let hits = search_records(&records, threads, |seq| {
        find_approx(seq, &pattern, max_dist, mode)
    })?;
    print_hits(&records, &hits);
    Ok(())
}

fn run_translate(fasta: &str, frame: usize) -> Result<()> {
    let records = load_records(fasta)?;
    for rec in &records {
        let protein = util::codon::translate(&rec.seq, frame)?;
        println!(">{} frame={}", rec.id, frame);
        println!("{}", protein);
    }
    Ok(())
}

fn run_revcomp(fasta: &str) -> Result<()> {
    let records = load_records(fasta)?;
    for rec in &records {
        let rc = util::dna::revcomp(&rec.seq);
        println!(">{} revcomp", rec.id);
        println!("{}", String::from_utf8_lossy(&rc));
    }
    Ok(())
}

fn run_overlap(fasta: &str, min_overlap: usize, self_overlap: bool) -> Result<()> {
    let records = load_records(fasta)?;
    let seqs: Vec<Vec<u8>> = records
        .iter()
        .map(|rec| util::dna::normalize_seq(&rec.seq))
        .collect();
    let graph = build_overlap_graph(
        &seqs,
        OverlapParams {
            min_overlap,
            self_overlap,
        },
    )?;

    println!("nodes: {}", graph.node_count());
    println!("edges: {}", graph.edge_count());
    for (node, neighbors) in &graph.adjacency {
        let names: Vec<&str> = neighbors.iter().map(|&j| records[j].id.as_str()).collect();
        println!("{}\t{}\t-> [{}]", node, records[*node].id, names.join(", "));
    }
    Ok(())
}

fn run_index(fasta: &str, output: &str) -> Result<()> {
    let records = load_records(fasta)?;
    let total_len: usize = records.iter().map(|r| r.seq.len()).sum();

    println!("input: {}", fasta);
    println!("sequences: {}", records.len());
    println!("total_len: {}", total_len);

    let mut idx = SuffixIndex::build(&records);
    idx.set_meta(IndexMeta {
        source_file: Some(fasta.to_string()),
        build_args: Some(std::env::args().collect::<Vec<_>>().join(" ")),
        build_timestamp: Some(chrono::Utc::now().to_rfc3339()),
    });

    let out_path = format!("{}.sax", output);
    idx.save_to_file(&out_path)
        .map_err(|e| anyhow::anyhow!("cannot write index to '{}': {}", out_path, e))?;
    println!("suffix index saved: {}", out_path);
    Ok(())
}

fn run_locate(index_path: &str, pattern: &str) -> Result<()> {
    let idx = SuffixIndex::load_from_file(index_path)
        .map_err(|e| anyhow::anyhow!("cannot load index '{}': {}", index_path, e))?;
    let hits = idx.locate(pattern.as_bytes())?;

    let total: usize = hits.iter().map(|(_, p)| p.len()).sum();
    for (i, positions) in &hits {
        let rendered: Vec<String> = positions.iter().map(ToString::to_string).collect();
        println!(
            "{}\t{}\t[{}]",
            idx.records[*i].name,
            positions.len(),
            rendered.join(", ")
        );
    }
    println!("total: {}", total);
    Ok(())
}
