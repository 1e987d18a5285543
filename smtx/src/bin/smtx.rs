use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use smtx::{Catalog, CatalogConfig, MatrixFile, MatrixSummary, Operation, SparseMatrix};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "smtx - add, subtract and multiply sparse matrices stored as text files")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two matrices of the same shape
    Add(BinaryArgs),
    /// Subtract the second matrix from the first
    Sub(BinaryArgs),
    /// Multiply two matrices (columns of the first = rows of the second)
    Mul(BinaryArgs),
    /// List matrix files of a directory with their dimensions
    List {
        /// Directory to scan
        #[arg(default_value = "sample_inputs")]
        dir: PathBuf,

        /// Mark files that can take part in this operation
        #[arg(long)]
        op: Option<OpArg>,
    },
    /// Combine two files of the input directory, selected by their number in `list`
    Run {
        /// Operation to perform
        op: OpArg,

        /// Number of the first matrix (1-based)
        #[arg(value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        first: usize,

        /// Number of the second matrix (1-based)
        #[arg(value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        second: usize,

        /// Directory holding the matrix files
        #[arg(long, default_value = "sample_inputs")]
        input_dir: PathBuf,

        /// Directory the result file is written to
        #[arg(long, default_value = "results")]
        output_dir: PathBuf,
    },
    /// Show matrix dimensions and fill
    Info {
        /// Matrix file
        file: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a single element
    Get {
        /// Matrix file
        file: PathBuf,
        row: usize,
        col: usize,
    },
    /// Set a single element; zero removes it
    Set {
        /// Matrix file, rewritten in place unless --output is given
        file: PathBuf,
        row: usize,
        col: usize,
        #[arg(allow_negative_numbers = true)]
        value: i64,

        /// Write the updated matrix here instead
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct BinaryArgs {
    /// Left operand
    left: PathBuf,

    /// Right operand
    right: PathBuf,

    /// Write the result to this file
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Write the result as result_<operation>.txt into this directory
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OpArg {
    Add,
    Sub,
    Mul,
}

impl From<OpArg> for Operation {
    fn from(op: OpArg) -> Self {
        match op {
            OpArg::Add => Operation::Addition,
            OpArg::Sub => Operation::Subtraction,
            OpArg::Mul => Operation::Multiplication,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.operation() {
                Some(operation) => eprintln!("{} error: {e}", title(operation)),
                None => eprintln!("Error: {e}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> smtx::Result<()> {
    match command {
        Commands::Add(args) => handle_binary(Operation::Addition, args),
        Commands::Sub(args) => handle_binary(Operation::Subtraction, args),
        Commands::Mul(args) => handle_binary(Operation::Multiplication, args),
        Commands::List { dir, op } => handle_list(&dir, op.map(Operation::from)),
        Commands::Run {
            op,
            first,
            second,
            input_dir,
            output_dir,
        } => {
            let config = CatalogConfig::with_input_dir(input_dir).with_output_dir(output_dir);
            handle_run(op.into(), first, second, &config)
        }
        Commands::Info { file, json } => handle_info(&file, json),
        Commands::Get { file, row, col } => {
            let matrix: SparseMatrix = MatrixFile::read(&file)?;
            println!("{}", matrix.get_element(row, col));
            Ok(())
        }
        Commands::Set {
            file,
            row,
            col,
            value,
            output,
        } => {
            let mut matrix: SparseMatrix = MatrixFile::read(&file)?;
            matrix.set_element(row, col, value)?;
            MatrixFile::write(output.as_ref().unwrap_or(&file), &matrix)
        }
    }
}

/// Capitalized operation name for messages
fn title(operation: Operation) -> &'static str {
    match operation {
        Operation::Addition => "Addition",
        Operation::Subtraction => "Subtraction",
        Operation::Multiplication => "Multiplication",
    }
}

fn compute(
    operation: Operation,
    left: &SparseMatrix,
    right: &SparseMatrix,
) -> smtx::Result<SparseMatrix> {
    let result = match operation {
        Operation::Addition => left + right,
        Operation::Subtraction => left - right,
        Operation::Multiplication => left * right,
    }?;
    Ok(result)
}

fn handle_binary(operation: Operation, args: BinaryArgs) -> smtx::Result<()> {
    let left: SparseMatrix = MatrixFile::read(&args.left)?;
    let right: SparseMatrix = MatrixFile::read(&args.right)?;

    let start_time = std::time::Instant::now();
    let result = compute(operation, &left, &right)?;
    log::info!("{operation} completed in {:.2?}", start_time.elapsed());

    println!("{} Result:", title(operation));
    println!("{result}");

    if let Some(output) = &args.output {
        MatrixFile::write(output, &result)?;
    }
    if let Some(output_dir) = args.output_dir {
        let config = CatalogConfig::default().with_output_dir(output_dir);
        MatrixFile::write(config.result_path(operation), &result)?;
    }
    Ok(())
}

fn print_catalog(catalog: &Catalog, operation: Option<Operation>) {
    let recommended = operation
        .map(|op| catalog.recommended_indices(op))
        .unwrap_or_default();

    println!("Available matrix files in {}:", catalog.dir().display());
    for (i, entry) in catalog.entries().iter().enumerate() {
        let shape = match &entry.file {
            Ok(file) => file.shape.to_string(),
            Err(e) => format!("unreadable: {e}"),
        };
        let mark = if recommended.contains(&i) {
            " (recommended)"
        } else {
            ""
        };
        println!("{}. {} [{shape}]{mark}", i + 1, entry.name);
    }
}

fn handle_list(dir: &Path, operation: Option<Operation>) -> smtx::Result<()> {
    let catalog = Catalog::scan(dir, &CatalogConfig::with_input_dir(dir))?;
    print_catalog(&catalog, operation);

    if let Some(operation) = operation {
        let pairs = catalog.recommend(operation);
        if pairs.is_empty() {
            println!("No file pairs are compatible for {operation}");
        } else {
            println!("Compatible pairs for {operation}:");
            for (i, j) in pairs {
                println!("  {} {}", i + 1, j + 1);
            }
        }
    }
    Ok(())
}

fn handle_run(
    operation: Operation,
    first: usize,
    second: usize,
    config: &CatalogConfig,
) -> smtx::Result<()> {
    let catalog = Catalog::scan(&config.input_dir, config)?;
    print_catalog(&catalog, Some(operation));

    let left: SparseMatrix = catalog.load(first - 1)?;
    let right: SparseMatrix = catalog.load(second - 1)?;
    let result = compute(operation, &left, &right)?;

    println!("\n{} Result:", title(operation));
    println!("{result}");

    let path = config.result_path(operation);
    MatrixFile::write(&path, &result)?;
    println!("\nResult written to {}", path.display());
    Ok(())
}

fn handle_info(file: &Path, json: bool) -> smtx::Result<()> {
    let matrix: SparseMatrix = MatrixFile::read(file)?;
    let summary = MatrixSummary::new(file, &matrix);

    if json {
        let text = serde_json::to_string_pretty(&summary).map_err(|source| smtx::Error::Json {
            path: file.to_path_buf(),
            source,
        })?;
        println!("{text}");
    } else {
        println!("{summary}");
    }
    Ok(())
}
