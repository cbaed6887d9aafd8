//! glcdef CLI
//!
//! Reads preprocessed GL/GLU/GLFW header text and writes the generated
//! LuaJIT `ffi.cdef` segment. Unresolvable defines are reported on
//! stderr without affecting the exit status.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use glcdef_gen::{emit, Binding, Generator};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "glcdef")]
#[command(author, version, about = "GL header to LuaJIT ffi.cdef translator", long_about = None)]
struct Cli {
    /// Preprocessed input file, `-` for stdin
    #[arg(value_name = "FILE", default_value = "-")]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Logging goes to stderr; stdout carries the artifact
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let binding = read_binding(&cli.input)?;
    debug!(
        "collected {} declarations, {} defines, {} invalid",
        binding.cdefs.len(),
        binding.defines.len(),
        binding.invalid.len()
    );

    for invalid in &binding.invalid {
        eprintln!("{}", invalid);
    }

    match &cli.output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            emit::write_artifact(&mut out, &binding)?;
            out.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            emit::write_artifact(&mut out, &binding)?;
            out.flush()?;
        }
    }

    Ok(())
}

fn read_binding(input: &Path) -> Result<Binding> {
    let binding = if input.as_os_str() == "-" {
        let stdin = io::stdin();
        Generator::new().run(stdin.lock())?
    } else {
        Generator::new().run(BufReader::new(File::open(input)?))?
    };
    Ok(binding)
}
