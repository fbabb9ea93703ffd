mod error;
mod input;
mod table_file;
mod template;
mod text;

use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use datatable_lib::query::Direction;
use datatable_lib::query::PageSize;
use datatable_lib::query::SortState;
use datatable_lib::view::DataTable;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::WriteLogger;

use crate::error::CliError;
use crate::input::Input;
use crate::table_file::TableFile;
use crate::text::JsonRenderer;
use crate::text::Surface;
use crate::text::TextRenderer;

/// Browse a JSON table with search, sort and pagination.
#[derive(Debug, Parser)]
#[command(name = "datatable", version)]
struct Args {
    /// Table file (columns, rows and view defaults as JSON).
    table: PathBuf,

    /// Rows per page, overriding the table file.
    #[arg(short = 's', long)]
    page_size: Option<usize>,

    /// Show every row on one page.
    #[arg(long, conflicts_with = "page_size")]
    no_pagination: bool,

    /// Disable search input.
    #[arg(long)]
    no_search: bool,

    /// Initial sort field, overriding the table file.
    #[arg(long)]
    sort: Option<String>,

    /// Sort the initial field descending.
    #[arg(long, requires = "sort")]
    desc: bool,

    /// Emit each frame as a JSON line instead of a text table.
    #[arg(long)]
    json: bool,

    /// Truncate cells wider than this.
    #[arg(long, default_value_t = 40)]
    max_width: usize,

    /// Log file path.
    #[arg(long, default_value = "datatable.log")]
    log_file: PathBuf,

    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let log_file = File::create(&args.log_file)?;
    WriteLogger::init(args.log_level, Config::default(), log_file)?;

    let file = TableFile::load(&args.table)?;
    let mut config = file.into_config()?;

    if let Some(size) = args.page_size {
        config = config.with_page_size(PageSize::Fixed(size));
    }
    if args.no_pagination {
        config = config.unpaginated();
    }
    if args.no_search {
        config = config.with_search(false);
    }
    if let Some(field) = &args.sort {
        let direction = if args.desc { Direction::Desc } else { Direction::Asc };
        config = config.with_initial_sort(SortState::new(field, direction));
    }

    let surface = if args.json {
        Surface::Json(JsonRenderer::new(io::stdout()))
    } else {
        Surface::Text(TextRenderer::new(io::stdout(), args.max_width))
    };

    let mut table = DataTable::new(config.with_target(surface))?;
    log::info!("table ready with {} rows", table.rows().len());

    interact(&mut table, io::stdin().lock())
}

/// Reads commands until `quit` or end of input.
fn interact<B: BufRead>(
    table: &mut DataTable<Surface<io::Stdout>>,
    reader: B,
) -> Result<(), CliError> {
    let interactive = table.target().is_interactive();
    prompt(interactive)?;

    for line in reader.lines() {
        match input::parse(&line?) {
            Ok(Input::Table(command)) => table.dispatch(command),
            Ok(Input::NextPage) => table.next_page(),
            Ok(Input::PreviousPage) => table.previous_page(),
            Ok(Input::Refresh) => table.refresh(),
            Ok(Input::Help) => println!("{}", input::HELP),
            Ok(Input::Quit) => break,
            Ok(Input::Nothing) => {}
            Err(e) => {
                log::debug!("rejected input: {}", e);
                eprintln!("{}", e);
            }
        }
        prompt(interactive)?;
    }

    log::info!("session ended on page {}", table.state().page);
    Ok(())
}

fn prompt(interactive: bool) -> io::Result<()> {
    if interactive {
        let mut out = io::stdout();
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}
