use anyhow::Result;

mod app;

fn main() -> Result<()> {
    let args = file_sorter::cli::parse();
    app::run(args)
}
